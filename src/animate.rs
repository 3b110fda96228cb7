//! Scroll-in visibility for cards.
//!
//! An element registered with a [`VisibilityAnimator`] gains a permanent
//! "shown" state the first time at least [`DEFAULT_THRESHOLD`] of its area
//! is inside the viewport. Scrolling it back out never removes the state.
//!
//! [`VisibilityTracker`] is the host-independent bookkeeping; the browser
//! binding feeds it intersection ratios from an `IntersectionObserver`.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{Error, Result};

/// Fraction of an element that must be visible before it is shown.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Something that can watch elements for scroll-in.
pub trait VisibilityAnimator<E: ?Sized> {
    /// Start watching `element`. Registering the same element twice is a no-op.
    fn register(&mut self, element: &E);

    /// Stop watching an element that has been removed from the page.
    fn forget(&mut self, _element: &E) {}
}

/// Per-element visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

/// Tracks registered elements and which of them have been shown.
#[derive(Debug, Clone)]
pub struct VisibilityTracker<K> {
    threshold: f64,
    elements: HashMap<K, Visibility>,
}

impl<K: Eq + Hash + Clone> VisibilityTracker<K> {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            elements: HashMap::new(),
        }
    }

    pub fn with_threshold(threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;
        Ok(Self {
            threshold,
            elements: HashMap::new(),
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start tracking `key`. Existing state is kept on re-registration.
    pub fn register_key(&mut self, key: K) {
        self.elements.entry(key).or_insert(Visibility::Hidden);
    }

    /// Record an intersection ratio for `key`.
    ///
    /// Returns `true` only on the observation that first shows the element.
    /// Unregistered keys are ignored.
    pub fn observe(&mut self, key: &K, ratio: f64) -> bool {
        let Some(state) = self.elements.get_mut(key) else {
            return false;
        };
        if *state == Visibility::Hidden && ratio >= self.threshold {
            *state = Visibility::Shown;
            true
        } else {
            false
        }
    }

    pub fn visibility(&self, key: &K) -> Option<Visibility> {
        self.elements.get(key).copied()
    }

    pub fn is_shown(&self, key: &K) -> bool {
        self.visibility(key) == Some(Visibility::Shown)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for VisibilityTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> VisibilityAnimator<K> for VisibilityTracker<K> {
    fn register(&mut self, element: &K) {
        self.register_key(element.clone());
    }

    fn forget(&mut self, element: &K) {
        self.elements.remove(element);
    }
}

/// Check that a threshold is a usable intersection ratio.
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold(threshold))
    }
}
