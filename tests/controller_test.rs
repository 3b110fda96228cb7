//! Controller tests.
//!
//! Drive a [`Controller`] against an in-memory page surface: loading, the
//! featured highlight, control changes, and the failed-load state.

use booklog::{
    BookContainer, Card, ControlChange, Controller, Error, PageConfig, PageSurface, Period,
    SortOrder, TimeFilter, VisibilityTracker,
};
use chrono::NaiveDate;

const BOOKS_JSON: &[u8] = include_bytes!("fixtures/books.json");

// ============================================================================
// In-memory page surface
// ============================================================================

#[derive(Default)]
struct MemoryList {
    cards: Vec<(usize, Card)>,
    next_id: usize,
}

impl BookContainer for MemoryList {
    type Element = usize;

    fn clear(&mut self) -> Vec<usize> {
        self.cards.drain(..).map(|(id, _)| id).collect()
    }

    fn append(&mut self, card: &Card) -> booklog::Result<usize> {
        self.next_id += 1;
        self.cards.push((self.next_id, card.clone()));
        Ok(self.next_id)
    }
}

#[derive(Default)]
struct MemorySurface {
    list: MemoryList,
    tracker: VisibilityTracker<usize>,
    featured: Option<String>,
    picker_visible: Option<bool>,
    load_error: Option<String>,
}

impl MemorySurface {
    fn titles(&self) -> Vec<String> {
        self.list
            .cards
            .iter()
            .map(|(_, card)| {
                let start = card.html.find("<h4>").unwrap() + 4;
                let end = card.html.find("</h4>").unwrap();
                card.html[start..end].to_string()
            })
            .collect()
    }
}

impl PageSurface for MemorySurface {
    type Container = MemoryList;
    type Animator = VisibilityTracker<usize>;

    fn card_area(&mut self) -> (&mut MemoryList, &mut VisibilityTracker<usize>) {
        (&mut self.list, &mut self.tracker)
    }

    fn set_featured(&mut self, html: &str) {
        self.featured = Some(html.to_string());
    }

    fn set_period_picker_visible(&mut self, visible: bool) {
        self.picker_visible = Some(visible);
    }

    fn show_load_error(&mut self, message: &str) {
        self.load_error = Some(message.to_string());
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
}

fn loaded_controller() -> Controller<MemorySurface> {
    let mut controller = Controller::new(MemorySurface::default(), &PageConfig::default());
    controller.load_json(BOOKS_JSON, today()).expect("Failed to load fixture");
    controller
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_new_controller_hides_picker() {
    let controller = Controller::new(MemorySurface::default(), &PageConfig::default());
    assert_eq!(controller.surface().picker_visible, Some(false));
    assert!(!controller.store().is_loaded());
}

#[test]
fn test_load_renders_default_view() {
    let controller = loaded_controller();
    let surface = controller.surface();

    assert_eq!(surface.list.cards.len(), 7);
    // Default is newest first, unparseable dates last.
    assert_eq!(surface.titles().first().unwrap(), "Klara and the Sun");
    assert_eq!(surface.titles().last().unwrap(), "Mystery Date");
}

#[test]
fn test_load_sets_featured_book() {
    let controller = loaded_controller();
    assert_eq!(
        controller.surface().featured.as_deref(),
        Some("<strong>Klara and the Sun</strong> by Kazuo Ishiguro")
    );
}

#[test]
fn test_empty_store_leaves_featured_untouched() {
    let surface = MemorySurface {
        featured: Some("previous".to_string()),
        ..MemorySurface::default()
    };
    let mut controller = Controller::new(surface, &PageConfig::default());
    assert_eq!(controller.load_json(b"[]", today()).unwrap(), 0);
    assert_eq!(controller.surface().featured.as_deref(), Some("previous"));
    assert!(controller.surface().list.cards.is_empty());
}

#[test]
fn test_second_load_is_rejected() {
    let mut controller = loaded_controller();
    let result = controller.load_json(b"[]", today());
    assert!(matches!(result, Err(Error::AlreadyLoaded)));
    assert_eq!(controller.store().len(), 7);
    assert_eq!(controller.surface().list.cards.len(), 7);
}

#[test]
fn test_load_failure_shows_error_state() {
    let mut controller = Controller::new(MemorySurface::default(), &PageConfig::default());
    let err = controller.load_json(b"<html>404</html>", today()).unwrap_err();
    controller.load_failed(&err);

    let surface = controller.surface();
    assert_eq!(surface.load_error.as_deref(), Some("Failed to load books."));
    assert!(surface.featured.is_none());
    assert!(!controller.store().is_loaded());
}

// ============================================================================
// Control changes
// ============================================================================

#[test]
fn test_sort_change_rerenders() {
    let mut controller = loaded_controller();
    let rendered = controller
        .handle(ControlChange::Sort(SortOrder::RatingDesc), today())
        .unwrap();
    assert!(rendered);
    assert_eq!(
        controller.surface().titles(),
        vec![
            "The Left Hand of Darkness",
            "Piranesi",
            "Project Hail Mary",
            "Tomorrow, and Tomorrow, and Tomorrow",
            "Mystery Date",
            "The Dispossessed",
            "Klara and the Sun",
        ]
    );
}

#[test]
fn test_time_filters() {
    let mut controller = loaded_controller();

    controller.handle(ControlChange::Filter(TimeFilter::ThisYear), today()).unwrap();
    assert_eq!(controller.surface().list.cards.len(), 5);

    controller.handle(ControlChange::Filter(TimeFilter::Last3Months), today()).unwrap();
    assert_eq!(
        controller.surface().titles(),
        vec![
            "Klara and the Sun",
            "Tomorrow, and Tomorrow, and Tomorrow",
            "Project Hail Mary",
        ]
    );

    controller.handle(ControlChange::Filter(TimeFilter::ThisMonth), today()).unwrap();
    assert_eq!(controller.surface().titles(), vec!["Klara and the Sun"]);
}

#[test]
fn test_entering_specific_period_waits_for_picker() {
    let mut controller = loaded_controller();

    let rendered = controller
        .handle(ControlChange::Filter(TimeFilter::SpecificPeriod), today())
        .unwrap();
    assert!(!rendered);
    assert_eq!(controller.surface().picker_visible, Some(true));
    // The previous list stays on screen until a period is picked.
    assert_eq!(controller.surface().list.cards.len(), 7);

    let june = Period::new(2025, 6).unwrap();
    let rendered = controller.handle(ControlChange::Period(Some(june)), today()).unwrap();
    assert!(rendered);
    assert_eq!(
        controller.surface().titles(),
        vec!["Tomorrow, and Tomorrow, and Tomorrow", "Project Hail Mary"]
    );
}

#[test]
fn test_cleared_picker_renders_empty_list() {
    let mut controller = loaded_controller();
    controller
        .handle(ControlChange::Filter(TimeFilter::SpecificPeriod), today())
        .unwrap();
    controller
        .handle(ControlChange::Period(Some(Period::new(2025, 6).unwrap())), today())
        .unwrap();
    controller.handle(ControlChange::Period(None), today()).unwrap();
    assert!(controller.surface().list.cards.is_empty());
}

#[test]
fn test_leaving_specific_period_hides_picker_and_rerenders() {
    let mut controller = loaded_controller();
    controller
        .handle(ControlChange::Filter(TimeFilter::SpecificPeriod), today())
        .unwrap();

    let rendered = controller
        .handle(ControlChange::Filter(TimeFilter::All), today())
        .unwrap();
    assert!(rendered);
    assert_eq!(controller.surface().picker_visible, Some(false));
    assert_eq!(controller.surface().list.cards.len(), 7);
}

#[test]
fn test_reentering_specific_period_uses_existing_selection() {
    let mut controller = loaded_controller();
    controller
        .handle(ControlChange::Period(Some(Period::new(2025, 1).unwrap())), today())
        .unwrap();

    let rendered = controller
        .handle(ControlChange::Filter(TimeFilter::SpecificPeriod), today())
        .unwrap();
    assert!(rendered);
    assert_eq!(controller.surface().titles(), vec!["Piranesi"]);
}

#[test]
fn test_changes_before_load_do_not_render() {
    let mut controller = Controller::new(MemorySurface::default(), &PageConfig::default());
    let rendered = controller
        .handle(ControlChange::Sort(SortOrder::DateAsc), today())
        .unwrap();
    assert!(!rendered);
    assert_eq!(controller.view().sort, SortOrder::DateAsc);

    // The first load uses the updated view.
    controller.load_json(BOOKS_JSON, today()).unwrap();
    assert_eq!(controller.surface().titles()[0], "The Left Hand of Darkness");
}

// ============================================================================
// Re-rendering and visibility
// ============================================================================

#[test]
fn test_rerender_replaces_previous_cards() {
    let mut controller = loaded_controller();
    let first_ids: Vec<usize> = controller.surface().list.cards.iter().map(|(id, _)| *id).collect();

    controller.refresh(today()).unwrap();
    let surface = controller.surface();
    assert_eq!(surface.list.cards.len(), 7);
    assert!(
        surface
            .list
            .cards
            .iter()
            .all(|(id, _)| !first_ids.contains(id)),
        "stale card elements remain after re-render"
    );
}

#[test]
fn test_new_cards_are_registered_for_scroll_in() {
    let mut controller = loaded_controller();
    controller
        .handle(ControlChange::Filter(TimeFilter::ThisMonth), today())
        .unwrap();

    let surface = controller.surface_mut();
    let (id, _) = surface.list.cards[0].clone();
    assert!(!surface.tracker.is_shown(&id));
    assert!(surface.tracker.observe(&id, 0.25));
    assert!(surface.tracker.is_shown(&id));
}

#[test]
fn test_rerenders_only_track_live_cards() {
    let mut controller = loaded_controller();
    for sort in [SortOrder::RatingDesc, SortOrder::DateAsc, SortOrder::RatingAsc] {
        controller.handle(ControlChange::Sort(sort), today()).unwrap();
    }

    let surface = controller.surface();
    assert_eq!(surface.tracker.len(), surface.list.cards.len());
    for (id, _) in &surface.list.cards {
        assert!(surface.tracker.visibility(id).is_some());
    }
}

#[test]
fn test_default_view_from_config() {
    let config = PageConfig::from_json(r#"{"default_sort": "date-asc"}"#).unwrap();
    let mut controller = Controller::new(MemorySurface::default(), &config);
    controller.load_json(BOOKS_JSON, today()).unwrap();
    assert_eq!(controller.surface().titles()[0], "The Left Hand of Darkness");
}
