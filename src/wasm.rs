//! WASM bindings for the reading-log page.
//!
//! This module drives the real page via wasm-bindgen: it fetches the data
//! file, wires the filter/sort/picker controls to a [`Controller`], and
//! runs an `IntersectionObserver` that fades cards in.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Response,
};

use crate::animate::VisibilityAnimator;
use crate::config::PageConfig;
use crate::controller::{ControlChange, Controller, PageSurface};
use crate::render::{BookContainer, Card, escape_html};
use crate::util::today;
use crate::view::{Period, SortOrder, TimeFilter};
use crate::{Error, Result};

type SharedController = Rc<RefCell<Controller<DomSurface>>>;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Start the page: observe static cards, wire the controls, and load books.
///
/// `config_json` optionally overrides element ids, the data URL, and other
/// [`PageConfig`] fields.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json).map_err(to_js)?,
        None => PageConfig::default(),
    };
    let document = document().map_err(to_js)?;

    let mut animator = DomAnimator::new(&config).map_err(to_js)?;
    observe_static_cards(&document, &config, &mut animator).map_err(to_js)?;

    let surface = DomSurface::new(&document, &config, animator).map_err(to_js)?;
    let controller: SharedController = Rc::new(RefCell::new(Controller::new(surface, &config)));

    wire_controls(&document, &config, &controller).map_err(to_js)?;

    let url = config.data_url.clone();
    spawn_local(async move {
        let loaded = match fetch_bytes(&url).await {
            Ok(data) => controller.borrow_mut().load_json(&data, today()),
            Err(e) => Err(e),
        };
        if let Err(e) = loaded {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
            controller.borrow_mut().load_failed(&e);
        }
    });

    Ok(())
}

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Dom("document".to_string()))
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| Error::Dom(format!("#{id}")))
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let window = web_sys::window().ok_or_else(|| Error::Dom("window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| Error::Fetch(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| Error::Fetch(format!("{url}: not a response")))?;
    if !response.ok() {
        return Err(Error::Fetch(format!("{url}: HTTP {}", response.status())));
    }
    let text = response.text().map_err(|e| Error::Fetch(js_message(&e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| Error::Fetch(js_message(&e)))?;
    text.as_string()
        .map(String::into_bytes)
        .ok_or_else(|| Error::Fetch(format!("{url}: body is not text")))
}

/// Adds the shown class to observed elements once they scroll into view.
pub struct DomAnimator {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl DomAnimator {
    fn new(config: &PageConfig) -> Result<Self> {
        let shown_class = config.shown_class.clone();
        let threshold = config.threshold;
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    // The observer's own threshold decides when this fires.
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(&shown_class);
                    // Shown is permanent; nothing left to watch.
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| Error::Dom(js_message(&e)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityAnimator<Element> for DomAnimator {
    fn register(&mut self, element: &Element) {
        // Observing an already-observed element is a no-op.
        self.observer.observe(element);
    }

    fn forget(&mut self, element: &Element) {
        self.observer.unobserve(element);
    }
}

fn observe_static_cards(
    document: &Document,
    config: &PageConfig,
    animator: &mut DomAnimator,
) -> Result<()> {
    let cards = document
        .query_selector_all(&config.static_card_selector)
        .map_err(|e| Error::Dom(js_message(&e)))?;
    for i in 0..cards.length() {
        if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            animator.register(&card);
        }
    }
    log::debug!("observing {} static cards", cards.length());
    Ok(())
}

/// The `#book-list` element and the cards rendered into it.
pub struct DomBookList {
    document: Document,
    list: Element,
    cards: Vec<Element>,
}

impl BookContainer for DomBookList {
    type Element = Element;

    fn clear(&mut self) -> Vec<Element> {
        self.list.set_inner_html("");
        std::mem::take(&mut self.cards)
    }

    fn append(&mut self, card: &Card) -> Result<Element> {
        let element = self
            .document
            .create_element("div")
            .map_err(|e| Error::Dom(js_message(&e)))?;
        element.set_class_name(&card.class);
        element.set_inner_html(&card.html);
        self.list
            .append_child(&element)
            .map_err(|e| Error::Dom(js_message(&e)))?;
        self.cards.push(element.clone());
        Ok(element)
    }
}

/// The page as seen by the controller.
pub struct DomSurface {
    list: DomBookList,
    animator: DomAnimator,
    featured: Element,
    picker: HtmlElement,
}

impl DomSurface {
    fn new(document: &Document, config: &PageConfig, animator: DomAnimator) -> Result<Self> {
        Ok(Self {
            list: DomBookList {
                document: document.clone(),
                list: element_by_id(document, &config.book_list_id)?,
                cards: Vec::new(),
            },
            animator,
            featured: element_by_id(document, &config.featured_id)?,
            picker: element_by_id(document, &config.period_picker_id)?,
        })
    }
}

impl PageSurface for DomSurface {
    type Container = DomBookList;
    type Animator = DomAnimator;

    fn card_area(&mut self) -> (&mut DomBookList, &mut DomAnimator) {
        (&mut self.list, &mut self.animator)
    }

    fn set_featured(&mut self, html: &str) {
        self.featured.set_inner_html(html);
    }

    fn set_period_picker_visible(&mut self, visible: bool) {
        let display = if visible { "inline-block" } else { "none" };
        let _ = self.picker.style().set_property("display", display);
    }

    fn show_load_error(&mut self, message: &str) {
        self.list
            .list
            .set_inner_html(&format!("<p class=\"load-error\">{}</p>", escape_html(message)));
    }
}

fn wire_controls(document: &Document, config: &PageConfig, controller: &SharedController) -> Result<()> {
    let filter: HtmlSelectElement = element_by_id(document, &config.filter_select_id)?;
    let sort: HtmlSelectElement = element_by_id(document, &config.sort_select_id)?;
    let picker: HtmlInputElement = element_by_id(document, &config.period_picker_id)?;

    // Reflect the starting view in the controls.
    let view = *controller.borrow().view();
    filter.set_value(view.filter.as_str());
    sort.set_value(view.sort.as_str());

    let source = filter.clone();
    on_change(&filter, controller, move || {
        source.value().parse::<TimeFilter>().map(ControlChange::Filter)
    })?;

    let source = sort.clone();
    on_change(&sort, controller, move || {
        source.value().parse::<SortOrder>().map(ControlChange::Sort)
    })?;

    let source = picker.clone();
    on_change(&picker, controller, move || {
        Period::from_picker(&source.value()).map(ControlChange::Period)
    })?;

    Ok(())
}

/// Forward `change` events from `target` to the controller.
fn on_change<F>(target: &web_sys::EventTarget, controller: &SharedController, read: F) -> Result<()>
where
    F: Fn() -> Result<ControlChange> + 'static,
{
    let controller = Rc::clone(controller);
    let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let outcome = read().and_then(|change| controller.borrow_mut().handle(change, today()));
        if let Err(e) = outcome {
            log::warn!("ignoring control change: {e}");
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    target
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .map_err(|e| Error::Dom(js_message(&e)))?;
    // The listener lives as long as the page.
    listener.forget();
    Ok(())
}
