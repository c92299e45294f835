//! Browser front end: binds the form components to the live DOM.
//!
//! On module start, the four page elements are looked up by their fixed
//! identifiers, adapted to the core element traits, and the two `change`
//! handlers are subscribed. A page missing any element fails the whole
//! start with a descriptive [`PageError`] instead of binding partially.
//!
//! The event closures own their components and are leaked with
//! [`Closure::forget`]: listeners live for the page's lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, Window};

use tripform_core::calculator::TripCostCalculator;
use tripform_core::element::{AlertSink, DisplayElement, InputElement};
use tripform_core::error::PageError;
use tripform_core::event::ChangeEvent;
use tripform_core::guard::CsvGuard;
use tripform_core::ids;

// ---------------------------------------------------------------------------
// DOM adapters
// ---------------------------------------------------------------------------

/// [`InputElement`] backed by an `<input>` element.
#[derive(Clone)]
pub struct WebInput(HtmlInputElement);

impl InputElement for WebInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&mut self, value: &str) {
        self.0.set_value(value);
    }
}

/// [`DisplayElement`] backed by an element's `innerText`.
#[derive(Clone)]
pub struct WebDisplay(HtmlElement);

impl DisplayElement for WebDisplay {
    fn text(&self) -> String {
        self.0.inner_text()
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_inner_text(text);
    }
}

/// [`AlertSink`] backed by `window.alert` (blocking, modal).
#[derive(Clone)]
pub struct WebAlerts(Window);

impl AlertSink for WebAlerts {
    fn alert(&mut self, message: &str) {
        // A window that refuses to alert leaves nothing to recover.
        let _ = self.0.alert_with_message(message);
    }
}

// ---------------------------------------------------------------------------
// Element lookup
// ---------------------------------------------------------------------------

fn js_error(err: &PageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn lookup_input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| js_error(&PageError::missing_element(id)))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| js_error(&PageError::not_an_input(id)))
}

fn lookup_display(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| js_error(&PageError::missing_element(id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| js_error(&PageError::missing_element(id)))
}

/// The committed value of the control that fired `event`.
fn event_value(event: &Event) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Bind both components to the current page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    bind_csv_guard(&window, &document)?;
    bind_trip_cost(&document)?;
    Ok(())
}

fn bind_csv_guard(window: &Window, document: &Document) -> Result<(), JsValue> {
    let file = lookup_input(document, ids::FILE)?;

    let mut guard = CsvGuard::bind(WebInput(file.clone()), WebAlerts(window.clone()));
    let on_file = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        guard.on_change(&ChangeEvent::new(event_value(&event)));
    });
    file.add_event_listener_with_callback("change", on_file.as_ref().unchecked_ref())?;
    on_file.forget();
    Ok(())
}

fn bind_trip_cost(document: &Document) -> Result<(), JsValue> {
    let price = lookup_input(document, ids::FUEL_PRICE)?;
    let consumed = lookup_display(document, ids::FUEL_CONSUMED)?;
    let cost = lookup_display(document, ids::TRIP_COST)?;

    // Writes the initial product before any event fires.
    let mut calc = TripCostCalculator::bind(
        WebInput(price.clone()),
        WebDisplay(consumed),
        WebDisplay(cost),
    );
    let on_price = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        calc.on_price_change(&ChangeEvent::new(event_value(&event)));
    });
    price.add_event_listener_with_callback("change", on_price.as_ref().unchecked_ref())?;
    on_price.forget();
    Ok(())
}
