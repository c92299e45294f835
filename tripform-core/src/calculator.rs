//! The Trip Cost Calculator component.
//!
//! Keeps the trip-cost display equal to `price × consumed`, formatted to
//! two decimal places. The product is written once at bind time (before any
//! event fires) and again on every committed change of the price input.
//!
//! Nothing listens to the consumed display: if it changes from outside, the
//! cost display stays stale until the next price change re-reads it.

use log::debug;

use crate::cost::trip_cost;
use crate::element::{DisplayElement, InputElement};
use crate::event::ChangeEvent;

/// Calculator bound to the price input, the consumed display and the cost
/// display. Holds no state beyond the element handles.
#[derive(Debug)]
pub struct TripCostCalculator<P, C, T> {
    price: P,
    consumed: C,
    cost: T,
}

impl<P, C, T> TripCostCalculator<P, C, T>
where
    P: InputElement,
    C: DisplayElement,
    T: DisplayElement,
{
    /// Bind the calculator and write the initial trip cost.
    ///
    /// Reads price and consumed immediately, so the cost display is
    /// populated before the first change event.
    pub fn bind(price: P, consumed: C, cost: T) -> Self {
        let mut calc = Self {
            price,
            consumed,
            cost,
        };
        let initial = calc.price.value();
        calc.refresh(&initial);
        calc
    }

    /// Handle a committed change of the fuel price.
    ///
    /// Uses the price carried by the event (not the bound handle), re-reads
    /// the consumed display, and overwrites the cost display. Returns the
    /// new display string.
    pub fn on_price_change(&mut self, event: &ChangeEvent) -> String {
        self.refresh(&event.value)
    }

    fn refresh(&mut self, price: &str) -> String {
        let display = trip_cost(price, &self.consumed.text());
        debug!(
            "trip cost: price {:?} × consumed {:?} = {display}",
            price,
            self.consumed.text()
        );
        self.cost.set_text(&display);
        display
    }
}
