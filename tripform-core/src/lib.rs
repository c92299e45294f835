//! Form-interaction components for the fuel-trip dashboard page.
//!
//! Two independent, stateless behaviors:
//! - [`guard::CsvGuard`] — rejects file selections that do not end in `.csv`.
//! - [`calculator::TripCostCalculator`] — keeps the trip-cost display equal
//!   to `price × consumed`, formatted to two decimal places.
//!
//! Neither component touches the DOM directly: element access goes through
//! the trait seams in [`element`], so both behaviors run unchanged against a
//! browser document (the `tripform-wasm` crate), a terminal harness
//! (`tripform-cli`), or in-memory mock elements in tests.

pub mod calculator;
pub mod cost;
pub mod element;
pub mod error;
pub mod event;
pub mod guard;
pub mod selection;

/// Fixed element identifiers the host page must provide.
pub mod ids {
    /// File-selection control guarded by [`crate::guard::CsvGuard`].
    pub const FILE: &str = "file";
    /// Fuel-price input watched by the calculator.
    pub const FUEL_PRICE: &str = "fuelPrice";
    /// Fuel-consumed display, read but never written.
    pub const FUEL_CONSUMED: &str = "fuelConsumed";
    /// Trip-cost display, the calculator's sole write target.
    pub const TRIP_COST: &str = "tripCost";
}
