//! Trip-cost arithmetic: `fuelPrice ($/g) × fuelConsumed (g) = tripCost ($)`.
//!
//! Key design points:
//! - Inputs arrive as raw control strings and go through web-style numeric
//!   coercion: a blank string coerces to `0`, anything unparsable to NaN.
//! - Invalid operands propagate: a NaN product is *displayed* as `"NaN"`
//!   rather than raised as an error. The page shows the failure, the
//!   handlers never abort.
//! - The display format is fixed two-decimal, rounding half away from zero
//!   (standard fixed-point display conversion, not banker's rounding).

// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

/// Coerce a raw control string to a number.
///
/// A trimmed-empty string coerces to `0.0`; any other string that fails
/// standard float parsing coerces to NaN.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Fixed two-decimal formatting
// ---------------------------------------------------------------------------

/// Format a number with exactly two digits after the decimal point,
/// rounding half away from zero.
///
/// Non-finite values format as `"NaN"`, `"Infinity"` or `"-Infinity"`.
#[must_use]
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    // `f64::round` is half-away-from-zero; `{:.2}` alone would round
    // half-to-even.
    let scaled = (value * 100.0).round();
    format!("{:.2}", scaled / 100.0)
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// The trip-cost display string for a raw price and consumed pair.
#[must_use]
pub fn trip_cost(price: &str, consumed: &str) -> String {
    format_fixed2(coerce_number(price) * coerce_number(consumed))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
