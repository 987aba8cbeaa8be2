//! Fixed-point handling for item prices.
//!
//! Prices travel as JSON numbers but are stored as `NUMERIC(10, 2)`. The
//! conversion happens here and nowhere else: [`to_fixed`] on the way in,
//! [`to_number`] on the way out. Comparisons and storage always use the
//! [`Decimal`] form.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CoreError, FieldViolation};

/// Number of decimal places kept in storage.
pub const PRICE_SCALE: u32 = 2;

/// Largest value a `NUMERIC(10, 2)` column can hold.
/// The mantissa 9_999_999_999 spans the low and mid 32-bit words.
pub const PRICE_MAX: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Convert a transport price into its stored fixed-point form.
///
/// Extra decimals are rounded half away from zero. A price that is not
/// strictly positive after rounding, or that does not fit the column, is
/// rejected as a `price` violation.
pub fn to_fixed(price: f64) -> Result<Decimal, CoreError> {
    round_to_fixed(price).map_err(violation)
}

/// Same as [`to_fixed`], but the error is the broken rule alone. Used by the
/// input validators so price is reported alongside every other field.
pub fn round_to_fixed(price: f64) -> Result<Decimal, &'static str> {
    if !price.is_finite() {
        return Err("must be a finite number");
    }

    // `Display` for f64 yields the shortest digits that round-trip, i.e. the
    // value the caller wrote, rather than the binary expansion.
    let mut decimal = match price.to_string().parse::<Decimal>() {
        Ok(decimal) => decimal,
        // Only magnitudes far outside the column fail to parse.
        Err(_) if price.abs() < 1.0 => Decimal::ZERO,
        Err(_) if price < 0.0 => Decimal::MIN,
        Err(_) => Decimal::MAX,
    }
    .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

    if decimal <= Decimal::ZERO {
        return Err("must be greater than 0");
    }
    if decimal > PRICE_MAX {
        return Err("must not exceed 99999999.99");
    }
    decimal.rescale(PRICE_SCALE);
    Ok(decimal)
}

/// Convert a stored price into the number sent over the wire.
pub fn to_number(price: Decimal) -> f64 {
    // The decimal's text form is exact, so parsing it yields the nearest
    // f64 and re-serializes as the same digits.
    price.to_string().parse().unwrap_or(0.0)
}

fn violation(rule: &str) -> CoreError {
    CoreError::InvalidFields(vec![FieldViolation::new("price", rule)])
}
