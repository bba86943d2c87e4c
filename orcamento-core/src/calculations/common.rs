//! Common utility functions for composition calculations.
//!
//! This module provides shared functionality used across the roll-up
//! calculations, including rounding and percentage application.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use orcamento_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage (in points, e.g. `23.5` for 23.5%) to a base amount.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use orcamento_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(1000.00), dec!(23.00)), dec!(230.00));
/// assert_eq!(percent_of(dec!(1000.00), dec!(0.00)), dec!(0.00));
/// ```
pub fn percent_of(
    base: Decimal,
    percentage: Decimal,
) -> Decimal {
    round_half_up(base * percentage / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(123.45));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_applies_percentage_points() {
        let result = percent_of(dec!(1500.00), dec!(11.2));

        assert_eq!(result, dec!(168.00));
    }

    #[test]
    fn percent_of_zero_percentage_yields_zero() {
        let result = percent_of(dec!(1500.00), dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn percent_of_negative_base_propagates() {
        let result = percent_of(dec!(-100.00), dec!(10.00));

        assert_eq!(result, dec!(-10.00));
    }

    #[test]
    fn percent_of_rounds_to_cents() {
        let result = percent_of(dec!(333.33), dec!(3.333));

        assert_eq!(result, dec!(11.11));
    }
}
