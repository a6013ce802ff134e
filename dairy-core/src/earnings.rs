//! Earnings computation for milk deliveries
//!
//! The single business rule with real content in this system:
//! `amount = round(litres x fat_percentage x rate_per_fat)`, rounded half
//! away from zero to the nearest whole unit of currency. The rate is read
//! from the global config at write time and frozen into the record; later
//! rate changes never touch stored amounts.

use crate::error::{LedgerError, LedgerResult};

/// Upper bound for the fat percentage input, inclusive.
pub const MAX_FAT_PERCENTAGE: f64 = 10.0;

/// Compute the earnings amount for a milk delivery.
///
/// Validation order matters and is part of the contract:
/// 1. litres and fat percentage must both be positive
/// 2. fat percentage must not exceed [`MAX_FAT_PERCENTAGE`]
/// 3. a non-positive computed amount means the rate was never configured
pub fn compute_amount(litres: f64, fat_percentage: f64, rate_per_fat: f64) -> LedgerResult<i64> {
    if litres <= 0.0 || fat_percentage <= 0.0 {
        return Err(LedgerError::NonPositiveQuantity);
    }
    if fat_percentage > MAX_FAT_PERCENTAGE {
        return Err(LedgerError::FatPercentageOutOfRange);
    }
    if rate_per_fat < 0.0 {
        return Err(LedgerError::Validation("Invalid rate".to_string()));
    }

    // f64::round is half-away-from-zero; inputs are positive here, so this
    // matches round-half-up as well.
    let amount = (litres * fat_percentage * rate_per_fat).round();
    if amount <= 0.0 {
        return Err(LedgerError::RateUnset);
    }

    Ok(amount as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_amount() {
        assert_eq!(compute_amount(10.0, 5.0, 9.0).expect("amount"), 450);
        assert_eq!(compute_amount(1.0, 1.0, 1.0).expect("amount"), 1);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 3.5 * 1.0 * 1.0 = 3.5 -> 4
        assert_eq!(compute_amount(3.5, 1.0, 1.0).expect("amount"), 4);
        // 1.5 * 3.0 * 0.5 = 2.25 -> 2
        assert_eq!(compute_amount(1.5, 3.0, 0.5).expect("amount"), 2);
        // 12.3 * 6.5 * 7.25 = 579.6375 -> 580
        assert_eq!(compute_amount(12.3, 6.5, 7.25).expect("amount"), 580);
    }

    #[test]
    fn test_deterministic() {
        let a = compute_amount(7.7, 4.2, 8.35).expect("amount");
        let b = compute_amount(7.7, 4.2, 8.35).expect("amount");
        assert_eq!(a, b);
    }

    #[test]
    fn test_monotonic_in_each_input() {
        let base = compute_amount(10.0, 5.0, 9.0).expect("amount");
        assert!(compute_amount(11.0, 5.0, 9.0).expect("amount") >= base);
        assert!(compute_amount(10.0, 6.0, 9.0).expect("amount") >= base);
        assert!(compute_amount(10.0, 5.0, 10.0).expect("amount") >= base);
    }

    #[test]
    fn test_rejects_non_positive_quantities() {
        assert!(matches!(
            compute_amount(0.0, 5.0, 9.0),
            Err(LedgerError::NonPositiveQuantity)
        ));
        assert!(matches!(
            compute_amount(-1.0, 5.0, 9.0),
            Err(LedgerError::NonPositiveQuantity)
        ));
        assert!(matches!(
            compute_amount(10.0, 0.0, 9.0),
            Err(LedgerError::NonPositiveQuantity)
        ));
    }

    #[test]
    fn test_rejects_fat_over_ten() {
        assert!(matches!(
            compute_amount(10.0, 10.1, 9.0),
            Err(LedgerError::FatPercentageOutOfRange)
        ));
        // exactly 10 is allowed
        assert_eq!(compute_amount(10.0, 10.0, 9.0).expect("amount"), 900);
    }

    #[test]
    fn test_quantity_check_wins_over_fat_range() {
        // both litres <= 0 and fat > 10: the quantity error comes first
        assert!(matches!(
            compute_amount(0.0, 11.0, 9.0),
            Err(LedgerError::NonPositiveQuantity)
        ));
    }

    #[test]
    fn test_zero_rate_is_a_distinct_error() {
        assert!(matches!(
            compute_amount(10.0, 5.0, 0.0),
            Err(LedgerError::RateUnset)
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            compute_amount(10.0, 5.0, -1.0),
            Err(LedgerError::Validation(_))
        ));
    }
}
