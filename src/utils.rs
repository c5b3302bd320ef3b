use crate::constants::*;
use crate::errors::{ProtocolError, Result};

/// Collateral ratio as an unscaled percentage.
///
/// Returns 0 when `debt` is zero: the ratio check does not apply to a
/// debt-free vault and callers must treat it as trivially solvent, never as
/// insolvent. All intermediates are `u128` and multiplication happens before
/// division so precision is only lost in the final floor.
pub fn collateral_ratio(collateral: u64, debt: u64, price: u64) -> Result<u64> {
    if debt == 0 {
        return Ok(0);
    }

    let numerator = (collateral as u128)
        .checked_mul(price as u128)
        .ok_or(ProtocolError::MathOverflow)?
        .checked_mul(100)
        .ok_or(ProtocolError::MathOverflow)?;
    let denominator = (debt as u128)
        .checked_mul(PRECISION as u128)
        .ok_or(ProtocolError::MathOverflow)?;

    let ratio = numerator
        .checked_div(denominator)
        .ok_or(ProtocolError::MathOverflow)?;
    u64::try_from(ratio).map_err(|_| ProtocolError::MathOverflow)
}

/// Stability fee owed on `debt` since `last_fee_timestamp`, prorated from
/// the annual rate.
///
/// Read-only projection: the caller settles the result into stored debt as
/// part of its own mutation. A `now` earlier than the checkpoint counts as
/// zero elapsed time.
pub fn accrued_stability_fee(debt: u64, last_fee_timestamp: u64, now: u64) -> Result<u64> {
    if debt == 0 {
        return Ok(0);
    }

    let elapsed = now.saturating_sub(last_fee_timestamp);
    let fee = (debt as u128)
        .checked_mul(STABILITY_FEE_RATE as u128)
        .ok_or(ProtocolError::MathOverflow)?
        .checked_mul(elapsed as u128)
        .ok_or(ProtocolError::MathOverflow)?
        .checked_div(SECONDS_PER_YEAR as u128 * 100)
        .ok_or(ProtocolError::MathOverflow)?;
    u64::try_from(fee).map_err(|_| ProtocolError::MathOverflow)
}

/// Collateral units seized for repaying `debt_amount` at `price`, bonus
/// included.
///
/// `price` must already be validated non-zero by the caller. The caller is
/// responsible for clamping the result to the vault's actual collateral.
pub fn liquidation_seizure(debt_amount: u64, price: u64) -> Result<u64> {
    let numerator = (debt_amount as u128)
        .checked_mul(PRECISION as u128)
        .ok_or(ProtocolError::MathOverflow)?
        .checked_mul((100 + LIQUIDATION_PENALTY) as u128)
        .ok_or(ProtocolError::MathOverflow)?;
    let denominator = (price as u128)
        .checked_mul(100)
        .ok_or(ProtocolError::MathOverflow)?;

    let seized = numerator
        .checked_div(denominator)
        .ok_or(ProtocolError::MathOverflow)?;
    u64::try_from(seized).map_err(|_| ProtocolError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // 50,000 USD per collateral asset, 6-decimal scale.
    const PRICE: u64 = 50_000_000_000;

    #[test]
    fn ratio_zero_debt_sentinel() {
        assert_eq!(collateral_ratio(0, 0, PRICE).unwrap(), 0);
        assert_eq!(collateral_ratio(1_000_000, 0, PRICE).unwrap(), 0);
        assert_eq!(collateral_ratio(1_000_000, 0, 0).unwrap(), 0);
    }

    #[test]
    fn ratio_exact_values() {
        // 0.5 collateral asset against 20,000 stable units at 50,000 USD.
        assert_eq!(
            collateral_ratio(500_000, 20_000_000_000, PRICE).unwrap(),
            125
        );
        // Same collateral against 16,000 stable units.
        assert_eq!(
            collateral_ratio(500_000, 16_000_000_000, PRICE).unwrap(),
            156
        );
    }

    #[test]
    fn ratio_floor_at_minimum_boundary() {
        assert_eq!(
            collateral_ratio(500_000, 16_666_666_666, PRICE).unwrap(),
            150
        );
        assert_eq!(
            collateral_ratio(500_000, 16_666_666_667, PRICE).unwrap(),
            149
        );
    }

    #[test]
    fn ratio_overflow_is_reported() {
        assert_eq!(
            collateral_ratio(u64::MAX, 1, u64::MAX),
            Err(ProtocolError::MathOverflow)
        );
    }

    #[test]
    fn fee_full_and_half_year() {
        let debt = 16_000_000_000;
        assert_eq!(
            accrued_stability_fee(debt, 0, SECONDS_PER_YEAR).unwrap(),
            320_000_000
        );
        assert_eq!(
            accrued_stability_fee(debt, 0, SECONDS_PER_YEAR / 2).unwrap(),
            160_000_000
        );
    }

    #[test]
    fn fee_zero_debt_and_zero_elapsed() {
        assert_eq!(accrued_stability_fee(0, 0, SECONDS_PER_YEAR).unwrap(), 0);
        assert_eq!(accrued_stability_fee(1_000_000, 500, 500).unwrap(), 0);
        // Clock regression counts as zero elapsed time.
        assert_eq!(accrued_stability_fee(1_000_000, 500, 400).unwrap(), 0);
    }

    #[test]
    fn seizure_includes_bonus() {
        // Repaying 10,000 stable units at 50,000 USD: 0.2 collateral asset
        // plus the 10% bonus.
        assert_eq!(liquidation_seizure(10_000_000_000, PRICE).unwrap(), 220_000);
    }

    #[test]
    fn seizure_rejects_zero_price() {
        assert_eq!(
            liquidation_seizure(1_000_000, 0),
            Err(ProtocolError::MathOverflow)
        );
    }

    proptest! {
        // Ranges keep the resulting percentage comfortably inside u64.
        #[test]
        fn ratio_monotone_in_collateral(
            c in 0u64..10_000_000_000,
            delta in 0u64..1_000_000_000,
            d in 1u64..10_000_000_000,
            p in 1u64..10_000_000_000,
        ) {
            let lo = collateral_ratio(c, d, p).unwrap();
            let hi = collateral_ratio(c + delta, d, p).unwrap();
            prop_assert!(hi >= lo);
        }

        #[test]
        fn ratio_monotone_in_price(
            c in 0u64..10_000_000_000,
            d in 1u64..10_000_000_000,
            p in 1u64..10_000_000_000,
            delta in 0u64..1_000_000_000,
        ) {
            let lo = collateral_ratio(c, d, p).unwrap();
            let hi = collateral_ratio(c, d, p + delta).unwrap();
            prop_assert!(hi >= lo);
        }

        #[test]
        fn ratio_antitone_in_debt(
            c in 0u64..10_000_000_000,
            d in 1u64..10_000_000_000,
            delta in 0u64..1_000_000_000,
            p in 1u64..10_000_000_000,
        ) {
            let hi = collateral_ratio(c, d, p).unwrap();
            let lo = collateral_ratio(c, d + delta, p).unwrap();
            prop_assert!(lo <= hi);
        }
    }
}
