use serde::{Deserialize, Serialize};

use crate::constants::{LIQUIDATION_THRESHOLD, MIN_COLLATERAL_RATIO};
use crate::errors::{ProtocolError, Result};

/// A single owner's collateral/debt position.
///
/// Amounts are in the smallest unit of each asset. A vault with zero
/// collateral and zero debt is logically absent and is removed from the
/// ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    /// Locked collateral.
    pub collateral: u64,

    /// Outstanding stable-asset debt.
    pub debt: u64,

    /// Checkpoint for stability-fee accrual.
    pub last_fee_timestamp: u64,
}

impl Vault {
    pub fn is_empty(&self) -> bool {
        self.collateral == 0 && self.debt == 0
    }
}

/// Classification of a vault against the two policy thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultStatus {
    /// Solvent: debt-free, or at or above the minimum collateral ratio.
    Active,
    /// Between the liquidation threshold and the minimum ratio.
    AtRisk,
    /// Below the liquidation threshold, eligible for liquidation.
    Liquidatable,
}

impl VaultStatus {
    /// Classify a ratio produced by [`crate::utils::collateral_ratio`] for a
    /// vault with non-zero debt.
    pub fn from_ratio(ratio: u64) -> Self {
        if ratio >= MIN_COLLATERAL_RATIO {
            VaultStatus::Active
        } else if ratio >= LIQUIDATION_THRESHOLD {
            VaultStatus::AtRisk
        } else {
            VaultStatus::Liquidatable
        }
    }
}

/// Running sums across all vaults, updated in lockstep with every vault
/// mutation.
///
/// `total_debt` tracks stored debt only: fees accrued since a vault's last
/// settlement are invisible here until that vault is next touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalTotals {
    pub total_collateral: u64,
    pub total_debt: u64,
}

impl GlobalTotals {
    /// Both fields updated or neither.
    pub fn add(&mut self, collateral: u64, debt: u64) -> Result<()> {
        let total_collateral = self
            .total_collateral
            .checked_add(collateral)
            .ok_or(ProtocolError::MathOverflow)?;
        let total_debt = self
            .total_debt
            .checked_add(debt)
            .ok_or(ProtocolError::MathOverflow)?;
        self.total_collateral = total_collateral;
        self.total_debt = total_debt;
        Ok(())
    }

    /// Both fields updated or neither.
    pub fn sub(&mut self, collateral: u64, debt: u64) -> Result<()> {
        let total_collateral = self
            .total_collateral
            .checked_sub(collateral)
            .ok_or(ProtocolError::MathOverflow)?;
        let total_debt = self
            .total_debt
            .checked_sub(debt)
            .ok_or(ProtocolError::MathOverflow)?;
        self.total_collateral = total_collateral;
        self.total_debt = total_debt;
        Ok(())
    }
}
