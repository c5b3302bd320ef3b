use log::info;
use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::constants::*;
use crate::errors::{ProtocolError, Result};
use crate::protocol::Protocol;
use crate::state::Vault;
use crate::utils;

/// State transition produced by a successful liquidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationOutcome {
    /// Stable asset burned from the liquidator.
    pub debt_repaid: u64,
    /// Collateral (bonus included) released from custody to the liquidator.
    pub collateral_seized: u64,
    /// Stability fee settled into the vault's debt before sizing.
    pub fee_settled: u64,
    /// Residual collateral returned to the vault owner when the vault closed.
    pub collateral_refunded: u64,
    /// True when the debt was fully cleared and the record removed.
    pub vault_closed: bool,
    pub remaining_debt: u64,
    pub remaining_collateral: u64,
}

pub fn handler(
    protocol: &mut Protocol,
    liquidator: AccountId,
    owner: AccountId,
    repay_budget: u64,
    now: u64,
) -> Result<LiquidationOutcome> {
    protocol.config.require_active()?;
    protocol.price_feed.require_valid(now)?;
    if repay_budget == 0 {
        return Err(ProtocolError::ZeroAmount);
    }
    let vault = protocol
        .vaults
        .get(&owner)
        .copied()
        .ok_or(ProtocolError::VaultNotFound)?;

    let fee = utils::accrued_stability_fee(vault.debt, vault.last_fee_timestamp, now)?;
    let settled_debt = vault
        .debt
        .checked_add(fee)
        .ok_or(ProtocolError::MathOverflow)?;

    // A debt-free vault is trivially solvent regardless of its ratio
    // sentinel.
    if settled_debt == 0 {
        return Err(ProtocolError::NotLiquidatable);
    }

    let price = protocol.price_feed.price;
    let ratio = utils::collateral_ratio(vault.collateral, settled_debt, price)?;
    if ratio >= LIQUIDATION_THRESHOLD {
        return Err(ProtocolError::NotLiquidatable);
    }

    let repaid = repay_budget.min(settled_debt);
    // Bonus-adjusted seizure can exceed what the vault holds under extreme
    // price gaps; clamp instead of underflowing.
    let seized = utils::liquidation_seizure(repaid, price)?.min(vault.collateral);

    if protocol.stable.balance_of(liquidator) < repaid {
        return Err(ProtocolError::InsufficientBalance);
    }

    let remaining_debt = settled_debt - repaid;
    let remaining_collateral = vault.collateral - seized;
    let vault_closed = remaining_debt == 0;
    let refund = if vault_closed { remaining_collateral } else { 0 };

    let collateral_removed = seized
        .checked_add(refund)
        .ok_or(ProtocolError::MathOverflow)?;
    let mut totals = protocol.totals;
    totals.add(0, fee)?;
    totals.sub(collateral_removed, repaid)?;

    // Commit.
    let fee_collector = protocol.config.fee_collector;
    if fee > 0 {
        protocol.stable.mint(fee_collector, fee)?;
    }
    protocol.stable.burn(liquidator, repaid)?;

    if vault_closed {
        protocol.vaults.remove(&owner);
    } else {
        protocol.vaults.insert(
            owner,
            Vault {
                collateral: remaining_collateral,
                debt: remaining_debt,
                last_fee_timestamp: now,
            },
        );
    }
    protocol.totals = totals;

    info!(
        "{liquidator} liquidated {owner}: repaid {repaid} stable, seized {seized} collateral, \
         remaining debt {remaining_debt}"
    );

    Ok(LiquidationOutcome {
        debt_repaid: repaid,
        collateral_seized: seized,
        fee_settled: fee,
        collateral_refunded: refund,
        vault_closed,
        remaining_debt,
        remaining_collateral: if vault_closed { 0 } else { remaining_collateral },
    })
}
