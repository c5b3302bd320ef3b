use log::info;
use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::constants::*;
use crate::errors::{ProtocolError, Result};
use crate::protocol::Protocol;
use crate::state::Vault;
use crate::utils;

/// State transition produced by a successful repay/withdraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepayOutcome {
    /// Stable asset burned from the caller.
    pub stable_burned: u64,
    /// Collateral released from protocol custody back to the caller.
    pub collateral_withdrawn: u64,
    /// Stability fee settled into the vault's debt, minted to the collector.
    pub fee_settled: u64,
    /// True when the vault reached zero on both sides and was removed.
    pub vault_closed: bool,
}

pub fn handler(
    protocol: &mut Protocol,
    caller: AccountId,
    repay_amount: u64,
    withdraw_amount: u64,
    now: u64,
) -> Result<RepayOutcome> {
    protocol.config.require_active()?;
    if repay_amount == 0 && withdraw_amount == 0 {
        return Err(ProtocolError::ZeroAmount);
    }

    // An absent vault behaves as the zero vault: any positive amount then
    // fails the bounds checks below with the matching error kind.
    let vault = match protocol.vaults.get(&caller) {
        Some(existing) => *existing,
        None => Vault::default(),
    };

    let fee = utils::accrued_stability_fee(vault.debt, vault.last_fee_timestamp, now)?;
    let settled_debt = vault
        .debt
        .checked_add(fee)
        .ok_or(ProtocolError::MathOverflow)?;

    if withdraw_amount > vault.collateral {
        return Err(ProtocolError::InsufficientCollateral);
    }
    if repay_amount > settled_debt {
        return Err(ProtocolError::TooMuchDebt);
    }

    let new_debt = settled_debt - repay_amount;
    let new_collateral = vault.collateral - withdraw_amount;

    // Partial repayment or withdrawal must not leave the vault
    // under-collateralized.
    if new_debt > 0 {
        protocol.price_feed.require_valid(now)?;
        if new_collateral < MINIMUM_COLLATERAL {
            return Err(ProtocolError::BelowMinimum);
        }
        let ratio = utils::collateral_ratio(new_collateral, new_debt, protocol.price_feed.price)?;
        if ratio < MIN_COLLATERAL_RATIO {
            return Err(ProtocolError::InsufficientCollateral);
        }
    }

    if protocol.stable.balance_of(caller) < repay_amount {
        return Err(ProtocolError::InsufficientBalance);
    }

    let mut totals = protocol.totals;
    totals.add(0, fee)?;
    totals.sub(withdraw_amount, repay_amount)?;

    // Commit.
    let fee_collector = protocol.config.fee_collector;
    if fee > 0 {
        protocol.stable.mint(fee_collector, fee)?;
    }
    if repay_amount > 0 {
        protocol.stable.burn(caller, repay_amount)?;
    }

    let updated = Vault {
        collateral: new_collateral,
        debt: new_debt,
        last_fee_timestamp: now,
    };
    let vault_closed = updated.is_empty();
    if vault_closed {
        protocol.vaults.remove(&caller);
    } else {
        protocol.vaults.insert(caller, updated);
    }
    protocol.totals = totals;

    info!(
        "{caller} repaid {repay_amount} stable, withdrew {withdraw_amount} collateral, \
         debt now {new_debt}"
    );

    Ok(RepayOutcome {
        stable_burned: repay_amount,
        collateral_withdrawn: withdraw_amount,
        fee_settled: fee,
        vault_closed,
    })
}
