use log::info;
use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::constants::*;
use crate::errors::{ProtocolError, Result};
use crate::protocol::Protocol;
use crate::state::Vault;
use crate::utils;

/// State transition produced by a successful deposit/borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositOutcome {
    /// Collateral moved from the caller into protocol custody.
    pub collateral_deposited: u64,
    /// Stable asset minted to the caller.
    pub stable_minted: u64,
    /// Stability fee settled into the vault's debt, minted to the collector.
    pub fee_settled: u64,
    /// The vault as persisted.
    pub vault: Vault,
}

pub fn handler(
    protocol: &mut Protocol,
    caller: AccountId,
    collateral_amount: u64,
    mint_amount: u64,
    now: u64,
) -> Result<DepositOutcome> {
    protocol.config.require_active()?;
    if collateral_amount == 0 {
        return Err(ProtocolError::ZeroAmount);
    }

    let vault = match protocol.vaults.get(&caller) {
        Some(existing) => *existing,
        None => Vault::default(),
    };

    let fee = utils::accrued_stability_fee(vault.debt, vault.last_fee_timestamp, now)?;
    let settled_debt = vault
        .debt
        .checked_add(fee)
        .ok_or(ProtocolError::MathOverflow)?;

    let new_collateral = vault
        .collateral
        .checked_add(collateral_amount)
        .ok_or(ProtocolError::MathOverflow)?;
    if new_collateral < MINIMUM_COLLATERAL {
        return Err(ProtocolError::BelowMinimum);
    }

    let new_debt = if mint_amount > 0 {
        if mint_amount < MINIMUM_DEBT {
            return Err(ProtocolError::BelowMinimum);
        }
        protocol.price_feed.require_valid(now)?;

        let final_debt = settled_debt
            .checked_add(mint_amount)
            .ok_or(ProtocolError::MathOverflow)?;
        let ratio = utils::collateral_ratio(new_collateral, final_debt, protocol.price_feed.price)?;
        if ratio < MIN_COLLATERAL_RATIO {
            return Err(ProtocolError::InsufficientCollateral);
        }
        final_debt
    } else {
        settled_debt
    };

    let mut totals = protocol.totals;
    let debt_added = fee
        .checked_add(mint_amount)
        .ok_or(ProtocolError::MathOverflow)?;
    totals.add(collateral_amount, debt_added)?;

    // Commit. Nothing below can fail once the checks above have passed.
    let fee_collector = protocol.config.fee_collector;
    if fee > 0 {
        protocol.stable.mint(fee_collector, fee)?;
    }
    if mint_amount > 0 {
        protocol.stable.mint(caller, mint_amount)?;
    }

    let updated = Vault {
        collateral: new_collateral,
        debt: new_debt,
        last_fee_timestamp: now,
    };
    protocol.vaults.insert(caller, updated);
    protocol.totals = totals;

    info!(
        "{caller} deposited {collateral_amount} collateral, minted {mint_amount} stable, \
         debt now {new_debt}"
    );

    Ok(DepositOutcome {
        collateral_deposited: collateral_amount,
        stable_minted: mint_amount,
        fee_settled: fee,
        vault: updated,
    })
}
