use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::constants::*;
use crate::errors::Result;
use crate::instructions;
use crate::instructions::{DepositOutcome, LiquidationOutcome, RepayOutcome};
use crate::oracle::PriceFeed;
use crate::state::{GlobalTotals, ProtocolConfig, TokenLedger, Vault, VaultStatus};
use crate::utils;

/// The whole engine as one owned value: configuration, price feed, global
/// totals, the vault ledger, and the two internal token ledgers.
///
/// Operations never read an ambient clock; callers pass `now` explicitly
/// wherever fee accrual or price freshness matters. Each call either fully
/// commits or fails with no partial effects; serializing calls across
/// threads is the embedder's job (see [`crate::ProtocolHandle`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protocol {
    pub(crate) config: ProtocolConfig,
    pub(crate) price_feed: PriceFeed,
    pub(crate) totals: GlobalTotals,
    pub(crate) vaults: BTreeMap<AccountId, Vault>,
    pub(crate) stable: TokenLedger,
    pub(crate) governance: TokenLedger,
}

impl Default for Protocol {
    fn default() -> Self {
        Self::new()
    }
}

impl Protocol {
    pub fn new() -> Self {
        Self {
            config: ProtocolConfig::default(),
            price_feed: PriceFeed::default(),
            totals: GlobalTotals::default(),
            vaults: BTreeMap::new(),
            stable: TokenLedger::new(STABLE_NAME, STABLE_SYMBOL, STABLE_DECIMALS),
            governance: TokenLedger::new(GOVERNANCE_NAME, GOVERNANCE_SYMBOL, GOVERNANCE_DECIMALS),
        }
    }

    /// One-time setup. The caller becomes the protocol owner.
    pub fn initialize(
        &mut self,
        caller: AccountId,
        oracle: AccountId,
        fee_collector: AccountId,
    ) -> Result<()> {
        instructions::initialize::handler(self, caller, oracle, fee_collector)
    }

    /// Replace the oracle identity. Owner only.
    pub fn set_oracle(&mut self, caller: AccountId, oracle: AccountId) -> Result<()> {
        instructions::admin::set_oracle(self, caller, oracle)
    }

    /// Replace the fee collector. Owner only.
    pub fn set_fee_collector(&mut self, caller: AccountId, fee_collector: AccountId) -> Result<()> {
        instructions::admin::set_fee_collector(self, caller, fee_collector)
    }

    /// Transfer protocol ownership. Owner only.
    pub fn set_owner(&mut self, caller: AccountId, new_owner: AccountId) -> Result<()> {
        instructions::admin::set_owner(self, caller, new_owner)
    }

    /// Suspend all user-facing mutating operations. Owner only.
    pub fn pause(&mut self, caller: AccountId) -> Result<()> {
        instructions::admin::set_paused(self, caller, true)
    }

    /// Lift a pause. Owner only.
    pub fn resume(&mut self, caller: AccountId) -> Result<()> {
        instructions::admin::set_paused(self, caller, false)
    }

    /// Record a new collateral price. Oracle only.
    pub fn update_price(&mut self, caller: AccountId, price: u64, now: u64) -> Result<()> {
        instructions::update_price::handler(self, caller, price, now)
    }

    /// Lock collateral and optionally mint stable asset against it.
    pub fn deposit_and_borrow(
        &mut self,
        caller: AccountId,
        collateral_amount: u64,
        mint_amount: u64,
        now: u64,
    ) -> Result<DepositOutcome> {
        instructions::deposit_and_borrow::handler(self, caller, collateral_amount, mint_amount, now)
    }

    /// Burn stable asset against the caller's debt and release collateral.
    pub fn repay_and_withdraw(
        &mut self,
        caller: AccountId,
        repay_amount: u64,
        withdraw_amount: u64,
        now: u64,
    ) -> Result<RepayOutcome> {
        instructions::repay_and_withdraw::handler(self, caller, repay_amount, withdraw_amount, now)
    }

    /// Repay part of an under-collateralized vault's debt in exchange for
    /// bonus-adjusted collateral. Any caller with stable balance.
    pub fn liquidate(
        &mut self,
        liquidator: AccountId,
        owner: AccountId,
        repay_budget: u64,
        now: u64,
    ) -> Result<LiquidationOutcome> {
        instructions::liquidate::handler(self, liquidator, owner, repay_budget, now)
    }

    /// Mint governance tokens. Owner only.
    pub fn mint_governance_token(
        &mut self,
        caller: AccountId,
        recipient: AccountId,
        amount: u64,
    ) -> Result<()> {
        instructions::mint_governance::handler(self, caller, recipient, amount)
    }

    // ---- reads ----

    pub fn config(&self) -> ProtocolConfig {
        self.config
    }

    pub fn price_feed(&self) -> PriceFeed {
        self.price_feed
    }

    pub fn global_totals(&self) -> GlobalTotals {
        self.totals
    }

    pub fn vault(&self, owner: AccountId) -> Option<Vault> {
        self.vaults.get(&owner).copied()
    }

    pub fn vaults(&self) -> impl Iterator<Item = (AccountId, Vault)> + '_ {
        self.vaults.iter().map(|(owner, vault)| (*owner, *vault))
    }

    pub fn stable(&self) -> &TokenLedger {
        &self.stable
    }

    pub fn governance(&self) -> &TokenLedger {
        &self.governance
    }

    /// Current collateral ratio of `owner`'s vault with fee accrual
    /// projected to `now`, against the stored price.
    ///
    /// Returns 0 for an absent or debt-free vault (the no-debt sentinel) and
    /// saturates rather than failing on extreme values.
    pub fn user_ratio(&self, owner: AccountId, now: u64) -> u64 {
        let Some(vault) = self.vaults.get(&owner) else {
            return 0;
        };
        let projected_fee =
            utils::accrued_stability_fee(vault.debt, vault.last_fee_timestamp, now).unwrap_or(0);
        let debt = vault.debt.saturating_add(projected_fee);
        if debt == 0 {
            return 0;
        }
        utils::collateral_ratio(vault.collateral, debt, self.price_feed.price)
            .unwrap_or(u64::MAX)
    }

    /// Classification of `owner`'s vault against the policy thresholds, or
    /// `None` when no vault exists.
    pub fn vault_status(&self, owner: AccountId, now: u64) -> Option<VaultStatus> {
        let vault = self.vaults.get(&owner)?;
        if vault.debt == 0 {
            return Some(VaultStatus::Active);
        }
        Some(VaultStatus::from_ratio(self.user_ratio(owner, now)))
    }

    /// Whether a liquidation call against `owner` would currently be
    /// eligible. Requires a fresh price, exactly as the liquidation path
    /// does.
    pub fn is_liquidatable(&self, owner: AccountId, now: u64) -> bool {
        self.price_feed.is_valid(now)
            && self.vault_status(owner, now) == Some(VaultStatus::Liquidatable)
    }
}
