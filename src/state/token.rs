use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::errors::{ProtocolError, Result};

/// Minimal fungible-balance ledger with standard metadata.
///
/// The engine only mints, burns, and reads balances; transfer mechanics
/// between third parties belong to the embedding system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLedger {
    name: String,
    symbol: String,
    decimals: u8,
    total_supply: u64,
    balances: BTreeMap<AccountId, u64>,
}

impl TokenLedger {
    pub fn new(name: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            decimals,
            total_supply: 0,
            balances: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn balance_of(&self, who: AccountId) -> u64 {
        self.balances.get(&who).copied().unwrap_or(0)
    }

    /// Credit freshly created units to `to`.
    pub fn mint(&mut self, to: AccountId, amount: u64) -> Result<()> {
        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(ProtocolError::MathOverflow)?;
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(ProtocolError::MathOverflow)?;
        self.total_supply = total_supply;
        self.balances.insert(to, balance);
        Ok(())
    }

    /// Debit and destroy units held by `from`.
    pub fn burn(&mut self, from: AccountId, amount: u64) -> Result<()> {
        let balance = self
            .balance_of(from)
            .checked_sub(amount)
            .ok_or(ProtocolError::InsufficientBalance)?;
        let total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(ProtocolError::MathOverflow)?;
        self.total_supply = total_supply;
        if balance == 0 {
            self.balances.remove(&from);
        } else {
            self.balances.insert(from, balance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(tag: u8) -> AccountId {
        AccountId::new([tag; 32])
    }

    #[test]
    fn metadata() {
        let ledger = TokenLedger::new("Test Token", "TST", 6);
        assert_eq!(ledger.name(), "Test Token");
        assert_eq!(ledger.symbol(), "TST");
        assert_eq!(ledger.decimals(), 6);
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn mint_and_burn_round_trip() {
        let mut ledger = TokenLedger::new("Test Token", "TST", 6);
        ledger.mint(acct(1), 500).unwrap();
        ledger.mint(acct(1), 250).unwrap();
        ledger.mint(acct(2), 100).unwrap();

        assert_eq!(ledger.balance_of(acct(1)), 750);
        assert_eq!(ledger.balance_of(acct(2)), 100);
        assert_eq!(ledger.total_supply(), 850);

        ledger.burn(acct(1), 750).unwrap();
        assert_eq!(ledger.balance_of(acct(1)), 0);
        assert_eq!(ledger.total_supply(), 100);
    }

    #[test]
    fn burn_more_than_balance() {
        let mut ledger = TokenLedger::new("Test Token", "TST", 6);
        ledger.mint(acct(1), 10).unwrap();
        assert_eq!(
            ledger.burn(acct(1), 11),
            Err(ProtocolError::InsufficientBalance)
        );
        assert_eq!(ledger.balance_of(acct(1)), 10);
        assert_eq!(ledger.total_supply(), 10);
    }

    #[test]
    fn mint_overflow() {
        let mut ledger = TokenLedger::new("Test Token", "TST", 6);
        ledger.mint(acct(1), u64::MAX).unwrap();
        assert_eq!(ledger.mint(acct(2), 1), Err(ProtocolError::MathOverflow));
        assert_eq!(ledger.total_supply(), u64::MAX);
        assert_eq!(ledger.balance_of(acct(2)), 0);
    }
}
