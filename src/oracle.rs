use serde::{Deserialize, Serialize};

use crate::constants::PRICE_TIMEOUT;
use crate::errors::{ProtocolError, Result};

/// Latest externally supplied valuation of the collateral asset.
///
/// `price` is USD per whole collateral asset, scaled by the fixed-point
/// precision. A zero price is never valid for solvency decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFeed {
    pub price: u64,
    pub last_update: u64,
}

impl PriceFeed {
    /// Record a new price. Authorization is the caller's concern.
    pub fn update(&mut self, price: u64, now: u64) -> Result<()> {
        if price == 0 {
            return Err(ProtocolError::PriceInvalid);
        }
        self.price = price;
        self.last_update = now;
        Ok(())
    }

    /// A price is authoritative only while non-zero and fresh.
    pub fn is_valid(&self, now: u64) -> bool {
        self.price > 0 && now.saturating_sub(self.last_update) <= PRICE_TIMEOUT
    }

    pub fn require_valid(&self, now: u64) -> Result<()> {
        if self.is_valid(now) {
            Ok(())
        } else {
            Err(ProtocolError::PriceOutdated)
        }
    }
}
