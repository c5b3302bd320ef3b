use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::errors::{ProtocolError, Result};

/// Global protocol configuration.
///
/// Set once at initialization, updated only by owner-authorized calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Identity allowed to update parameters and pause the protocol.
    pub owner: AccountId,

    /// Identity allowed to push price updates.
    pub oracle: AccountId,

    /// Recipient of settled stability fees.
    pub fee_collector: AccountId,

    /// Whether mutating user operations are suspended.
    pub paused: bool,

    /// Set by the one-time initialize call.
    pub initialized: bool,
}

impl ProtocolConfig {
    /// Gate shared by every user-facing mutating operation.
    pub fn require_active(&self) -> Result<()> {
        if !self.initialized {
            return Err(ProtocolError::NotInitialized);
        }
        if self.paused {
            return Err(ProtocolError::ProtocolPaused);
        }
        Ok(())
    }

    pub fn require_owner(&self, caller: AccountId) -> Result<()> {
        if !self.initialized {
            return Err(ProtocolError::NotInitialized);
        }
        if caller != self.owner {
            return Err(ProtocolError::NotAuthorized);
        }
        Ok(())
    }
}
