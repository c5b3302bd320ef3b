use log::debug;

use crate::account::AccountId;
use crate::errors::{ProtocolError, Result};
use crate::protocol::Protocol;

/// Price updates are accepted even while the protocol is paused.
pub fn handler(protocol: &mut Protocol, caller: AccountId, price: u64, now: u64) -> Result<()> {
    if !protocol.config.initialized {
        return Err(ProtocolError::NotInitialized);
    }
    if caller != protocol.config.oracle {
        return Err(ProtocolError::NotAuthorized);
    }

    protocol.price_feed.update(price, now)?;
    debug!("price updated to {price} at {now}");
    Ok(())
}
