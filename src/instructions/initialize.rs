use log::info;

use crate::account::AccountId;
use crate::errors::{ProtocolError, Result};
use crate::protocol::Protocol;

pub fn handler(
    protocol: &mut Protocol,
    caller: AccountId,
    oracle: AccountId,
    fee_collector: AccountId,
) -> Result<()> {
    if protocol.config.initialized {
        return Err(ProtocolError::AlreadyInitialized);
    }

    protocol.config.owner = caller;
    protocol.config.oracle = oracle;
    protocol.config.fee_collector = fee_collector;
    protocol.config.paused = false;
    protocol.config.initialized = true;

    info!("protocol initialized, owner {caller}, oracle {oracle}, fee collector {fee_collector}");
    Ok(())
}
