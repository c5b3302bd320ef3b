use log::info;

use crate::account::AccountId;
use crate::errors::{ProtocolError, Result};
use crate::protocol::Protocol;

pub fn handler(
    protocol: &mut Protocol,
    caller: AccountId,
    recipient: AccountId,
    amount: u64,
) -> Result<()> {
    protocol.config.require_owner(caller)?;
    if amount == 0 {
        return Err(ProtocolError::ZeroAmount);
    }

    protocol.governance.mint(recipient, amount)?;
    info!("minted {amount} governance units to {recipient}");
    Ok(())
}
