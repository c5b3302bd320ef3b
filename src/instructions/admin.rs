use log::info;

use crate::account::AccountId;
use crate::errors::Result;
use crate::protocol::Protocol;

pub fn set_oracle(protocol: &mut Protocol, caller: AccountId, oracle: AccountId) -> Result<()> {
    protocol.config.require_owner(caller)?;
    protocol.config.oracle = oracle;
    info!("oracle set to {oracle}");
    Ok(())
}

pub fn set_fee_collector(
    protocol: &mut Protocol,
    caller: AccountId,
    fee_collector: AccountId,
) -> Result<()> {
    protocol.config.require_owner(caller)?;
    protocol.config.fee_collector = fee_collector;
    info!("fee collector set to {fee_collector}");
    Ok(())
}

pub fn set_owner(protocol: &mut Protocol, caller: AccountId, new_owner: AccountId) -> Result<()> {
    protocol.config.require_owner(caller)?;
    protocol.config.owner = new_owner;
    info!("ownership transferred to {new_owner}");
    Ok(())
}

pub fn set_paused(protocol: &mut Protocol, caller: AccountId, paused: bool) -> Result<()> {
    protocol.config.require_owner(caller)?;
    protocol.config.paused = paused;
    info!("protocol paused state set to {paused}");
    Ok(())
}
