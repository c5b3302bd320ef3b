//! Accounting core of an over-collateralized stablecoin: per-user
//! collateral/debt vaults priced against an external feed, time-prorated
//! stability fees, solvency enforcement, and bonus-adjusted liquidations.
//!
//! All state lives in a single owned [`Protocol`] value; every operation
//! takes the caller identity and, where time matters, an explicit `now`
//! timestamp. Embedders that share one protocol across threads can use
//! [`ProtocolHandle`] to serialize access behind a single lock.

pub mod account;
pub mod constants;
pub mod errors;
pub mod handle;
pub mod instructions;
pub mod oracle;
pub mod protocol;
pub mod state;
pub mod utils;

pub use account::AccountId;
pub use errors::{ProtocolError, Result};
pub use handle::ProtocolHandle;
pub use instructions::{DepositOutcome, LiquidationOutcome, RepayOutcome};
pub use oracle::PriceFeed;
pub use protocol::Protocol;
pub use state::{GlobalTotals, ProtocolConfig, TokenLedger, Vault, VaultStatus};
