pub mod admin;
pub mod deposit_and_borrow;
pub mod initialize;
pub mod liquidate;
pub mod mint_governance;
pub mod repay_and_withdraw;
pub mod update_price;

pub use deposit_and_borrow::DepositOutcome;
pub use liquidate::LiquidationOutcome;
pub use repay_and_withdraw::RepayOutcome;
