// Fixed-point precision (6 decimal places)
pub const PRECISION: u64 = 1_000_000;

// Risk parameters (unscaled percent)
pub const MIN_COLLATERAL_RATIO: u64 = 150;
pub const LIQUIDATION_THRESHOLD: u64 = 130;
pub const LIQUIDATION_PENALTY: u64 = 10;

// Stability fee (percent per year)
pub const STABILITY_FEE_RATE: u64 = 2;
pub const SECONDS_PER_YEAR: u64 = 31_536_000; // 365 days

// Oracle freshness bound (seconds)
pub const PRICE_TIMEOUT: u64 = 3_600;

// Position limits (smallest units, 6 decimals)
pub const MINIMUM_COLLATERAL: u64 = 100_000; // 0.1 collateral asset
pub const MINIMUM_DEBT: u64 = 100_000_000; // 100 stable units

// Token metadata
pub const STABLE_NAME: &str = "Bitcoin-Backed USD";
pub const STABLE_SYMBOL: &str = "bUSD";
pub const STABLE_DECIMALS: u8 = 6;
pub const GOVERNANCE_NAME: &str = "Vault Governance Token";
pub const GOVERNANCE_SYMBOL: &str = "VGT";
pub const GOVERNANCE_DECIMALS: u8 = 6;
