use thiserror::Error;

/// Typed failures surfaced to callers.
///
/// Every check that can fail runs before any persisted write, so a returned
/// error always means the operation left no partial effects.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("protocol is already initialized")]
    AlreadyInitialized,

    #[error("protocol is not initialized")]
    NotInitialized,

    #[error("protocol is currently paused")]
    ProtocolPaused,

    #[error("unauthorized access")]
    NotAuthorized,

    #[error("price must be non-zero")]
    PriceInvalid,

    #[error("oracle price is stale")]
    PriceOutdated,

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("amount below protocol minimum")]
    BelowMinimum,

    #[error("collateral ratio below minimum")]
    InsufficientCollateral,

    #[error("repay amount exceeds outstanding debt")]
    TooMuchDebt,

    #[error("vault not found")]
    VaultNotFound,

    #[error("vault is not below the liquidation threshold")]
    NotLiquidatable,

    #[error("insufficient token balance")]
    InsufficientBalance,

    #[error("math overflow")]
    MathOverflow,
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
