use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Fee basis points cannot exceed maximum allowed (1000 = 10%)")]
    FeeTooHigh,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalTokenMints,

    #[msg("Pool reserves must be non-zero for this operation")]
    InvalidReserve,

    #[msg("Deposit amount cannot be zero")]
    ZeroDepositAmount,

    #[msg("Swap amount cannot be zero")]
    ZeroSwapAmount,

    #[msg("Swap output is below minimum required (slippage protection)")]
    SlippageExceeded,

    #[msg("Withdrawn amount below minimum required (slippage protection)")]
    InsufficientWithdrawAmount,

    #[msg("Insufficient liquidity in pool for this operation")]
    InsufficientLiquidity,

    #[msg("Caller holds fewer pool shares than requested")]
    InsufficientShares,

    #[msg("Vault account does not belong to this pool")]
    InvalidVault,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,

    #[msg("Transaction deadline has expired")]
    TransactionExpired,

    #[msg("Expiration timestamp is too far in the future")]
    ExpirationTooFar,
}
