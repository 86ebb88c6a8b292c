use anchor_lang::prelude::*;

#[error_code]
pub enum LendingError {
    #[msg("Deposited collateral does not cover the required amount")]
    InsufficientCollateral,

    #[msg("Pool does not hold enough of the borrow asset")]
    InsufficientLiquidity,

    #[msg("Oracle reserves must be non-zero to price a borrow")]
    InvalidReserve,

    #[msg("Collateral factor must be greater than 1x")]
    InvalidCollateralFactor,

    #[msg("Oracle pool does not pair the borrow and deposit assets")]
    InvalidOracle,

    #[msg("Vault account does not belong to the expected authority")]
    InvalidVault,

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Repay amount exceeds outstanding debt")]
    RepayExceedsDebt,

    #[msg("Arithmetic overflow occurred")]
    Overflow,
}
