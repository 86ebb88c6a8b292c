// Flash Loan Error Definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum FlashLoanError {
    #[msg("Requested amount exceeds pool liquidity")]
    InsufficientLiquidity,

    #[msg("Pool vault balance lower after the delegated call than before")]
    RepaymentNotMet,

    #[msg("Delegated call target is not the configured trusted program")]
    UntrustedTarget,

    #[msg("Vault account does not match pool configuration")]
    InvalidVault,

    #[msg("Delegated call requires a target program and accounts")]
    MissingTarget,
}
