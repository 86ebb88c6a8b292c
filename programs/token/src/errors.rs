use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    #[msg("Transfer amount exceeds the source balance")]
    InsufficientBalance,

    #[msg("Transfer amount exceeds the spender's allowance")]
    InsufficientAllowance,

    #[msg("Balance accounts must belong to the same mint")]
    MintMismatch,

    #[msg("Source and destination balances must differ")]
    SelfTransfer,

    #[msg("Signer does not own this balance")]
    OwnerMismatch,

    #[msg("Only the mint authority can issue tokens")]
    UnauthorizedMint,

    #[msg("Arithmetic overflow occurred")]
    Overflow,
}
