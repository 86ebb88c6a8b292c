// AMM Helper Functions
//
// Deadline validation and token-program CPI wrappers shared by the
// instructions.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Validate transaction expiration timestamp
// Ensures the transaction is not stale and not absurdly far in the future
pub fn validate_expiration(expiration: i64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    require!(expiration > current_time, AmmError::TransactionExpired);

    let time_until_expiration = expiration
        .checked_sub(current_time)
        .ok_or(AmmError::Underflow)?;
    require!(
        time_until_expiration <= MAX_EXPIRATION_SECONDS,
        AmmError::ExpirationTooFar
    );

    Ok(())
}

// Transfer tokens signed by the user
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
) -> Result<()> {
    fungible_token::cpi::transfer(
        CpiContext::new(
            token_program.clone(),
            fungible_token::cpi::accounts::Transfer {
                owner: owner.clone(),
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

// Transfer tokens out of a vault (requires the pool authority PDA signer)
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    fungible_token::cpi::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            fungible_token::cpi::accounts::Transfer {
                owner: authority.clone(),
                from: from.clone(),
                to: to.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
