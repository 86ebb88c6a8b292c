// Lending Helper Functions
//
// Token-program CPI wrappers shared by the instructions.

use anchor_lang::prelude::*;

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
