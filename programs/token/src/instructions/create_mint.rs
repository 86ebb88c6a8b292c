// Create Mint Instruction
//
// Registers a new token. The payer becomes the mint authority.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct CreateMint<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + TokenMint::INIT_SPACE,
    )]
    pub mint: Account<'info, TokenMint>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateMint<'info> {
    pub fn create_mint(&mut self, decimals: u8) -> Result<()> {
        self.mint.set_inner(TokenMint {
            authority: self.authority.key(),
            supply: 0,
            decimals,
        });

        msg!("Mint created: {} ({} decimals)", self.mint.key(), decimals);

        Ok(())
    }
}
