// Approve Instruction
//
// Sets (overwrites) the allowance the owner grants a spender. The rent payer
// is a separate signer so a program acting as `owner` through CPI does not
// need to hold lamports itself.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct Approve<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub mint: Account<'info, TokenMint>,

    /// CHECK: spender may be any address
    pub spender: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Allowance::INIT_SPACE,
        seeds = [
            ALLOWANCE_SEED,
            mint.key().as_ref(),
            owner.key().as_ref(),
            spender.key().as_ref(),
        ],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    pub system_program: Program<'info, System>,
}

impl<'info> Approve<'info> {
    pub fn approve(&mut self, amount: u64, bumps: &ApproveBumps) -> Result<()> {
        self.allowance.set_inner(Allowance {
            mint: self.mint.key(),
            owner: self.owner.key(),
            spender: self.spender.key(),
            amount,
            bump: bumps.allowance,
        });

        msg!(
            "{} approved {} for spender {}",
            self.owner.key(),
            amount,
            self.spender.key()
        );

        Ok(())
    }
}
