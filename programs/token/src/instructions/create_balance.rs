// Create Balance Instruction
//
// Creates the balance record for an owner. Permissionless: anyone can pay for
// anyone's record, which lets pools provision their PDA-owned vaults.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct CreateBalance<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub mint: Account<'info, TokenMint>,

    /// CHECK: any address may own a balance record
    pub owner: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Balance::INIT_SPACE,
        seeds = [BALANCE_SEED, mint.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub balance: Account<'info, Balance>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateBalance<'info> {
    pub fn create_balance(&mut self, bumps: &CreateBalanceBumps) -> Result<()> {
        self.balance.set_inner(Balance {
            mint: self.mint.key(),
            owner: self.owner.key(),
            amount: 0,
            bump: bumps.balance,
        });

        Ok(())
    }
}
