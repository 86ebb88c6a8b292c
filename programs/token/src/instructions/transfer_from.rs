// Transfer From Instruction
//
// Spends a previously granted allowance. Checks the allowance before the
// balance, decrements it by exactly the spent amount, and performs the
// transfer. Any failure aborts with no mutation observable.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    pub spender: Signer<'info>,

    #[account(
        mut,
        seeds = [
            ALLOWANCE_SEED,
            from.mint.as_ref(),
            from.owner.as_ref(),
            spender.key().as_ref(),
        ],
        bump = allowance.bump,
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(mut)]
    pub from: Account<'info, Balance>,

    // Same aliasing hazard as in Transfer: an aliased from/to pair would
    // inflate the owner's balance on serialization.
    #[account(
        mut,
        constraint = to.mint == from.mint @ TokenError::MintMismatch,
        constraint = to.key() != from.key() @ TokenError::SelfTransfer,
    )]
    pub to: Account<'info, Balance>,
}

impl<'info> TransferFrom<'info> {
    pub fn transfer_from(&mut self, amount: u64) -> Result<()> {
        self.allowance.spend(amount)?;
        self.from.debit(amount)?;
        self.to.credit(amount)?;

        msg!(
            "{} spent {} of {}'s allowance",
            self.spender.key(),
            amount,
            self.from.owner
        );

        Ok(())
    }
}
