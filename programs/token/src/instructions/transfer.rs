// Transfer Instruction
//
// Debits the owner's balance and credits the destination atomically. Fails
// with InsufficientBalance when the source holds less than the amount, in
// which case neither balance is mutated.

use anchor_lang::prelude::*;

use crate::{errors::*, state::*};

#[derive(Accounts)]
pub struct Transfer<'info> {
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ TokenError::OwnerMismatch)]
    pub from: Account<'info, Balance>,

    // `to` must be a distinct account: both balances are deserialized into
    // independent copies, and serializing an aliased pair back would let the
    // credited copy clobber the debited one.
    #[account(
        mut,
        constraint = to.mint == from.mint @ TokenError::MintMismatch,
        constraint = to.key() != from.key() @ TokenError::SelfTransfer,
    )]
    pub to: Account<'info, Balance>,
}

impl<'info> Transfer<'info> {
    pub fn transfer(&mut self, amount: u64) -> Result<()> {
        self.from.debit(amount)?;
        self.to.credit(amount)?;

        msg!(
            "Transferred {} from {} to {}",
            amount,
            self.from.owner,
            self.to.owner
        );

        Ok(())
    }
}
