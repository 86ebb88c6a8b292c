// Balance State
//
// One record per (mint, owner) pair. The amount is never negative by
// construction; debits fail atomically when the balance is too small.

use anchor_lang::prelude::*;

use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct Balance {
    pub mint: Pubkey,  // Token this balance belongs to
    pub owner: Pubkey, // Account that can move these tokens
    pub amount: u64,   // Current holdings
    pub bump: u8,      // PDA bump
}

impl Balance {
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.amount >= amount, TokenError::InsufficientBalance);
        self.amount -= amount;
        Ok(())
    }
}
