// Allowance State
//
// Standing spending right granted by an owner to a spender, consumed by
// transfer_from. Reduced by exactly the spent amount, never below zero.

use anchor_lang::prelude::*;

use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct Allowance {
    pub mint: Pubkey,    // Token the allowance applies to
    pub owner: Pubkey,   // Balance owner who granted the right
    pub spender: Pubkey, // Account allowed to spend
    pub amount: u64,     // Remaining spendable amount
    pub bump: u8,        // PDA bump
}

impl Allowance {
    pub fn spend(&mut self, amount: u64) -> Result<()> {
        require!(self.amount >= amount, TokenError::InsufficientAllowance);
        self.amount -= amount;
        Ok(())
    }
}
