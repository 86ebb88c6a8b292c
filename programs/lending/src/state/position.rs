// Borrower Position State
//
// Created on first deposit, mutated by deposit/borrow/repay. Both fields are
// unsigned so neither collateral nor debt can go negative.

use anchor_lang::prelude::*;

use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct Position {
    pub owner: Pubkey,   // Borrower
    pub collateral: u64, // Deposit asset held in pool custody
    pub debt: u64,       // Borrow asset outstanding
    pub bump: u8,        // PDA bump
}

impl Position {
    pub fn credit_collateral(&mut self, amount: u64) -> Result<()> {
        self.collateral = self
            .collateral
            .checked_add(amount)
            .ok_or(LendingError::Overflow)?;
        Ok(())
    }

    pub fn record_borrow(&mut self, amount: u64) -> Result<()> {
        self.debt = self.debt.checked_add(amount).ok_or(LendingError::Overflow)?;
        Ok(())
    }

    pub fn record_repay(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.debt, LendingError::RepayExceedsDebt);
        self.debt -= amount;
        Ok(())
    }
}
