// Repay Instruction
//
// Returns borrow asset to the vault and reduces recorded debt. Collateral
// withdrawal is out of scope for the exercise, so repay only shrinks debt.

use anchor_lang::prelude::*;
use fungible_token::{program::FungibleToken, state::Balance};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Repay<'info> {
    pub borrower: Signer<'info>,

    #[account(
        seeds = [LENDING_CONFIG_SEED, pool_config.borrow_mint.as_ref()],
        bump = pool_config.config_bump,
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer for vault operations
    #[account(
        seeds = [LENDING_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump = pool_config.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            POSITION_SEED,
            pool_config.key().as_ref(),
            borrower.key().as_ref(),
        ],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        mut,
        constraint = borrower_source.owner == borrower.key() @ LendingError::InvalidVault,
        constraint = borrower_source.mint == pool_config.borrow_mint @ LendingError::InvalidVault,
    )]
    pub borrower_source: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = borrow_vault.owner == pool_authority.key() @ LendingError::InvalidVault,
        constraint = borrow_vault.mint == pool_config.borrow_mint @ LendingError::InvalidVault,
    )]
    pub borrow_vault: Box<Account<'info, Balance>>,

    pub token_program: Program<'info, FungibleToken>,
}

impl<'info> Repay<'info> {
    pub fn repay(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LendingError::ZeroAmount);

        self.position.record_repay(amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.borrower.to_account_info(),
            &self.borrower_source.to_account_info(),
            &self.borrow_vault.to_account_info(),
        )?;

        msg!("Repaid {}, debt now {}", amount, self.position.debt);

        Ok(())
    }
}
