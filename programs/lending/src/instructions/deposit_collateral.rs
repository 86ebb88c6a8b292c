// Deposit Collateral Instruction
//
// Moves the deposit asset into pool custody and credits the borrower's
// position, creating it on first use.

use anchor_lang::prelude::*;
use fungible_token::{program::FungibleToken, state::Balance};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct DepositCollateral<'info> {
    #[account(mut)]
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
        init_if_needed,
        payer = borrower,
        space = ANCHOR_DISCRIMINATOR + Position::INIT_SPACE,
        seeds = [
            POSITION_SEED,
            pool_config.key().as_ref(),
            borrower.key().as_ref(),
        ],
        bump
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        mut,
        constraint = borrower_deposit.owner == borrower.key() @ LendingError::InvalidVault,
        constraint = borrower_deposit.mint == pool_config.deposit_mint @ LendingError::InvalidVault,
    )]
    pub borrower_deposit: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = deposit_vault.owner == pool_authority.key() @ LendingError::InvalidVault,
        constraint = deposit_vault.mint == pool_config.deposit_mint @ LendingError::InvalidVault,
    )]
    pub deposit_vault: Box<Account<'info, Balance>>,

    pub token_program: Program<'info, FungibleToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositCollateral<'info> {
    pub fn deposit_collateral(
        &mut self,
        amount: u64,
        bumps: &DepositCollateralBumps,
    ) -> Result<()> {
        require!(amount > 0, LendingError::ZeroAmount);

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.borrower.to_account_info(),
            &self.borrower_deposit.to_account_info(),
            &self.deposit_vault.to_account_info(),
        )?;

        if self.position.owner == Pubkey::default() {
            self.position.owner = self.borrower.key();
            self.position.bump = bumps.position;
        }
        self.position.credit_collateral(amount)?;

        msg!(
            "Deposited {} collateral, position now {}",
            amount,
            self.position.collateral
        );

        Ok(())
    }
}
