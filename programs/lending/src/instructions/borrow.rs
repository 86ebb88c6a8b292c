// Borrow Instruction
//
// Prices the requested borrow against the oracle pair's spot reserves,
// checks the borrower's deposited collateral covers it, and pays out of the
// borrow vault. The reserves are read in the same transaction with no
// smoothing, which is exactly the weakness the drain scenario exercises.

use anchor_lang::prelude::*;
use cp_amm::state::PoolConfig as AmmPoolConfig;
use fungible_token::{program::FungibleToken, state::Balance};

use crate::{
    constants::*,
    errors::*,
    helpers::*,
    oracle::{deposit_required, AmmReserves},
    state::*,
};

#[derive(Accounts)]
pub struct Borrow<'info> {
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
        constraint = oracle_pool.key() == pool_config.oracle_pool @ LendingError::InvalidOracle,
    )]
    pub oracle_pool: Box<Account<'info, AmmPoolConfig>>,

    #[account(
        constraint = oracle_borrow_vault.mint == pool_config.borrow_mint
            @ LendingError::InvalidOracle,
    )]
    pub oracle_borrow_vault: Box<Account<'info, Balance>>,

    #[account(
        constraint = oracle_deposit_vault.mint == pool_config.deposit_mint
            @ LendingError::InvalidOracle,
    )]
    pub oracle_deposit_vault: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = borrow_vault.owner == pool_authority.key() @ LendingError::InvalidVault,
        constraint = borrow_vault.mint == pool_config.borrow_mint @ LendingError::InvalidVault,
    )]
    pub borrow_vault: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = borrower_receive.owner == borrower.key() @ LendingError::InvalidVault,
        constraint = borrower_receive.mint == pool_config.borrow_mint @ LendingError::InvalidVault,
    )]
    pub borrower_receive: Box<Account<'info, Balance>>,

    pub token_program: Program<'info, FungibleToken>,
}

impl<'info> Borrow<'info> {
    pub fn borrow(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LendingError::ZeroAmount);

        // Both oracle vaults must be custodied by the AMM pair we pinned at
        // initialization, otherwise anyone could present cooked reserves.
        let (oracle_authority, _) = Pubkey::find_program_address(
            &[
                cp_amm::constants::AMM_AUTHORITY_SEED,
                self.oracle_pool.key().as_ref(),
            ],
            &cp_amm::ID,
        );
        require!(
            self.oracle_borrow_vault.owner == oracle_authority
                && self.oracle_deposit_vault.owner == oracle_authority,
            LendingError::InvalidOracle
        );

        // VULNERABILITY: instantaneous spot reserves, sampled in the same
        // transaction as the borrow.
        let reserves = AmmReserves {
            base_reserve: self.oracle_borrow_vault.amount,
            quote_reserve: self.oracle_deposit_vault.amount,
        };

        let new_debt = self
            .position
            .debt
            .checked_add(amount)
            .ok_or(LendingError::Overflow)?;
        let required = deposit_required(&reserves, new_debt, self.pool_config.collateral_factor)?;
        require!(
            self.position.collateral >= required,
            LendingError::InsufficientCollateral
        );
        require!(
            amount <= self.borrow_vault.amount,
            LendingError::InsufficientLiquidity
        );

        let pool_config_key = self.pool_config.key();
        let authority_seeds: &[&[u8]] = &[
            LENDING_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];

        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.pool_authority.to_account_info(),
            &self.borrow_vault.to_account_info(),
            &self.borrower_receive.to_account_info(),
            authority_seeds,
        )?;

        self.position.record_borrow(amount)?;

        msg!(
            "Borrowed {} against {} collateral (required {})",
            amount,
            self.position.collateral,
            required
        );

        Ok(())
    }
}
