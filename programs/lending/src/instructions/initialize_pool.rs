// Initialize Pool Instruction
//
// Creates the lending pool, its two custody vaults, and pins the AMM pair
// used as the price oracle. The oracle must trade exactly the borrow asset
// against the deposit asset.

use anchor_lang::prelude::*;
use cp_amm::state::PoolConfig as AmmPoolConfig;
use fungible_token::{program::FungibleToken, state::TokenMint};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub borrow_mint: Box<Account<'info, TokenMint>>,
    pub deposit_mint: Box<Account<'info, TokenMint>>,

    #[account(
        constraint = oracle_pool.token_a_mint == borrow_mint.key()
            && oracle_pool.token_b_mint == deposit_mint.key()
            @ LendingError::InvalidOracle,
    )]
    pub oracle_pool: Box<Account<'info, AmmPoolConfig>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + PoolConfig::INIT_SPACE,
        seeds = [LENDING_CONFIG_SEED, borrow_mint.key().as_ref()],
        bump
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer for vault operations
    #[account(
        seeds = [LENDING_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// CHECK: created via CPI into the token program
    #[account(mut)]
    pub borrow_vault: UncheckedAccount<'info>,

    /// CHECK: created via CPI into the token program
    #[account(mut)]
    pub deposit_vault: UncheckedAccount<'info>,

    pub token_program: Program<'info, FungibleToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        collateral_factor: u64,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        require!(collateral_factor > 1, LendingError::InvalidCollateralFactor);

        self.create_vault(&self.borrow_mint, &self.borrow_vault)?;
        self.create_vault(&self.deposit_mint, &self.deposit_vault)?;

        self.pool_config.set_inner(PoolConfig {
            authority: self.authority.key(),
            borrow_mint: self.borrow_mint.key(),
            deposit_mint: self.deposit_mint.key(),
            oracle_pool: self.oracle_pool.key(),
            collateral_factor,
            config_bump: bumps.pool_config,
            authority_bump: bumps.pool_authority,
        });

        msg!(
            "Lending pool initialized: borrow {} against {} at {}x",
            self.borrow_mint.key(),
            self.deposit_mint.key(),
            collateral_factor
        );

        Ok(())
    }

    fn create_vault(
        &self,
        mint: &Account<'info, TokenMint>,
        vault: &UncheckedAccount<'info>,
    ) -> Result<()> {
        fungible_token::cpi::create_balance(CpiContext::new(
            self.token_program.to_account_info(),
            fungible_token::cpi::accounts::CreateBalance {
                payer: self.authority.to_account_info(),
                mint: mint.to_account_info(),
                owner: self.pool_authority.to_account_info(),
                balance: vault.to_account_info(),
                system_program: self.system_program.to_account_info(),
            },
        ))
    }
}
