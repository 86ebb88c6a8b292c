// Initialize Pool Instruction
//
// Creates a new pool for a token pair. The vault balance records are created
// through CPI into the token program, owned by the pool authority PDA.

use anchor_lang::prelude::*;
use fungible_token::{program::FungibleToken, state::TokenMint};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_a_mint: Box<Account<'info, TokenMint>>,
    pub token_b_mint: Box<Account<'info, TokenMint>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + PoolConfig::INIT_SPACE,
        seeds = [
            AMM_CONFIG_SEED,
            token_a_mint.key().as_ref(),
            token_b_mint.key().as_ref(),
        ],
        bump
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer for vault operations
    #[account(
        seeds = [AMM_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// CHECK: created via CPI into the token program
    #[account(mut)]
    pub token_a_vault: UncheckedAccount<'info>,

    /// CHECK: created via CPI into the token program
    #[account(mut)]
    pub token_b_vault: UncheckedAccount<'info>,

    pub token_program: Program<'info, FungibleToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        fee_basis_points: u16,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        require!(
            fee_basis_points <= MAX_FEE_BASIS_POINTS,
            AmmError::FeeTooHigh
        );
        require!(
            self.token_a_mint.key() != self.token_b_mint.key(),
            AmmError::IdenticalTokenMints
        );

        self.create_vault(&self.token_a_mint, &self.token_a_vault)?;
        self.create_vault(&self.token_b_mint, &self.token_b_vault)?;

        self.pool_config.set_inner(PoolConfig {
            authority: self.authority.key(),
            token_a_mint: self.token_a_mint.key(),
            token_b_mint: self.token_b_mint.key(),
            fee_basis_points,
            total_lp_shares: 0,
            config_bump: bumps.pool_config,
            authority_bump: bumps.pool_authority,
        });

        msg!(
            "Pool initialized: {} / {}",
            self.token_a_mint.key(),
            self.token_b_mint.key()
        );
        msg!("Fee: {} basis points", fee_basis_points);

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
