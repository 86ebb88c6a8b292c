// Initialize Pool Instruction
//
// Creates the flash loan pool config and its custody vault.

use anchor_lang::prelude::*;
use fungible_token::{program::FungibleToken, state::TokenMint};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_mint: Box<Account<'info, TokenMint>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + PoolConfig::INIT_SPACE,
        seeds = [FLASH_CONFIG_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer for vault operations and the delegated call
    #[account(
        seeds = [FLASH_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// CHECK: created via CPI into the token program
    #[account(mut)]
    pub pool_vault: UncheckedAccount<'info>,

    pub token_program: Program<'info, FungibleToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        trusted_target: Option<Pubkey>,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        fungible_token::cpi::create_balance(CpiContext::new(
            self.token_program.to_account_info(),
            fungible_token::cpi::accounts::CreateBalance {
                payer: self.authority.to_account_info(),
                mint: self.token_mint.to_account_info(),
                owner: self.pool_authority.to_account_info(),
                balance: self.pool_vault.to_account_info(),
                system_program: self.system_program.to_account_info(),
            },
        ))?;

        self.pool_config.set_inner(PoolConfig {
            authority: self.authority.key(),
            token_mint: self.token_mint.key(),
            trusted_target,
            config_bump: bumps.pool_config,
            authority_bump: bumps.pool_authority,
        });

        match trusted_target {
            Some(target) => msg!("Flash loan pool initialized, trusted target {}", target),
            None => msg!("Flash loan pool initialized, any target allowed"),
        }

        Ok(())
    }
}
