// Swap Instruction
//
// Exchanges one asset for the other along the constant product curve. The
// quote is a pure function of the live vault balances, so a swap in the same
// transaction sequence as an oracle read moves the price that read observes.

use anchor_lang::prelude::*;
use fungible_token::{program::FungibleToken, state::Balance};

use crate::{constants::*, curve, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Swap<'info> {
    pub swapper: Signer<'info>,

    #[account(
        seeds = [
            AMM_CONFIG_SEED,
            pool_config.token_a_mint.as_ref(),
            pool_config.token_b_mint.as_ref(),
        ],
        bump = pool_config.config_bump,
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer for vault operations
    #[account(
        seeds = [AMM_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump = pool_config.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = swapper_token_a.owner == swapper.key() @ AmmError::InvalidVault,
        constraint = swapper_token_a.mint == pool_config.token_a_mint @ AmmError::InvalidVault,
    )]
    pub swapper_token_a: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = swapper_token_b.owner == swapper.key() @ AmmError::InvalidVault,
        constraint = swapper_token_b.mint == pool_config.token_b_mint @ AmmError::InvalidVault,
    )]
    pub swapper_token_b: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = token_a_vault.owner == pool_authority.key() @ AmmError::InvalidVault,
        constraint = token_a_vault.mint == pool_config.token_a_mint @ AmmError::InvalidVault,
    )]
    pub token_a_vault: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = token_b_vault.owner == pool_authority.key() @ AmmError::InvalidVault,
        constraint = token_b_vault.mint == pool_config.token_b_mint @ AmmError::InvalidVault,
    )]
    pub token_b_vault: Box<Account<'info, Balance>>,

    pub token_program: Program<'info, FungibleToken>,
}

impl<'info> Swap<'info> {
    pub fn swap(
        &mut self,
        swap_a_for_b: bool,
        amount_in: u64,
        min_amount_out: u64,
        expiration: i64,
    ) -> Result<()> {
        validate_expiration(expiration)?;
        require!(amount_in > 0, AmmError::ZeroSwapAmount);

        let (reserve_in, reserve_out) = if swap_a_for_b {
            (self.token_a_vault.amount, self.token_b_vault.amount)
        } else {
            (self.token_b_vault.amount, self.token_a_vault.amount)
        };

        let amount_out = curve::quote_out(
            amount_in,
            reserve_in,
            reserve_out,
            self.pool_config.fee_basis_points,
        )?;
        require!(amount_out >= min_amount_out, AmmError::SlippageExceeded);
        require!(amount_out <= reserve_out, AmmError::InsufficientLiquidity);

        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            AMM_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];

        if swap_a_for_b {
            transfer_tokens(
                amount_in,
                &self.token_program.to_account_info(),
                &self.swapper.to_account_info(),
                &self.swapper_token_a.to_account_info(),
                &self.token_a_vault.to_account_info(),
            )?;
            transfer_from_vault(
                amount_out,
                &self.token_program.to_account_info(),
                &self.pool_authority.to_account_info(),
                &self.token_b_vault.to_account_info(),
                &self.swapper_token_b.to_account_info(),
                authority_seeds,
            )?;
            msg!("Swapped {} A -> {} B", amount_in, amount_out);
        } else {
            transfer_tokens(
                amount_in,
                &self.token_program.to_account_info(),
                &self.swapper.to_account_info(),
                &self.swapper_token_b.to_account_info(),
                &self.token_b_vault.to_account_info(),
            )?;
            transfer_from_vault(
                amount_out,
                &self.token_program.to_account_info(),
                &self.pool_authority.to_account_info(),
                &self.token_a_vault.to_account_info(),
                &self.swapper_token_a.to_account_info(),
                authority_seeds,
            )?;
            msg!("Swapped {} B -> {} A", amount_in, amount_out);
        }

        Ok(())
    }
}
