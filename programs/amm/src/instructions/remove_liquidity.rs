// Remove Liquidity Instruction
//
// Burns share units for a proportional slice of both reserves, with
// caller-supplied minimums as slippage floors.

use anchor_lang::prelude::*;
use fungible_token::{program::FungibleToken, state::Balance};

use crate::{constants::*, curve, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    pub withdrawer: Signer<'info>,

    #[account(
        mut,
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
        seeds = [
            LP_POSITION_SEED,
            pool_config.key().as_ref(),
            withdrawer.key().as_ref(),
        ],
        bump = lp_position.bump,
    )]
    pub lp_position: Box<Account<'info, LpPosition>>,

    #[account(
        mut,
        constraint = withdrawer_token_a.owner == withdrawer.key() @ AmmError::InvalidVault,
        constraint = withdrawer_token_a.mint == pool_config.token_a_mint @ AmmError::InvalidVault,
    )]
    pub withdrawer_token_a: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = withdrawer_token_b.owner == withdrawer.key() @ AmmError::InvalidVault,
        constraint = withdrawer_token_b.mint == pool_config.token_b_mint @ AmmError::InvalidVault,
    )]
    pub withdrawer_token_b: Box<Account<'info, Balance>>,

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

impl<'info> RemoveLiquidity<'info> {
    pub fn remove_liquidity(
        &mut self,
        shares_to_burn: u64,
        min_amount_a: u64,
        min_amount_b: u64,
        expiration: i64,
    ) -> Result<()> {
        validate_expiration(expiration)?;
        require!(shares_to_burn > 0, AmmError::ZeroDepositAmount);
        require!(
            shares_to_burn <= self.lp_position.shares,
            AmmError::InsufficientShares
        );

        let (amount_a, amount_b) = curve::withdrawal_amounts(
            shares_to_burn,
            self.token_a_vault.amount,
            self.token_b_vault.amount,
            self.pool_config.total_lp_shares,
        )?;
        require!(
            amount_a >= min_amount_a && amount_b >= min_amount_b,
            AmmError::InsufficientWithdrawAmount
        );

        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            AMM_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];

        transfer_from_vault(
            amount_a,
            &self.token_program.to_account_info(),
            &self.pool_authority.to_account_info(),
            &self.token_a_vault.to_account_info(),
            &self.withdrawer_token_a.to_account_info(),
            authority_seeds,
        )?;
        transfer_from_vault(
            amount_b,
            &self.token_program.to_account_info(),
            &self.pool_authority.to_account_info(),
            &self.token_b_vault.to_account_info(),
            &self.withdrawer_token_b.to_account_info(),
            authority_seeds,
        )?;

        self.lp_position.shares -= shares_to_burn;
        self.pool_config.total_lp_shares = self
            .pool_config
            .total_lp_shares
            .checked_sub(shares_to_burn)
            .ok_or(AmmError::Underflow)?;

        msg!(
            "Burned {} shares for {} A + {} B",
            shares_to_burn,
            amount_a,
            amount_b
        );

        Ok(())
    }
}
