// Add Liquidity Instruction
//
// First deposit sets the initial reserve ratio and mints sqrt(a * b) shares;
// later deposits are scaled to the smaller side so the ratio is preserved.

use anchor_lang::prelude::*;
use fungible_token::{program::FungibleToken, state::Balance};

use crate::{constants::*, curve, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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
        constraint = depositor_token_a.owner == depositor.key() @ AmmError::InvalidVault,
        constraint = depositor_token_a.mint == pool_config.token_a_mint @ AmmError::InvalidVault,
    )]
    pub depositor_token_a: Box<Account<'info, Balance>>,

    #[account(
        mut,
        constraint = depositor_token_b.owner == depositor.key() @ AmmError::InvalidVault,
        constraint = depositor_token_b.mint == pool_config.token_b_mint @ AmmError::InvalidVault,
    )]
    pub depositor_token_b: Box<Account<'info, Balance>>,

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

    #[account(
        init_if_needed,
        payer = depositor,
        space = ANCHOR_DISCRIMINATOR + LpPosition::INIT_SPACE,
        seeds = [
            LP_POSITION_SEED,
            pool_config.key().as_ref(),
            depositor.key().as_ref(),
        ],
        bump
    )]
    pub lp_position: Box<Account<'info, LpPosition>>,

    pub token_program: Program<'info, FungibleToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(
        &mut self,
        desired_amount_a: u64,
        desired_amount_b: u64,
        expiration: i64,
        bumps: &AddLiquidityBumps,
    ) -> Result<()> {
        validate_expiration(expiration)?;
        require!(
            desired_amount_a > 0 && desired_amount_b > 0,
            AmmError::ZeroDepositAmount
        );

        let reserve_a = self.token_a_vault.amount;
        let reserve_b = self.token_b_vault.amount;

        let (amount_a, amount_b, shares) = if self.pool_config.total_lp_shares == 0 {
            let shares = curve::initial_shares(desired_amount_a, desired_amount_b)?;
            (desired_amount_a, desired_amount_b, shares)
        } else {
            curve::proportional_deposit(
                desired_amount_a,
                desired_amount_b,
                reserve_a,
                reserve_b,
                self.pool_config.total_lp_shares,
            )?
        };
        require!(shares > 0, AmmError::InsufficientLiquidity);

        transfer_tokens(
            amount_a,
            &self.token_program.to_account_info(),
            &self.depositor.to_account_info(),
            &self.depositor_token_a.to_account_info(),
            &self.token_a_vault.to_account_info(),
        )?;
        transfer_tokens(
            amount_b,
            &self.token_program.to_account_info(),
            &self.depositor.to_account_info(),
            &self.depositor_token_b.to_account_info(),
            &self.token_b_vault.to_account_info(),
        )?;

        if self.lp_position.owner == Pubkey::default() {
            self.lp_position.owner = self.depositor.key();
            self.lp_position.bump = bumps.lp_position;
        }
        self.lp_position.shares = self
            .lp_position
            .shares
            .checked_add(shares)
            .ok_or(AmmError::Overflow)?;
        self.pool_config.total_lp_shares = self
            .pool_config
            .total_lp_shares
            .checked_add(shares)
            .ok_or(AmmError::Overflow)?;

        msg!(
            "Deposited {} A + {} B for {} shares",
            amount_a,
            amount_b,
            shares
        );

        Ok(())
    }
}
