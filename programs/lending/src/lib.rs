// Oracle-Priced Lending Program
//
// Lends one asset against over-collateralized deposits of another, pricing
// the collateral requirement from the spot reserves of a constant product
// AMM pair read at borrow time.
//
// WARNING: This program is intentionally vulnerable for educational purposes.
//
// VULNERABILITY: The pool conflates the AMM's instantaneous spot price with
// fair market value. There is no time-weighting, no manipulation resistance,
// and no liquidity-depth check, so one large swap immediately before a borrow
// collapses the deposit requirement and lets the borrower drain the pool.
//
// Instructions:
// - initialize_pool: Create the pool, its vaults, and pin the oracle pair
// - deposit_collateral: Move deposit asset into pool custody
// - borrow: Take borrow asset against already-deposited collateral
// - repay: Return borrow asset, reducing recorded debt

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod oracle;
pub mod state;

use instructions::*;

declare_id!("AauwRVzGBK8rcKR3TiPzrn4DzE6xJp7oZd8TujaeA7Ea");

#[program]
pub mod oracle_lending {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, collateral_factor: u64) -> Result<()> {
        ctx.accounts.initialize_pool(collateral_factor, &ctx.bumps)
    }

    pub fn deposit_collateral(ctx: Context<DepositCollateral>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_collateral(amount, &ctx.bumps)
    }

    pub fn borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
        ctx.accounts.borrow(amount)
    }

    pub fn repay(ctx: Context<Repay>, amount: u64) -> Result<()> {
        ctx.accounts.repay(amount)
    }
}
