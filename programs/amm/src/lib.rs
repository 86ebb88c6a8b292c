// Constant Product AMM Program
//
// Two-asset pool priced by the x * y = k invariant. Reserves are the pool's
// vault balances and are readable by anyone, including other programs that
// treat the instantaneous ratio as a price oracle. A single large swap moves
// that ratio within one transaction - there is no time-weighting and no
// depth requirement, which is exactly the surface the lending scenario
// exercises.
//
// Instructions:
// - initialize_pool: Create a pool for a token pair
// - add_liquidity: Deposit both assets, receive pool shares
// - remove_liquidity: Burn shares, receive proportional reserves
// - swap: Exchange one asset for the other along the curve

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("2U66apqjnzC3cqiuNkPHSLKjQedcW9by4YCLDN5CwkHn");

#[program]
pub mod cp_amm {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, fee_basis_points: u16) -> Result<()> {
        ctx.accounts.initialize_pool(fee_basis_points, &ctx.bumps)
    }

    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        desired_amount_a: u64,
        desired_amount_b: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts
            .add_liquidity(desired_amount_a, desired_amount_b, expiration, &ctx.bumps)
    }

    pub fn remove_liquidity(
        ctx: Context<RemoveLiquidity>,
        shares_to_burn: u64,
        min_amount_a: u64,
        min_amount_b: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts
            .remove_liquidity(shares_to_burn, min_amount_a, min_amount_b, expiration)
    }

    pub fn swap(
        ctx: Context<Swap>,
        swap_a_for_b: bool,
        amount_in: u64,
        min_amount_out: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts
            .swap(swap_a_for_b, amount_in, min_amount_out, expiration)
    }
}
