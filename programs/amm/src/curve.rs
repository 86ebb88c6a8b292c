// Constant Product Curve Math
//
// Pure functions over reserve amounts. All intermediate arithmetic is u128 so
// full u64 reserves cannot overflow; rounding always favors the pool.

use anchor_lang::prelude::*;

use crate::errors::*;

pub const FEE_DENOMINATOR: u64 = 10_000;

// Output amount for a given input along x * y = k.
//
// amount_out = floor(in * feeN * reserve_out / (reserve_in * feeD + in * feeN))
// with feeN = FEE_DENOMINATOR - fee_bps. A zero fee degenerates to the plain
// constant product quote floor(in * reserve_out / (reserve_in + in)).
pub fn quote_out(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_basis_points: u16,
) -> Result<u64> {
    require!(reserve_in > 0 && reserve_out > 0, AmmError::InvalidReserve);
    require!(amount_in > 0, AmmError::ZeroSwapAmount);

    let fee_numerator = (FEE_DENOMINATOR - fee_basis_points as u64) as u128;
    let in_with_fee = (amount_in as u128)
        .checked_mul(fee_numerator)
        .ok_or(AmmError::Overflow)?;
    let numerator = in_with_fee
        .checked_mul(reserve_out as u128)
        .ok_or(AmmError::Overflow)?;
    let denominator = (reserve_in as u128)
        .checked_mul(FEE_DENOMINATOR as u128)
        .ok_or(AmmError::Overflow)?
        .checked_add(in_with_fee)
        .ok_or(AmmError::Overflow)?;

    // numerator / denominator < reserve_out, so the cast cannot truncate
    Ok((numerator / denominator) as u64)
}

// Marginal price of the base asset in terms of the quote asset, as the exact
// rational (quote_reserve / base_reserve). Pure function of current reserves -
// any consumer treating this as fair value inherits its manipulability.
pub fn spot_price(base_reserve: u64, quote_reserve: u64) -> Result<(u64, u64)> {
    require!(base_reserve > 0 && quote_reserve > 0, AmmError::InvalidReserve);
    Ok((quote_reserve, base_reserve))
}

// Shares minted for the very first deposit: geometric mean of the amounts.
pub fn initial_shares(amount_a: u64, amount_b: u64) -> Result<u64> {
    let product = (amount_a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(AmmError::Overflow)?;
    let shares = isqrt(product);
    require!(shares > 0, AmmError::InsufficientLiquidity);
    Ok(shares as u64)
}

// Deposit into an existing pool: mint shares proportional to the smaller side
// so the reserve ratio is preserved, and derive the token amounts actually
// taken from those shares.
pub fn proportional_deposit(
    desired_a: u64,
    desired_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u64,
) -> Result<(u64, u64, u64)> {
    require!(reserve_a > 0 && reserve_b > 0, AmmError::InvalidReserve);

    let shares_from_a = (desired_a as u128)
        .checked_mul(total_shares as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(reserve_a as u128)
        .ok_or(AmmError::DivisionByZero)?;
    let shares_from_b = (desired_b as u128)
        .checked_mul(total_shares as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(reserve_b as u128)
        .ok_or(AmmError::DivisionByZero)?;
    let shares = std::cmp::min(shares_from_a, shares_from_b);

    let amount_a = shares
        .checked_mul(reserve_a as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(total_shares as u128)
        .ok_or(AmmError::DivisionByZero)? as u64;
    let amount_b = shares
        .checked_mul(reserve_b as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(total_shares as u128)
        .ok_or(AmmError::DivisionByZero)? as u64;

    Ok((amount_a, amount_b, shares as u64))
}

// Proportional withdrawal when burning shares.
pub fn withdrawal_amounts(
    shares_to_burn: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u64,
) -> Result<(u64, u64)> {
    let amount_a = (shares_to_burn as u128)
        .checked_mul(reserve_a as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(total_shares as u128)
        .ok_or(AmmError::DivisionByZero)? as u64;
    let amount_b = (shares_to_burn as u128)
        .checked_mul(reserve_b as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(total_shares as u128)
        .ok_or(AmmError::DivisionByZero)? as u64;

    Ok((amount_a, amount_b))
}

// Integer square root (Newton's method), rounding down.
pub fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}
