// Price Oracle Capability
//
// The borrow path never talks to the AMM program directly; it reads reserves
// into an AmmReserves source and prices through the PriceSource trait. Tests
// can substitute a fixed or time-weighted source without touching the AMM.

use anchor_lang::prelude::*;

use crate::errors::*;

// Marginal exchange rate as an exact rational: quote units per base unit.
#[derive(Debug, Clone, Copy)]
pub struct SpotPrice {
    pub quote_reserve: u64,
    pub base_reserve: u64,
}

pub trait PriceSource {
    fn spot_price(&self) -> Result<SpotPrice>;
}

// Spot reserves of a constant product pair, captured at borrow time.
pub struct AmmReserves {
    pub base_reserve: u64,
    pub quote_reserve: u64,
}

impl PriceSource for AmmReserves {
    fn spot_price(&self) -> Result<SpotPrice> {
        require!(
            self.base_reserve > 0 && self.quote_reserve > 0,
            LendingError::InvalidReserve
        );
        Ok(SpotPrice {
            quote_reserve: self.quote_reserve,
            base_reserve: self.base_reserve,
        })
    }
}

// Deposit of the quote asset required to borrow `borrow_amount` of the base
// asset: borrow_amount * price * collateral_factor, rounded up so rounding
// biases toward the pool.
pub fn deposit_required(
    source: &impl PriceSource,
    borrow_amount: u64,
    collateral_factor: u64,
) -> Result<u64> {
    let price = source.spot_price()?;

    let numerator = (borrow_amount as u128)
        .checked_mul(price.quote_reserve as u128)
        .ok_or(LendingError::Overflow)?
        .checked_mul(collateral_factor as u128)
        .ok_or(LendingError::Overflow)?;
    let required = numerator.div_ceil(price.base_reserve as u128);

    u64::try_from(required).map_err(|_| error!(LendingError::Overflow))
}
