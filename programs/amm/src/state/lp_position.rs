// Liquidity Provider Position

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct LpPosition {
    pub owner: Pubkey, // Liquidity provider
    pub shares: u64,   // Share units held
    pub bump: u8,      // PDA bump
}
