// Lending Pool Configuration State

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    pub authority: Pubkey,         // Pool creator
    pub borrow_mint: Pubkey,       // Asset lent out
    pub deposit_mint: Pubkey,      // Asset accepted as collateral
    pub oracle_pool: Pubkey,       // AMM pool whose spot reserves price borrows
    pub collateral_factor: u64,    // Over-collateralization multiplier (e.g. 3)
    pub config_bump: u8,           // PDA bump for config
    pub authority_bump: u8,        // PDA bump for vault authority
}
