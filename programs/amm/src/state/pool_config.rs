// Pool Configuration State
//
// Reserves are deliberately not cached here: they are always the live vault
// balances, so every reader sees the post-swap state immediately.

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    pub authority: Pubkey,     // Pool creator
    pub token_a_mint: Pubkey,  // First token in pair
    pub token_b_mint: Pubkey,  // Second token in pair
    pub fee_basis_points: u16, // Swap fee (e.g., 30 = 0.30%), 0 for fee-less pools
    pub total_lp_shares: u64,  // Outstanding share units across all providers
    pub config_bump: u8,       // PDA bump for config
    pub authority_bump: u8,    // PDA bump for vault authority
}
