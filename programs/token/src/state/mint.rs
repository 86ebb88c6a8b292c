// Token Mint State

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct TokenMint {
    pub authority: Pubkey, // Can mint new tokens
    pub supply: u64,       // Total tokens in circulation
    pub decimals: u8,      // Display decimals
}
