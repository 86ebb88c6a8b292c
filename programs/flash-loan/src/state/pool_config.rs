// Flash Loan Pool Configuration State
//
// `trusted_target` is the remediation knob: None reproduces the vulnerable
// deployment where the delegated call may hit any program, Some(program)
// restricts it to a single audited receiver.

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    pub authority: Pubkey,              // Pool creator
    pub token_mint: Pubkey,             // Asset held in the vault
    pub trusted_target: Option<Pubkey>, // Allowed delegated-call program, if restricted
    pub config_bump: u8,                // PDA bump for config
    pub authority_bump: u8,             // PDA bump for vault authority
}
