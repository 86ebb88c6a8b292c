// Fungible Token Program
//
// ERC20-style balance and allowance bookkeeping. Balances and allowances are
// program accounts addressed by (mint, owner) and (mint, owner, spender), so
// any account - including a program PDA acting through CPI - can own tokens
// and grant standing spending rights.
//
// Instructions:
// - create_mint: Register a new token and its mint authority
// - create_balance: Create a balance record for any owner (permissionless)
// - mint_to: Issue new tokens (mint authority only)
// - transfer: Move tokens between balances (owner signs)
// - approve: Grant a spender an allowance over the owner's balance
// - transfer_from: Spend a previously granted allowance

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("AYZDZFuHFpWgo14sehnUabrKQE22VDYA89psB9Q7sk7E");

#[program]
pub mod fungible_token {
    use super::*;

    pub fn create_mint(ctx: Context<CreateMint>, decimals: u8) -> Result<()> {
        ctx.accounts.create_mint(decimals)
    }

    pub fn create_balance(ctx: Context<CreateBalance>) -> Result<()> {
        ctx.accounts.create_balance(&ctx.bumps)
    }

    pub fn mint_to(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        ctx.accounts.mint_to(amount)
    }

    pub fn transfer(ctx: Context<Transfer>, amount: u64) -> Result<()> {
        ctx.accounts.transfer(amount)
    }

    pub fn approve(ctx: Context<Approve>, amount: u64) -> Result<()> {
        ctx.accounts.approve(amount, &ctx.bumps)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_from(amount)
    }
}
