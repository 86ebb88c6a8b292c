// Flash Loan Program
//
// Lends pool tokens for the duration of a single instruction by executing a
// caller-supplied instruction with the pool authority as a signer, then
// verifying the vault balance was not reduced.
//
// WARNING: This program is intentionally vulnerable for educational purposes.
//
// VULNERABILITY: The delegated call runs with the pool authority's signature
// and an arbitrary target program. The repayment check only inspects the
// vault's token balance, so a call that leaves the balance intact but grants
// a standing allowance on the vault passes, and the attacker drains the pool
// afterwards with transfer_from. Pools configured with a trusted target
// reject every other program and close the hole.
//
// Instructions:
// - initialize_pool: Create the pool config and its custody vault
// - flash_loan: Execute a delegated call, then enforce repayment

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("5TjMWCAxL2USV5UchmaZx24CJgEtmPvNXSnEiCioXaxY");

#[program]
pub mod flash_loan {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        trusted_target: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.initialize_pool(trusted_target, &ctx.bumps)
    }

    pub fn flash_loan<'info>(
        ctx: Context<'_, '_, '_, 'info, FlashLoan<'info>>,
        amount: u64,
        call_data: Vec<u8>,
    ) -> Result<()> {
        instructions::flash_loan::flash_loan(ctx, amount, call_data)
    }
}
