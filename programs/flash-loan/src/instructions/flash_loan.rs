// Flash Loan Instruction
//
// Executes one caller-supplied instruction with the pool authority signing,
// then re-reads the vault and requires the balance did not drop. The target
// program is the first remaining account, followed by every account the
// delegated instruction touches. The loaned amount is pulled by the
// delegated call itself, so `amount` only bounds it against pool liquidity.

use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
};
use fungible_token::{program::FungibleToken, state::Balance};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct FlashLoan<'info> {
    pub borrower: Signer<'info>,

    #[account(
        seeds = [FLASH_CONFIG_SEED, pool_config.token_mint.as_ref()],
        bump = pool_config.config_bump,
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer for the delegated call
    #[account(
        seeds = [FLASH_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump = pool_config.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = pool_vault.owner == pool_authority.key() @ FlashLoanError::InvalidVault,
        constraint = pool_vault.mint == pool_config.token_mint @ FlashLoanError::InvalidVault,
    )]
    pub pool_vault: Box<Account<'info, Balance>>,

    pub token_program: Program<'info, FungibleToken>,
}

pub fn flash_loan<'info>(
    mut ctx: Context<'_, '_, '_, 'info, FlashLoan<'info>>,
    amount: u64,
    call_data: Vec<u8>,
) -> Result<()> {
    let accounts = &ctx.accounts;

    require!(
        amount <= accounts.pool_vault.amount,
        FlashLoanError::InsufficientLiquidity
    );

    let (target, call_accounts) = ctx
        .remaining_accounts
        .split_first()
        .ok_or(FlashLoanError::MissingTarget)?;

    if let Some(trusted) = accounts.pool_config.trusted_target {
        require!(*target.key == trusted, FlashLoanError::UntrustedTarget);
    }

    let balance_before = accounts.pool_vault.amount;
    let pool_authority_key = accounts.pool_authority.key();

    // VULNERABILITY: the pool authority signs whatever instruction the
    // borrower assembled, for whatever target program they picked.
    let metas: Vec<AccountMeta> = call_accounts
        .iter()
        .map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.is_signer || *account.key == pool_authority_key,
            is_writable: account.is_writable,
        })
        .collect();

    let instruction = Instruction {
        program_id: *target.key,
        accounts: metas,
        data: call_data,
    };

    let mut account_infos = vec![target.to_account_info()];
    account_infos.extend(call_accounts.iter().map(|account| account.to_account_info()));
    account_infos.push(accounts.pool_authority.to_account_info());

    let pool_config_key = accounts.pool_config.key();
    let authority_seeds: &[&[u8]] = &[
        FLASH_AUTHORITY_SEED,
        pool_config_key.as_ref(),
        &[accounts.pool_config.authority_bump],
    ];

    msg!("Delegating to {} for up to {}", target.key, amount);
    invoke_signed(&instruction, &account_infos, &[authority_seeds])?;

    // Repayment check: only the balance is inspected, not allowances.
    let accounts = &mut ctx.accounts;
    accounts.pool_vault.reload()?;
    require!(
        accounts.pool_vault.amount >= balance_before,
        FlashLoanError::RepaymentNotMet
    );

    msg!("Flash loan settled, vault holds {}", accounts.pool_vault.amount);

    Ok(())
}
