// Test utilities for the oracle-priced lending program

use anchor_lang::AccountDeserialize;
use solana_program_test::{processor, BanksClient, ProgramTest};
use solana_sdk::{
    account::Account,
    hash::{hash, Hash},
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::Keypair,
    system_program,
};

// Program IDs matching declare_id!
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::new_from_array(fungible_token::ID.to_bytes());
pub const AMM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(cp_amm::ID.to_bytes());
pub const LENDING_PROGRAM_ID: Pubkey = Pubkey::new_from_array(oracle_lending::ID.to_bytes());

// PDA Seeds
pub const BALANCE_SEED: &[u8] = b"balance";
pub const AMM_CONFIG_SEED: &[u8] = b"amm_config";
pub const AMM_AUTHORITY_SEED: &[u8] = b"amm_authority";
pub const LENDING_CONFIG_SEED: &[u8] = b"lending_config";
pub const LENDING_AUTHORITY_SEED: &[u8] = b"lending_authority";
pub const POSITION_SEED: &[u8] = b"position";

// Token decimals
pub const DECIMALS: u8 = 9;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Adapt the Anchor entrypoints to the BanksClient processor signature. The
// runtime hands the processor a short-lived account slice while Anchor's
// entry wants one that outlives the call, so the slice is leaked for the
// remainder of the test process.
fn token_entry(
    program_id: &Pubkey,
    accounts: &[anchor_lang::solana_program::account_info::AccountInfo],
    instruction_data: &[u8],
) -> anchor_lang::solana_program::entrypoint::ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    fungible_token::entry(program_id, accounts, instruction_data)
}

fn amm_entry(
    program_id: &Pubkey,
    accounts: &[anchor_lang::solana_program::account_info::AccountInfo],
    instruction_data: &[u8],
) -> anchor_lang::solana_program::entrypoint::ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    cp_amm::entry(program_id, accounts, instruction_data)
}

fn lending_entry(
    program_id: &Pubkey,
    accounts: &[anchor_lang::solana_program::account_info::AccountInfo],
    instruction_data: &[u8],
) -> anchor_lang::solana_program::entrypoint::ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    oracle_lending::entry(program_id, accounts, instruction_data)
}

// Start a test bank with all three programs and the given actors pre-funded
pub async fn setup(actors: &[Pubkey]) -> (BanksClient, Keypair, Hash) {
    let mut pt = ProgramTest::new(
        "fungible_token",
        TOKEN_PROGRAM_ID,
        processor!(token_entry),
    );
    pt.add_program("cp_amm", AMM_PROGRAM_ID, processor!(amm_entry));
    pt.add_program("oracle_lending", LENDING_PROGRAM_ID, processor!(lending_entry));
    for actor in actors {
        pt.add_account(
            *actor,
            Account {
                lamports: 100 * LAMPORTS_PER_SOL,
                data: vec![],
                owner: system_program::ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }
    pt.start().await
}

// PDA derivations

pub fn derive_balance_pda(mint: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BALANCE_SEED, mint.as_ref(), owner.as_ref()],
        &TOKEN_PROGRAM_ID,
    )
}

pub fn derive_amm_config_pda(token_a_mint: &Pubkey, token_b_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[AMM_CONFIG_SEED, token_a_mint.as_ref(), token_b_mint.as_ref()],
        &AMM_PROGRAM_ID,
    )
}

pub fn derive_amm_authority_pda(pool_config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AMM_AUTHORITY_SEED, pool_config.as_ref()], &AMM_PROGRAM_ID)
}

pub fn derive_lending_config_pda(borrow_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LENDING_CONFIG_SEED, borrow_mint.as_ref()],
        &LENDING_PROGRAM_ID,
    )
}

pub fn derive_lending_authority_pda(pool_config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LENDING_AUTHORITY_SEED, pool_config.as_ref()],
        &LENDING_PROGRAM_ID,
    )
}

pub fn derive_position_pda(pool_config: &Pubkey, borrower: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POSITION_SEED, pool_config.as_ref(), borrower.as_ref()],
        &LENDING_PROGRAM_ID,
    )
}

// Token instruction builders

pub fn build_create_mint_ix(authority: &Pubkey, mint: &Pubkey, decimals: u8) -> Instruction {
    let mut data = anchor_discriminator("create_mint").to_vec();
    data.push(decimals);

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(*mint, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

pub fn build_create_balance_ix(payer: &Pubkey, mint: &Pubkey, owner: &Pubkey) -> Instruction {
    let (balance, _) = derive_balance_pda(mint, owner);

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new(balance, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: anchor_discriminator("create_balance").to_vec(),
    }
}

pub fn build_mint_to_ix(
    authority: &Pubkey,
    mint: &Pubkey,
    to_owner: &Pubkey,
    amount: u64,
) -> Instruction {
    let (to, _) = derive_balance_pda(mint, to_owner);
    let mut data = anchor_discriminator("mint_to").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*mint, false),
            AccountMeta::new(to, false),
        ],
        data,
    }
}

// AMM instruction builders

pub fn build_initialize_amm_ix(
    authority: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    fee_basis_points: u16,
) -> Instruction {
    let (pool_config, _) = derive_amm_config_pda(token_a_mint, token_b_mint);
    let (pool_authority, _) = derive_amm_authority_pda(&pool_config);
    let (token_a_vault, _) = derive_balance_pda(token_a_mint, &pool_authority);
    let (token_b_vault, _) = derive_balance_pda(token_b_mint, &pool_authority);

    let mut data = anchor_discriminator("initialize_pool").to_vec();
    data.extend_from_slice(&fee_basis_points.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(*token_a_mint, false),
            AccountMeta::new_readonly(*token_b_mint, false),
            AccountMeta::new(pool_config, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(token_a_vault, false),
            AccountMeta::new(token_b_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

pub fn build_add_liquidity_ix(
    depositor: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    desired_amount_a: u64,
    desired_amount_b: u64,
    expiration: i64,
) -> Instruction {
    let (pool_config, _) = derive_amm_config_pda(token_a_mint, token_b_mint);
    let (pool_authority, _) = derive_amm_authority_pda(&pool_config);
    let (depositor_token_a, _) = derive_balance_pda(token_a_mint, depositor);
    let (depositor_token_b, _) = derive_balance_pda(token_b_mint, depositor);
    let (token_a_vault, _) = derive_balance_pda(token_a_mint, &pool_authority);
    let (token_b_vault, _) = derive_balance_pda(token_b_mint, &pool_authority);
    let (lp_position, _) = Pubkey::find_program_address(
        &[b"lp_position", pool_config.as_ref(), depositor.as_ref()],
        &AMM_PROGRAM_ID,
    );

    let mut data = anchor_discriminator("add_liquidity").to_vec();
    data.extend_from_slice(&desired_amount_a.to_le_bytes());
    data.extend_from_slice(&desired_amount_b.to_le_bytes());
    data.extend_from_slice(&expiration.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new(pool_config, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(depositor_token_a, false),
            AccountMeta::new(depositor_token_b, false),
            AccountMeta::new(token_a_vault, false),
            AccountMeta::new(token_b_vault, false),
            AccountMeta::new(lp_position, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

pub fn build_swap_ix(
    swapper: &Pubkey,
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    swap_a_for_b: bool,
    amount_in: u64,
    min_amount_out: u64,
    expiration: i64,
) -> Instruction {
    let (pool_config, _) = derive_amm_config_pda(token_a_mint, token_b_mint);
    let (pool_authority, _) = derive_amm_authority_pda(&pool_config);
    let (swapper_token_a, _) = derive_balance_pda(token_a_mint, swapper);
    let (swapper_token_b, _) = derive_balance_pda(token_b_mint, swapper);
    let (token_a_vault, _) = derive_balance_pda(token_a_mint, &pool_authority);
    let (token_b_vault, _) = derive_balance_pda(token_b_mint, &pool_authority);

    let mut data = anchor_discriminator("swap").to_vec();
    data.push(if swap_a_for_b { 1 } else { 0 });
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&min_amount_out.to_le_bytes());
    data.extend_from_slice(&expiration.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*swapper, true),
            AccountMeta::new_readonly(pool_config, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(swapper_token_a, false),
            AccountMeta::new(swapper_token_b, false),
            AccountMeta::new(token_a_vault, false),
            AccountMeta::new(token_b_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Lending instruction builders

pub fn build_initialize_lending_ix(
    authority: &Pubkey,
    borrow_mint: &Pubkey,
    deposit_mint: &Pubkey,
    collateral_factor: u64,
) -> Instruction {
    let (oracle_pool, _) = derive_amm_config_pda(borrow_mint, deposit_mint);
    let (pool_config, _) = derive_lending_config_pda(borrow_mint);
    let (pool_authority, _) = derive_lending_authority_pda(&pool_config);
    let (borrow_vault, _) = derive_balance_pda(borrow_mint, &pool_authority);
    let (deposit_vault, _) = derive_balance_pda(deposit_mint, &pool_authority);

    let mut data = anchor_discriminator("initialize_pool").to_vec();
    data.extend_from_slice(&collateral_factor.to_le_bytes());

    Instruction {
        program_id: LENDING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(*borrow_mint, false),
            AccountMeta::new_readonly(*deposit_mint, false),
            AccountMeta::new_readonly(oracle_pool, false),
            AccountMeta::new(pool_config, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(borrow_vault, false),
            AccountMeta::new(deposit_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

pub fn build_deposit_collateral_ix(
    borrower: &Pubkey,
    borrow_mint: &Pubkey,
    deposit_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (pool_config, _) = derive_lending_config_pda(borrow_mint);
    let (pool_authority, _) = derive_lending_authority_pda(&pool_config);
    let (position, _) = derive_position_pda(&pool_config, borrower);
    let (borrower_deposit, _) = derive_balance_pda(deposit_mint, borrower);
    let (deposit_vault, _) = derive_balance_pda(deposit_mint, &pool_authority);

    let mut data = anchor_discriminator("deposit_collateral").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: LENDING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*borrower, true),
            AccountMeta::new_readonly(pool_config, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(position, false),
            AccountMeta::new(borrower_deposit, false),
            AccountMeta::new(deposit_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

pub fn build_borrow_ix(
    borrower: &Pubkey,
    borrow_mint: &Pubkey,
    deposit_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (pool_config, _) = derive_lending_config_pda(borrow_mint);
    let (pool_authority, _) = derive_lending_authority_pda(&pool_config);
    let (position, _) = derive_position_pda(&pool_config, borrower);
    let (oracle_pool, _) = derive_amm_config_pda(borrow_mint, deposit_mint);
    let (oracle_authority, _) = derive_amm_authority_pda(&oracle_pool);
    let (oracle_borrow_vault, _) = derive_balance_pda(borrow_mint, &oracle_authority);
    let (oracle_deposit_vault, _) = derive_balance_pda(deposit_mint, &oracle_authority);
    let (borrow_vault, _) = derive_balance_pda(borrow_mint, &pool_authority);
    let (borrower_receive, _) = derive_balance_pda(borrow_mint, borrower);

    let mut data = anchor_discriminator("borrow").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: LENDING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*borrower, true),
            AccountMeta::new_readonly(pool_config, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(position, false),
            AccountMeta::new_readonly(oracle_pool, false),
            AccountMeta::new_readonly(oracle_borrow_vault, false),
            AccountMeta::new_readonly(oracle_deposit_vault, false),
            AccountMeta::new(borrow_vault, false),
            AccountMeta::new(borrower_receive, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_repay_ix(
    borrower: &Pubkey,
    borrow_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (pool_config, _) = derive_lending_config_pda(borrow_mint);
    let (pool_authority, _) = derive_lending_authority_pda(&pool_config);
    let (position, _) = derive_position_pda(&pool_config, borrower);
    let (borrower_source, _) = derive_balance_pda(borrow_mint, borrower);
    let (borrow_vault, _) = derive_balance_pda(borrow_mint, &pool_authority);

    let mut data = anchor_discriminator("repay").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: LENDING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*borrower, true),
            AccountMeta::new_readonly(pool_config, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(position, false),
            AccountMeta::new(borrower_source, false),
            AccountMeta::new(borrow_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Account readers

pub async fn read_balance(banks: &mut BanksClient, mint: &Pubkey, owner: &Pubkey) -> u64 {
    let (address, _) = derive_balance_pda(mint, owner);
    let account = banks
        .get_account(address)
        .await
        .expect("rpc")
        .expect("balance account should exist");
    let balance = fungible_token::state::Balance::try_deserialize(&mut account.data.as_slice())
        .expect("balance should deserialize");
    balance.amount
}

pub async fn read_position(
    banks: &mut BanksClient,
    borrow_mint: &Pubkey,
    borrower: &Pubkey,
) -> oracle_lending::state::Position {
    let (pool_config, _) = derive_lending_config_pda(borrow_mint);
    let (address, _) = derive_position_pda(&pool_config, borrower);
    let account = banks
        .get_account(address)
        .await
        .expect("rpc")
        .expect("position should exist");
    oracle_lending::state::Position::try_deserialize(&mut account.data.as_slice())
        .expect("position should deserialize")
}
