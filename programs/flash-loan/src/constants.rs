// Flash Loan Program Constants

use anchor_lang::prelude::*;

#[constant]
pub const FLASH_CONFIG_SEED: &[u8] = b"flash_config";

#[constant]
pub const FLASH_AUTHORITY_SEED: &[u8] = b"flash_authority";

pub const ANCHOR_DISCRIMINATOR: usize = 8;
