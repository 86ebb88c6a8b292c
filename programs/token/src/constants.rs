// Token Program Constants

pub const BALANCE_SEED: &[u8] = b"balance";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";
pub const ANCHOR_DISCRIMINATOR: usize = 8;
