// Lending Program Constants

pub const LENDING_CONFIG_SEED: &[u8] = b"lending_config";
pub const LENDING_AUTHORITY_SEED: &[u8] = b"lending_authority";
pub const POSITION_SEED: &[u8] = b"position";
pub const ANCHOR_DISCRIMINATOR: usize = 8;
