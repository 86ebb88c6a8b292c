// Instructions Module
//
// Exports all instruction handlers for the token program

pub mod approve;
pub mod create_balance;
pub mod create_mint;
pub mod mint_to;
pub mod transfer;
pub mod transfer_from;

pub use approve::*;
pub use create_balance::*;
pub use create_mint::*;
pub use mint_to::*;
pub use transfer::*;
pub use transfer_from::*;
