// State Module
//
// Exports all account types for the token program

pub mod allowance;
pub mod balance;
pub mod mint;

pub use allowance::*;
pub use balance::*;
pub use mint::*;
