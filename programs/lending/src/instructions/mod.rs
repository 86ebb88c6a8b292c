// Instructions Module
//
// Exports all instruction handlers for the lending program

pub mod borrow;
pub mod deposit_collateral;
pub mod initialize_pool;
pub mod repay;

pub use borrow::*;
pub use deposit_collateral::*;
pub use initialize_pool::*;
pub use repay::*;
