// State Module
//
// Exports all account types for the AMM program

pub mod lp_position;
pub mod pool_config;

pub use lp_position::*;
pub use pool_config::*;
