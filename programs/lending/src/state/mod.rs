// State Module
//
// Exports all account types for the lending program

pub mod pool_config;
pub mod position;

pub use pool_config::*;
pub use position::*;
