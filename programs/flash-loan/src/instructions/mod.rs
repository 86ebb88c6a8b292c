// Instructions Module
//
// Exports all instruction handlers for the flash loan program

pub mod flash_loan;
pub mod initialize_pool;

pub use flash_loan::*;
pub use initialize_pool::*;
