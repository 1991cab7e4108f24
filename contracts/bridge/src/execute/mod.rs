//! Execute handlers for the wZNN bridge contract
//!
//! - `redeem` - signature-authorized release of custodied tokens
//! - `swap` - allowance-pulled lock of caller tokens into custody

mod redeem;
mod swap;

pub use redeem::*;
pub use swap::*;
