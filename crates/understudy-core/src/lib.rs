#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

mod error;
mod ledger;
mod session;
mod store;

pub use error::*;
pub use ledger::*;
pub use session::*;
pub use store::*;
