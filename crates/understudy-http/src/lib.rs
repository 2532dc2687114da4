#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

mod error;
mod fields;
mod handler;
mod request;
mod response;

pub use error::*;
pub use fields::*;
pub use handler::*;
pub use request::*;
pub use response::*;
