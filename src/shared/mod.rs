/// Shared kernel - error types, constants and the crate-wide Result alias
pub mod constants;
pub mod error;
pub mod result;

pub use result::Result;
