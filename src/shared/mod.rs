/// Shared utilities - common error and result types
pub mod error;
pub mod result;

pub use result::Result;
