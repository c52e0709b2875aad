//! jsonseal core types and errors.

mod error;
mod types;

pub use error::{JsonsealError, Result};
pub use types::Sha256Digest;
