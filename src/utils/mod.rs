//! Utility modules for plancost
//!
//! - **error**: Error handling types
//! - **format**: Monetary display formatting

pub mod error;
pub mod format;

pub use error::{PlancostError, Result};
pub use format::{format_inr, format_usd};
