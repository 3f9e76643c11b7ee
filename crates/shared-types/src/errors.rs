//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors from encoding or decoding a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxEncodeError {
    #[error("tx encode failed: {0}")]
    Encode(String),

    #[error("tx decode failed: {0}")]
    Decode(String),
}
