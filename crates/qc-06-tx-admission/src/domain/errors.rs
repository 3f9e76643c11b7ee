//! Admission error types.
//!
//! `AnteError` is the only error that crosses the decorator chain. Each
//! variant carries a human-readable detail and renders as
//! `"<detail>: <kind>"`, so `AnteError::InvalidRequest("msgs cannot be empty")`
//! displays as `msgs cannot be empty: invalid request`.

use super::registry::MsgCategory;
use thiserror::Error;

/// Error returned by any decorator in the ante chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnteError {
    #[error("{0}: tx parse error")]
    TxDecode(String),

    #[error("{0}: unauthorized")]
    Unauthorized(String),

    #[error("{0}: invalid pubkey")]
    InvalidPubKey(String),

    #[error("{0}: unknown address")]
    UnknownAddress(String),

    #[error("{0}: out of gas")]
    OutOfGas(String),

    #[error("{0}: memo too large")]
    MemoTooLarge(String),

    #[error("{0}: maximum number of signatures exceeded")]
    TooManySignatures(String),

    #[error("{0}: no signatures supplied")]
    NoSignatures(String),

    #[error("{0}: invalid request")]
    InvalidRequest(String),

    #[error("{0}: tx timeout height")]
    TxTimeoutHeight(String),

    #[error("{0}: incorrect account sequence")]
    WrongSequence(String),

    #[error("{0}: internal")]
    Internal(String),
}

impl AnteError {
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::InvalidRequest(detail.into())
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::Unauthorized(detail.into())
    }

    pub fn wrong_sequence(detail: impl Into<String>) -> Self {
        Self::WrongSequence(detail.into())
    }

    /// Stable ABCI response code.
    pub fn code(&self) -> u32 {
        match self {
            Self::Internal(_) => 1,
            Self::TxDecode(_) => 2,
            Self::Unauthorized(_) => 4,
            Self::InvalidPubKey(_) => 8,
            Self::UnknownAddress(_) => 9,
            Self::OutOfGas(_) => 11,
            Self::MemoTooLarge(_) => 12,
            Self::TooManySignatures(_) => 14,
            Self::NoSignatures(_) => 15,
            Self::InvalidRequest(_) => 18,
            Self::TxTimeoutHeight(_) => 30,
            Self::WrongSequence(_) => 32,
        }
    }

    /// The detail text without the kind suffix.
    pub fn detail(&self) -> &str {
        match self {
            Self::TxDecode(d)
            | Self::Unauthorized(d)
            | Self::InvalidPubKey(d)
            | Self::UnknownAddress(d)
            | Self::OutOfGas(d)
            | Self::MemoTooLarge(d)
            | Self::TooManySignatures(d)
            | Self::NoSignatures(d)
            | Self::InvalidRequest(d)
            | Self::TxTimeoutHeight(d)
            | Self::WrongSequence(d)
            | Self::Internal(d) => d,
        }
    }
}

/// Registry construction failures. Any of these means a message type was
/// mis-triaged and the node must not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("msg type {type_url} registered as both {first:?} and {second:?}")]
    Duplicate {
        type_url: String,
        first: MsgCategory,
        second: MsgCategory,
    },

    #[error("decodable msg type {0} is not assigned to any category")]
    Untriaged(String),

    #[error("msg type {0} is categorised but not decodable")]
    Undecodable(String),
}

/// Gas meter failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GasError {
    #[error("out of gas in location: {descriptor}; gasWanted: {limit}, gasUsed: {consumed}")]
    OutOfGas {
        descriptor: String,
        limit: u64,
        consumed: u64,
    },

    #[error("gas overflow in location: {0}")]
    Overflow(String),

    #[error("negative gas consumed in location: {0}")]
    NegativeRefund(String),
}

impl From<GasError> for AnteError {
    fn from(err: GasError) -> Self {
        match err {
            GasError::OutOfGas { .. } => AnteError::OutOfGas(err.to_string()),
            GasError::Overflow(_) | GasError::NegativeRefund(_) => {
                AnteError::Internal(err.to_string())
            }
        }
    }
}

/// Failures reported by a `SignatureVerifier`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("invalid signature encoding: {0}")]
    InvalidFormat(String),

    #[error("signature is not in low-S form")]
    Malleable,

    #[error("signature does not match sign bytes")]
    Mismatch,
}

/// Failures reported by a `NonceProcessor`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NonceError {
    #[error("timestamp nonce {nonce} not within valid time window")]
    OutsideWindow { nonce: u64 },

    #[error("timestamp nonce {nonce} already used")]
    AlreadyUsed { nonce: u64 },

    #[error("timestamp nonce {nonce} is not greater than max ejected nonce {max_ejected}")]
    NotNewerThanEjected { nonce: u64, max_ejected: u64 },

    #[error("timestamp nonce {nonce} rejected")]
    Rejected { nonce: u64 },

    #[error("timestamp nonce state corrupted: {0}")]
    Corrupted(String),
}
