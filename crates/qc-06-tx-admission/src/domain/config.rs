//! Admission parameters.

/// Sequence values at or above this are timestamp nonces in unix
/// milliseconds rather than account sequence counters.
pub const TIMESTAMP_NONCE_SEQUENCE_CUTOFF: u64 = 1 << 40;

/// Bounds on timestamp nonces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampNonceConfig {
    /// How far behind block time a nonce may be.
    pub max_time_in_past_ms: u64,
    /// How far ahead of block time a nonce may be.
    pub max_time_in_future_ms: u64,
    /// Nonces remembered per account before the oldest is ejected.
    pub max_tracked_nonces: usize,
}

impl Default for TimestampNonceConfig {
    fn default() -> Self {
        Self {
            max_time_in_past_ms: 30_000,
            max_time_in_future_ms: 30_000,
            max_tracked_nonces: 20,
        }
    }
}

/// Parameters consumed by the standard decorators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionConfig {
    /// Longest accepted memo, in characters.
    pub max_memo_characters: usize,
    /// Most signatures a tx may carry.
    pub tx_sig_limit: usize,
    /// Gas charged per encoded tx byte.
    pub tx_size_cost_per_byte: u64,
    /// Gas charged per secp256k1 signature.
    pub sig_verify_cost_secp256k1: u64,
    pub timestamp_nonce: TimestampNonceConfig,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_memo_characters: 256,
            tx_sig_limit: 7,
            tx_size_cost_per_byte: 10,
            sig_verify_cost_secp256k1: 1000,
            timestamp_nonce: TimestampNonceConfig::default(),
        }
    }
}

impl AdmissionConfig {
    /// Create a config for testing with tight limits.
    pub fn for_testing() -> Self {
        Self {
            max_memo_characters: 32,
            tx_sig_limit: 3,
            tx_size_cost_per_byte: 1,
            sig_verify_cost_secp256k1: 100,
            timestamp_nonce: TimestampNonceConfig {
                max_time_in_past_ms: 1_000,
                max_time_in_future_ms: 1_000,
                max_tracked_nonces: 3,
            },
        }
    }
}
