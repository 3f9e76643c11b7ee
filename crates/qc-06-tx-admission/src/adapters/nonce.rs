//! Timestamp nonce processor over a `KvStore`.

use crate::domain::{is_within_window, NonceError, TimestampNonceConfig, TimestampNonceDetails};
use crate::ports::{KvStore, NonceProcessor};
use shared_types::Address;
use tracing::debug;

/// Key prefix for per-account nonce state.
pub const TIMESTAMP_NONCE_PREFIX: u8 = 0x02;

pub struct TimestampNonceKeeper {
    config: TimestampNonceConfig,
}

impl TimestampNonceKeeper {
    pub fn new(config: TimestampNonceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TimestampNonceConfig {
        &self.config
    }

    pub fn nonce_key(address: &Address) -> Vec<u8> {
        let mut key = Vec::with_capacity(1 + address.len());
        key.push(TIMESTAMP_NONCE_PREFIX);
        key.extend_from_slice(address);
        key
    }

    /// Stored nonce state for `address`, if any.
    pub fn details(
        &self,
        store: &dyn KvStore,
        address: &Address,
    ) -> Result<Option<TimestampNonceDetails>, NonceError> {
        store
            .get(&Self::nonce_key(address))
            .map(|bytes| {
                bincode::deserialize(&bytes).map_err(|e| NonceError::Corrupted(e.to_string()))
            })
            .transpose()
    }
}

impl NonceProcessor for TimestampNonceKeeper {
    fn process_timestamp_nonce(
        &self,
        store: &mut dyn KvStore,
        block_time_ms: u64,
        address: &Address,
        nonce: u64,
    ) -> Result<(), NonceError> {
        if !is_within_window(nonce, block_time_ms, &self.config) {
            return Err(NonceError::OutsideWindow { nonce });
        }

        let details = match self.details(&*store, address)? {
            None => TimestampNonceDetails::first(nonce, &self.config)?,
            Some(mut details) => {
                details.eject_stale(block_time_ms, &self.config);
                details.try_add(nonce, &self.config)?;
                details
            }
        };

        let encoded =
            bincode::serialize(&details).map_err(|e| NonceError::Corrupted(e.to_string()))?;
        store.set(&Self::nonce_key(address), encoded);
        debug!(
            "[Admission] Timestamp nonce {} accepted ({} tracked)",
            nonce,
            details.timestamp_nonces.len()
        );
        Ok(())
    }
}
