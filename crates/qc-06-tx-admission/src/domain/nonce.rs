//! Timestamp nonce bookkeeping for a single account.
//!
//! An account remembers a bounded set of recently used nonces plus the
//! largest nonce ever ejected from that set. A nonce is accepted when it
//! falls inside the block-time window, is newer than every ejected nonce,
//! and has not been seen.

use super::config::TimestampNonceConfig;
use super::errors::NonceError;
use serde::{Deserialize, Serialize};

/// Per-account timestamp nonce state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampNonceDetails {
    pub timestamp_nonces: Vec<u64>,
    pub max_ejected_nonce: u64,
}

/// Whether `nonce` lies within `[block_time - past, block_time + future]`.
pub fn is_within_window(nonce: u64, block_time_ms: u64, config: &TimestampNonceConfig) -> bool {
    let earliest = block_time_ms.saturating_sub(config.max_time_in_past_ms);
    let latest = block_time_ms.saturating_add(config.max_time_in_future_ms);
    nonce >= earliest && nonce <= latest
}

impl TimestampNonceDetails {
    /// Fresh state holding only `nonce`, under the same bound as
    /// [`try_add`](Self::try_add).
    pub fn first(nonce: u64, config: &TimestampNonceConfig) -> Result<Self, NonceError> {
        let mut details = Self::default();
        details.try_add(nonce, config)?;
        Ok(details)
    }

    /// Drops nonces that fell out of the window, remembering the largest.
    pub fn eject_stale(&mut self, block_time_ms: u64, config: &TimestampNonceConfig) {
        let earliest = block_time_ms.saturating_sub(config.max_time_in_past_ms);
        let mut max_ejected = self.max_ejected_nonce;
        self.timestamp_nonces.retain(|nonce| {
            if *nonce < earliest {
                max_ejected = max_ejected.max(*nonce);
                false
            } else {
                true
            }
        });
        self.max_ejected_nonce = max_ejected;
    }

    /// Records `nonce` or explains why it cannot be used.
    ///
    /// When the set is full the oldest nonce is replaced, and only if
    /// `nonce` is newer than it.
    pub fn try_add(&mut self, nonce: u64, config: &TimestampNonceConfig) -> Result<(), NonceError> {
        if nonce <= self.max_ejected_nonce {
            return Err(NonceError::NotNewerThanEjected {
                nonce,
                max_ejected: self.max_ejected_nonce,
            });
        }
        if self.timestamp_nonces.contains(&nonce) {
            return Err(NonceError::AlreadyUsed { nonce });
        }

        if self.timestamp_nonces.len() < config.max_tracked_nonces {
            self.timestamp_nonces.push(nonce);
            return Ok(());
        }

        let oldest = self
            .timestamp_nonces
            .iter()
            .enumerate()
            .min_by_key(|(_, n)| **n)
            .map(|(i, n)| (i, *n));

        match oldest {
            Some((idx, min_nonce)) if nonce > min_nonce => {
                self.timestamp_nonces[idx] = nonce;
                self.max_ejected_nonce = self.max_ejected_nonce.max(min_nonce);
                Ok(())
            }
            _ => Err(NonceError::Rejected { nonce }),
        }
    }
}
