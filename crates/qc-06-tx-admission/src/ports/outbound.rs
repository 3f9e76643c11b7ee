//! Outbound (Driven) ports for the Tx Admission subsystem.
//!
//! These traits define the collaborators the decorator chain reads from and
//! writes to. All state access goes through a `KvStore` handed in per
//! transaction, so the same adapter instance can serve concurrent CheckTx
//! calls against independent store views.

use crate::domain::{AnteError, ExecutionMode, GasExemption, NonceError, SignatureError};
use shared_types::{Address, BaseAccount, OrderId, PublicKey, Tx};

/// Byte-keyed state as seen by one transaction.
pub trait KvStore: Send {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&mut self, key: &[u8], value: Vec<u8>);

    fn delete(&mut self, key: &[u8]);

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }
}

/// Signer account storage.
pub trait AccountStore: Send + Sync {
    /// Loads an account. `Ok(None)` if it does not exist.
    fn get_account(
        &self,
        store: &dyn KvStore,
        address: &Address,
    ) -> Result<Option<BaseAccount>, AnteError>;

    /// Persists an account.
    fn set_account(&self, store: &mut dyn KvStore, account: &BaseAccount) -> Result<(), AnteError>;
}

/// Timestamp nonce validation and consumption.
pub trait NonceProcessor: Send + Sync {
    /// Validates `nonce` for `address` against block time and records it.
    ///
    /// Must reject a nonce already consumed for the same account.
    fn process_timestamp_nonce(
        &self,
        store: &mut dyn KvStore,
        block_time_ms: u64,
        address: &Address,
        nonce: u64,
    ) -> Result<(), NonceError>;
}

/// Identity a signature is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerData {
    pub address: Address,
    pub chain_id: String,
    pub account_number: u64,
    pub sequence: u64,
}

/// Cryptographic signature verification.
pub trait SignatureVerifier: Send + Sync {
    fn verify(
        &self,
        pub_key: &PublicKey,
        signer: &SignerData,
        signature: &[u8],
        sign_bytes: &[u8],
    ) -> Result<(), SignatureError>;
}

/// Order-book collaborator.
pub trait ClobClassifier: Send + Sync {
    /// Whether `tx` is an order-book transaction.
    fn has_clob_msg(&self, tx: &Tx) -> bool;

    /// Whether the order lives in state across blocks.
    fn is_stateful_order(&self, order_id: &OrderId) -> bool;
}

/// Admission counters.
pub trait MetricsSink: Send + Sync {
    /// A sequence-mode signature carried the wrong sequence.
    fn sequence_invalid(&self, msg_type: &str);

    /// A timestamp nonce was refused.
    fn timestamp_nonce_invalid(&self, msg_type: &str);

    /// A transaction finished the chain. `code` is set for rejections.
    fn tx_outcome(&self, mode: ExecutionMode, msg_type: &str, code: Option<u32>);

    fn gas_exempt(&self, reason: GasExemption);

    /// Starts a latency measurement; the observation happens on drop.
    fn start_timer(&self, mode: ExecutionMode) -> Box<dyn Send>;
}

/// Mock metrics sink for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MockMetrics {
    pub sequence_invalid: std::sync::atomic::AtomicU64,
    pub timestamp_nonce_invalid: std::sync::atomic::AtomicU64,
    pub accepted: std::sync::atomic::AtomicU64,
    pub rejected: std::sync::atomic::AtomicU64,
    pub gas_exempt: std::sync::atomic::AtomicU64,
    /// Every msg type label handed to the sink.
    pub labels: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockMetrics {
    pub fn count(counter: &std::sync::atomic::AtomicU64) -> u64 {
        counter.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn record(&self, msg_type: &str) {
        if let Ok(mut labels) = self.labels.lock() {
            labels.push(msg_type.to_string());
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.labels.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl MetricsSink for MockMetrics {
    fn sequence_invalid(&self, msg_type: &str) {
        self.record(msg_type);
        self.sequence_invalid
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn timestamp_nonce_invalid(&self, msg_type: &str) {
        self.record(msg_type);
        self.timestamp_nonce_invalid
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn tx_outcome(&self, _mode: ExecutionMode, msg_type: &str, code: Option<u32>) {
        self.record(msg_type);
        let counter = if code.is_some() {
            &self.rejected
        } else {
            &self.accepted
        };
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn gas_exempt(&self, _reason: GasExemption) {
        self.gas_exempt
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn start_timer(&self, _mode: ExecutionMode) -> Box<dyn Send> {
        Box::new(())
    }
}

/// Mock verifier for testing: accepts a signature equal to the first
/// 8 bytes of the sign bytes, rejects everything else.
#[cfg(test)]
pub struct MockVerifier;

#[cfg(test)]
impl MockVerifier {
    pub fn sign(sign_bytes: &[u8]) -> Vec<u8> {
        sign_bytes.iter().take(8).copied().collect()
    }
}

#[cfg(test)]
impl SignatureVerifier for MockVerifier {
    fn verify(
        &self,
        _pub_key: &PublicKey,
        _signer: &SignerData,
        signature: &[u8],
        sign_bytes: &[u8],
    ) -> Result<(), SignatureError> {
        if signature == MockVerifier::sign(sign_bytes).as_slice() {
            Ok(())
        } else {
            Err(SignatureError::Mismatch)
        }
    }
}
