//! Adapters layer for the Tx Admission subsystem.
//!
//! Concrete implementations of the outbound ports: in-memory state with
//! cache branches, the account and nonce keepers, secp256k1 verification,
//! order-flag classification and Prometheus metrics.

pub mod account;
pub mod clob;
pub mod metrics;
pub mod nonce;
pub mod secp256k1;
pub mod store;

pub use account::AccountKeeper;
pub use clob::OrderFlagsClassifier;
pub use metrics::{NoopMetrics, PrometheusMetrics};
pub use nonce::TimestampNonceKeeper;
pub use secp256k1::Secp256k1Verifier;
pub use store::{CacheStore, MemoryStore};
