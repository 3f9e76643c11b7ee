//! # Integration Scenarios
//!
//! End-to-end runs of `TxAdmissionService` with the production adapters:
//! bincode accounts, timestamp nonces, k256 verification and Prometheus
//! metrics.

pub mod admission_flows;
pub mod concurrency;
pub mod replay_protection;
