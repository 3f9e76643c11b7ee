//! # Quantum-Chain Test Suite
//!
//! Unified test crate driving the composed admission service end to end
//! with real secp256k1 keys.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # TestChain, TestAccount, message builders
//! └── integration/      # Cross-crate scenarios
//!     ├── admission_flows.rs
//!     ├── replay_protection.rs
//!     └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By category
//! cargo test -p qc-tests integration::replay_protection
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
