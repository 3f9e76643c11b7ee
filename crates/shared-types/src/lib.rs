//! # Shared Types Crate
//!
//! Entities shared by the admission pipeline and its collaborators: signer
//! accounts, decoded transactions, and the order-book payloads whose
//! validity windows affect replay protection.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-subsystem types are defined here.
//! - **Decoded Input**: admission receives a `Tx` that has already passed
//!   the codec; raw bytes never reach the decorator chain.

pub mod clob;
pub mod entities;
pub mod errors;
pub mod tx;

pub use clob::*;
pub use entities::*;
pub use errors::*;
pub use tx::*;
