//! Ports layer for the Tx Admission subsystem.
//!
//! Defines the hexagonal architecture port traits:
//! - Inbound (Driving) ports: the admission API and the ante handler seam
//! - Outbound (Driven) ports: state, nonce, crypto, order-book and metrics

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
