//! # Domain Layer - Tx Admission Subsystem
//!
//! Pure policy with no storage or crypto dependencies.
//!
//! ## Components
//!
//! - `registry`: MsgCategory, MsgRegistry and its builder
//! - `msg_types`: the standard per-category type URL lists
//! - `replay`: sequence vs good-til-block decision, timestamp nonce cutoff
//! - `nonce`: per-account timestamp nonce state machine
//! - `gas`: GasMeter trait and the basic, infinite and free meters
//! - `config`: AdmissionConfig, TimestampNonceConfig
//! - `value_objects`: ExecutionMode, BlockHeader, AnteOutcome
//! - `errors`: AnteError and the port/construction errors feeding it

pub mod config;
pub mod errors;
pub mod gas;
pub mod msg_types;
pub mod nonce;
pub mod registry;
pub mod replay;
pub mod value_objects;

pub use config::*;
pub use errors::*;
pub use gas::*;
pub use nonce::*;
pub use registry::*;
pub use replay::*;
pub use value_objects::*;
