//! # Transaction Admission (Ante Handler) Subsystem
//!
//! **Subsystem ID:** 6
//!
//! ## Purpose
//!
//! Decides whether a decoded transaction may enter the mempool (CheckTx),
//! stay in it (ReCheckTx) or execute in a block (DeliverTx). Every message
//! type is triaged into exactly one category; the category decides where
//! the message may appear. Order-book transactions use a block-height
//! validity window instead of the account sequence for replay protection.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Every type URL has exactly one category | `domain/registry.rs` - `MsgRegistryBuilder::build()` |
//! | App-injected msgs only alone and only in DeliverTx | `ante/msg_type.rs` - `ValidateMsgTypeDecorator` |
//! | Nesting is one level deep | `ante/msg_type.rs` - `validate_nested_msg()` |
//! | Replay check and sequence increment agree | `ante/sigverify.rs` - `replay_mode()` |
//! | Short-term orders carry no timeout height | `domain/replay.rs` - `check_timeout_height_exclusivity()` |
//! | A timestamp nonce is used at most once | `adapters/nonce.rs` - `TimestampNonceKeeper` |
//! | CheckTx never mutates durable state | `service.rs` - `run_tx()` cache branch |
//!
//! ## Message Categories
//!
//! | Category | External tx | Inside a nested msg |
//! |----------|-------------|---------------------|
//! | AppInjected | DeliverTx only, must be alone | rejected |
//! | Internal | rejected | allowed |
//! | Nested | inner msgs validated | rejected (double nesting) |
//! | Unsupported | rejected | rejected |
//! | Normal | allowed | allowed |
//!
//! ## Replay Protection
//!
//! ```text
//! all msgs short-term place/cancel or batch-cancel?
//!   ├─ yes ──→ [GOOD-TIL-BLOCK]  sequence ignored, timeout height must be 0
//!   └─ no  ──→ [SEQUENCE]
//!                ├─ signer sequence >= 2^40 ──→ timestamp nonce (unix ms)
//!                └─ otherwise ──→ must equal account sequence, then +1
//! ```
//!
//! ## Standard Chain
//!
//! | # | Decorator | Bypassed for app-injected |
//! |---|-----------|---------------------------|
//! | 1 | `SetUpContextDecorator` | |
//! | 2 | `FreeInfiniteGasDecorator` | |
//! | 3 | `ValidateMsgTypeDecorator` | |
//! | 4 | `ValidateBasicDecorator` | yes |
//! | 5 | `TxTimeoutHeightDecorator` | |
//! | 6 | `ValidateMemoDecorator` | |
//! | 7 | `ConsumeTxSizeGasDecorator` | |
//! | 8 | `SetPubKeyDecorator` | yes |
//! | 9 | `ValidateSigCountDecorator` | |
//! | 10 | `SigGasConsumeDecorator` | yes |
//! | 11 | `SigVerificationDecorator` | yes |
//! | 12 | `IncrementSequenceDecorator` | yes |
//!
//! Host decorators are appended through `TxAdmissionServiceBuilder::with_decorator`.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - MemoryStore, AccountKeeper, TimestampNonceKeeper,  │
//! │              Secp256k1Verifier, PrometheusMetrics               │
//! │  service.rs - TxAdmissionService composition root               │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - TxAdmissionApi, AnteHandler                │
//! │  ports/outbound.rs - KvStore, AccountStore, NonceProcessor,     │
//! │                      SignatureVerifier, ClobClassifier,         │
//! │                      MetricsSink                                │
//! │  ante/             - AnteDecorator chain and decorators         │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/registry.rs - MsgCategory, MsgRegistry                  │
//! │  domain/replay.rs   - ReplayMode, timeout-height exclusivity    │
//! │  domain/nonce.rs    - TimestampNonceDetails                     │
//! │  domain/gas.rs      - GasMeter and its three meters             │
//! │  domain/errors.rs   - AnteError and port errors                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod ante;
pub mod domain;
pub mod ports;
pub mod service;

pub use ante::{AnteChain, AnteDecorator, Context, Next};
pub use domain::*;
pub use ports::{AnteHandler, TxAdmissionApi};
pub use service::{TxAdmissionDeps, TxAdmissionService, TxAdmissionServiceBuilder};
