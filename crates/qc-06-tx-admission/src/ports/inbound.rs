//! # Inbound Ports - AnteHandler, TxAdmissionApi
//!
//! Driving ports exposed to the host application.
//!
//! | Method | Execution mode | State effect |
//! |--------|----------------|--------------|
//! | `check_tx` | CheckTx | discarded |
//! | `recheck_tx` | ReCheckTx | discarded |
//! | `deliver_tx` | DeliverTx | committed on success |
//! | `simulate_tx` | any, `simulate = true` | discarded |

use crate::ante::Context;
use crate::domain::{AnteError, AnteOutcome, BlockHeader, MsgCategory};
use crate::ports::KvStore;
use shared_types::Tx;

/// Runs admission checks against an already-built context.
///
/// Implemented by `AnteChain`; host-defined handlers may wrap it.
pub trait AnteHandler: Send + Sync {
    fn ante_handle(&self, ctx: &mut Context<'_>, tx: &Tx, simulate: bool)
        -> Result<(), AnteError>;
}

/// Admission API for the host application.
///
/// Each call runs the full decorator chain against a cache branch of
/// `store`. Only a successful `deliver_tx` writes the branch back.
///
/// # Example
///
/// ```rust,ignore
/// use qc_06_tx_admission::ports::TxAdmissionApi;
///
/// fn admit(api: &impl TxAdmissionApi, store: &mut dyn KvStore, header: &BlockHeader, tx: &Tx) {
///     match api.check_tx(store, header, tx) {
///         Ok(outcome) => println!("gas wanted {}", outcome.gas_wanted),
///         Err(err) => println!("rejected ({}): {}", err.code(), err),
///     }
/// }
/// ```
pub trait TxAdmissionApi: Send + Sync {
    /// First admission of a transaction into the mempool.
    fn check_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError>;

    /// Re-admission of a pooled transaction after a block commits.
    fn recheck_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError>;

    /// Admission during block execution.
    fn deliver_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError>;

    /// Gas estimation. Signatures are not verified and state never changes.
    fn simulate_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError>;

    /// Category of a message type URL, if registered.
    fn classify(&self, type_url: &str) -> Option<MsgCategory>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TxAdmissionApi, _: &dyn AnteHandler) {}
}
