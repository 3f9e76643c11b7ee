//! Per-transaction execution context.

use crate::domain::{
    AnteError, BlockHeader, ExecutionMode, GasExemption, GasMeter, InfiniteGasMeter,
};
use crate::ports::KvStore;

/// State handed through the decorator chain for one transaction.
///
/// `store` is the transaction's view of state; writes land wherever the
/// host pointed it (normally a discardable cache branch).
pub struct Context<'a> {
    pub store: &'a mut dyn KvStore,
    header: BlockHeader,
    mode: ExecutionMode,
    gas_meter: Box<dyn GasMeter>,
    gas_exemption: Option<GasExemption>,
}

impl<'a> Context<'a> {
    /// Creates a context with an unbounded tracking meter. The chain's
    /// first decorator is expected to replace it.
    pub fn new(store: &'a mut dyn KvStore, header: BlockHeader, mode: ExecutionMode) -> Self {
        Self {
            store,
            header,
            mode,
            gas_meter: Box::new(InfiniteGasMeter::new()),
            gas_exemption: None,
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn is_recheck(&self) -> bool {
        self.mode == ExecutionMode::ReCheckTx
    }

    pub fn is_deliver(&self) -> bool {
        self.mode == ExecutionMode::DeliverTx
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn block_height(&self) -> u64 {
        self.header.height
    }

    pub fn block_time_ms(&self) -> u64 {
        self.header.time_ms
    }

    pub fn chain_id(&self) -> &str {
        &self.header.chain_id
    }

    pub fn gas_meter(&self) -> &dyn GasMeter {
        self.gas_meter.as_ref()
    }

    pub fn set_gas_meter(&mut self, meter: Box<dyn GasMeter>) {
        self.gas_meter = meter;
    }

    /// Charges the current meter.
    pub fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), AnteError> {
        self.gas_meter.consume_gas(amount, descriptor)?;
        Ok(())
    }

    pub fn gas_exemption(&self) -> Option<GasExemption> {
        self.gas_exemption
    }

    pub fn set_gas_exemption(&mut self, reason: GasExemption) {
        self.gas_exemption = Some(reason);
    }
}
