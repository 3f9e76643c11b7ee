//! Gas meter installation, exemption and tx-size charging.

use super::{AnteDecorator, Context, Next};
use crate::domain::{
    AnteError, BasicGasMeter, FreeInfiniteGasMeter, GasError, GasExemption, InfiniteGasMeter,
    MsgRegistry,
};
use crate::ports::{ClobClassifier, MetricsSink};
use shared_types::{Tx, PUBLIC_KEY_LENGTH};
use std::sync::Arc;
use tracing::trace;

/// Encoded size of a compact secp256k1 signature.
const SIGNATURE_LENGTH: u64 = 64;

/// Installs a fresh meter for every transaction.
///
/// Bounded by the fee's gas limit, except when simulating or at genesis
/// where consumption is tracked without a limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetUpContextDecorator;

impl SetUpContextDecorator {
    pub fn new() -> Self {
        Self
    }
}

impl AnteDecorator for SetUpContextDecorator {
    fn name(&self) -> &'static str {
        "SetUpContext"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        if simulate || ctx.block_height() == 0 {
            ctx.set_gas_meter(Box::new(InfiniteGasMeter::new()));
        } else {
            ctx.set_gas_meter(Box::new(BasicGasMeter::new(tx.gas_limit())));
        }
        next.run(ctx, tx, simulate)
    }
}

/// Swaps in the free meter for app-injected and order-book transactions.
pub struct FreeInfiniteGasDecorator {
    registry: Arc<MsgRegistry>,
    clob: Arc<dyn ClobClassifier>,
    metrics: Arc<dyn MetricsSink>,
}

impl FreeInfiniteGasDecorator {
    pub fn new(
        registry: Arc<MsgRegistry>,
        clob: Arc<dyn ClobClassifier>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            registry,
            clob,
            metrics,
        }
    }

    /// Why `tx` should run unmetered, if it should.
    pub fn exemption(&self, tx: &Tx) -> Option<GasExemption> {
        if self.registry.is_single_app_injected(tx.msgs()) {
            Some(GasExemption::AppInjected)
        } else if self.clob.has_clob_msg(tx) {
            Some(GasExemption::Clob)
        } else {
            None
        }
    }
}

impl AnteDecorator for FreeInfiniteGasDecorator {
    fn name(&self) -> &'static str {
        "FreeInfiniteGas"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        if let Some(reason) = self.exemption(tx) {
            trace!("[Admission] Free gas meter installed ({})", reason.as_str());
            ctx.set_gas_meter(Box::new(FreeInfiniteGasMeter::new()));
            ctx.set_gas_exemption(reason);
            self.metrics.gas_exempt(reason);
        }
        next.run(ctx, tx, simulate)
    }
}

/// Charges gas proportional to the encoded transaction size.
pub struct ConsumeTxSizeGasDecorator {
    cost_per_byte: u64,
}

impl ConsumeTxSizeGasDecorator {
    pub fn new(cost_per_byte: u64) -> Self {
        Self { cost_per_byte }
    }

    fn size_cost(&self, tx: &Tx, simulate: bool) -> Result<u64, AnteError> {
        let mut bytes = tx
            .encoded_len()
            .map_err(|e| AnteError::TxDecode(e.to_string()))?;

        // Simulated txs are usually unsigned; charge for the signature and
        // key bytes they will carry once signed.
        if simulate {
            let signed = tx.signatures.iter().filter(|s| !s.is_empty()).count();
            let unsigned = tx.signers().len().saturating_sub(signed) as u64;
            bytes = bytes
                .saturating_add(unsigned * (SIGNATURE_LENGTH + PUBLIC_KEY_LENGTH as u64));
        }

        bytes
            .checked_mul(self.cost_per_byte)
            .ok_or_else(|| GasError::Overflow("txSize".to_string()).into())
    }
}

impl AnteDecorator for ConsumeTxSizeGasDecorator {
    fn name(&self) -> &'static str {
        "ConsumeTxSizeGas"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        let cost = self.size_cost(tx, simulate)?;
        ctx.consume_gas(cost, "txSize")?;
        next.run(ctx, tx, simulate)
    }
}
