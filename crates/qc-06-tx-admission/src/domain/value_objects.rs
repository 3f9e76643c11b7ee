//! Value objects for the admission domain.

use std::fmt;

/// Which ABCI phase a transaction is being admitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// First admission into the mempool.
    CheckTx,
    /// Re-validation of a pooled tx after a new block.
    ReCheckTx,
    /// Execution inside a block.
    DeliverTx,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::CheckTx => "check",
            ExecutionMode::ReCheckTx => "recheck",
            ExecutionMode::DeliverTx => "deliver",
        }
    }

    pub fn is_check(&self) -> bool {
        matches!(self, ExecutionMode::CheckTx | ExecutionMode::ReCheckTx)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block data visible to decorators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub chain_id: String,
    pub height: u64,
    /// Block time in unix milliseconds.
    pub time_ms: u64,
}

impl BlockHeader {
    pub fn new(chain_id: impl Into<String>, height: u64, time_ms: u64) -> Self {
        Self {
            chain_id: chain_id.into(),
            height,
            time_ms,
        }
    }
}

/// Why a transaction runs under the free gas meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasExemption {
    /// A single proposer-injected message.
    AppInjected,
    /// An order-book transaction.
    Clob,
}

impl GasExemption {
    pub fn as_str(&self) -> &'static str {
        match self {
            GasExemption::AppInjected => "app_injected",
            GasExemption::Clob => "clob",
        }
    }
}

/// Result of a successful ante run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnteOutcome {
    /// Limit of the meter the tx ran under.
    pub gas_wanted: u64,
    pub gas_used: u64,
    /// Whether the tx ran under the free meter.
    pub gas_exempt: bool,
}
