//! Gas meters.
//!
//! | Meter | Limit | Consumption | Used for |
//! |-------|-------|-------------|----------|
//! | `BasicGasMeter` | fee gas limit | tracked, errors past limit | ordinary txs |
//! | `InfiniteGasMeter` | `u64::MAX` | tracked, never errors | simulation, genesis |
//! | `FreeInfiniteGasMeter` | `u64::MAX` | ignored, always 0 | exempt txs |

use super::errors::GasError;

/// Tracks execution cost for a single transaction.
pub trait GasMeter: Send {
    fn gas_consumed(&self) -> u64;

    /// Gas consumed, capped at the limit.
    fn gas_consumed_to_limit(&self) -> u64 {
        self.gas_consumed().min(self.limit())
    }

    fn gas_remaining(&self) -> u64;

    fn limit(&self) -> u64;

    fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasError>;

    fn refund_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasError>;

    fn is_past_limit(&self) -> bool;

    fn is_out_of_gas(&self) -> bool;

    /// Short name for logs.
    fn kind(&self) -> &'static str;
}

/// Meter bounded by the transaction's gas limit.
#[derive(Debug, Clone)]
pub struct BasicGasMeter {
    limit: u64,
    consumed: u64,
}

impl BasicGasMeter {
    pub fn new(limit: u64) -> Self {
        Self { limit, consumed: 0 }
    }
}

impl GasMeter for BasicGasMeter {
    fn gas_consumed(&self) -> u64 {
        self.consumed
    }

    fn gas_remaining(&self) -> u64 {
        self.limit.saturating_sub(self.consumed)
    }

    fn limit(&self) -> u64 {
        self.limit
    }

    fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasError> {
        match self.consumed.checked_add(amount) {
            Some(consumed) => self.consumed = consumed,
            None => {
                self.consumed = u64::MAX;
                return Err(GasError::Overflow(descriptor.to_string()));
            }
        }

        if self.consumed > self.limit {
            return Err(GasError::OutOfGas {
                descriptor: descriptor.to_string(),
                limit: self.limit,
                consumed: self.consumed,
            });
        }
        Ok(())
    }

    fn refund_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasError> {
        if amount > self.consumed {
            return Err(GasError::NegativeRefund(descriptor.to_string()));
        }
        self.consumed -= amount;
        Ok(())
    }

    fn is_past_limit(&self) -> bool {
        self.consumed > self.limit
    }

    fn is_out_of_gas(&self) -> bool {
        self.consumed >= self.limit
    }

    fn kind(&self) -> &'static str {
        "basic"
    }
}

/// Unbounded meter that still records consumption.
#[derive(Debug, Clone, Default)]
pub struct InfiniteGasMeter {
    consumed: u64,
}

impl InfiniteGasMeter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GasMeter for InfiniteGasMeter {
    fn gas_consumed(&self) -> u64 {
        self.consumed
    }

    fn gas_remaining(&self) -> u64 {
        u64::MAX
    }

    fn limit(&self) -> u64 {
        u64::MAX
    }

    fn consume_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasError> {
        self.consumed = self
            .consumed
            .checked_add(amount)
            .ok_or_else(|| GasError::Overflow(descriptor.to_string()))?;
        Ok(())
    }

    fn refund_gas(&mut self, amount: u64, descriptor: &str) -> Result<(), GasError> {
        if amount > self.consumed {
            return Err(GasError::NegativeRefund(descriptor.to_string()));
        }
        self.consumed -= amount;
        Ok(())
    }

    fn is_past_limit(&self) -> bool {
        false
    }

    fn is_out_of_gas(&self) -> bool {
        false
    }

    fn kind(&self) -> &'static str {
        "infinite"
    }
}

/// Meter for exempt transactions. Every operation is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeInfiniteGasMeter;

impl FreeInfiniteGasMeter {
    pub fn new() -> Self {
        Self
    }
}

impl GasMeter for FreeInfiniteGasMeter {
    fn gas_consumed(&self) -> u64 {
        0
    }

    fn gas_consumed_to_limit(&self) -> u64 {
        0
    }

    fn gas_remaining(&self) -> u64 {
        u64::MAX
    }

    fn limit(&self) -> u64 {
        u64::MAX
    }

    fn consume_gas(&mut self, _amount: u64, _descriptor: &str) -> Result<(), GasError> {
        Ok(())
    }

    fn refund_gas(&mut self, _amount: u64, _descriptor: &str) -> Result<(), GasError> {
        Ok(())
    }

    fn is_past_limit(&self) -> bool {
        false
    }

    fn is_out_of_gas(&self) -> bool {
        false
    }

    fn kind(&self) -> &'static str {
        "free"
    }
}
