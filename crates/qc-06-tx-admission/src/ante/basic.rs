//! Stateless shape checks.

use super::{AnteDecorator, Context, Next};
use crate::domain::AnteError;
use shared_types::Tx;

/// Highest gas limit a tx may request.
pub const MAX_GAS_WANTED: u64 = (1 << 63) - 1;

/// Signature presence and count. Skipped on ReCheckTx.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateBasicDecorator;

impl ValidateBasicDecorator {
    pub fn new() -> Self {
        Self
    }
}

impl AnteDecorator for ValidateBasicDecorator {
    fn name(&self) -> &'static str {
        "ValidateBasic"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        if ctx.is_recheck() {
            return next.run(ctx, tx, simulate);
        }

        if tx.gas_limit() > MAX_GAS_WANTED {
            return Err(AnteError::invalid_request(format!(
                "invalid gas supplied; {} > {}",
                tx.gas_limit(),
                MAX_GAS_WANTED
            )));
        }

        if tx.signatures.is_empty() {
            return Err(AnteError::NoSignatures("no signatures supplied".to_string()));
        }

        let signers = tx.signers();
        if tx.signatures.len() != signers.len() {
            return Err(AnteError::unauthorized(format!(
                "wrong number of signers; expected {}, got {}",
                signers.len(),
                tx.signatures.len()
            )));
        }

        next.run(ctx, tx, simulate)
    }
}

/// Rejects a tx once the chain is past its timeout height.
#[derive(Debug, Default, Clone, Copy)]
pub struct TxTimeoutHeightDecorator;

impl TxTimeoutHeightDecorator {
    pub fn new() -> Self {
        Self
    }
}

impl AnteDecorator for TxTimeoutHeightDecorator {
    fn name(&self) -> &'static str {
        "TxTimeoutHeight"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        let timeout = tx.timeout_height();
        if timeout > 0 && ctx.block_height() > timeout {
            return Err(AnteError::TxTimeoutHeight(format!(
                "block height: {}, timeout height: {}",
                ctx.block_height(),
                timeout
            )));
        }
        next.run(ctx, tx, simulate)
    }
}

/// Memo length limit.
pub struct ValidateMemoDecorator {
    max_characters: usize,
}

impl ValidateMemoDecorator {
    pub fn new(max_characters: usize) -> Self {
        Self { max_characters }
    }
}

impl AnteDecorator for ValidateMemoDecorator {
    fn name(&self) -> &'static str {
        "ValidateMemo"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        let length = tx.body.memo.chars().count();
        if length > self.max_characters {
            return Err(AnteError::MemoTooLarge(format!(
                "maximum number of characters is {} but received {} characters",
                self.max_characters, length
            )));
        }
        next.run(ctx, tx, simulate)
    }
}

/// Limits the number of signer keys.
pub struct ValidateSigCountDecorator {
    limit: usize,
}

impl ValidateSigCountDecorator {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl AnteDecorator for ValidateSigCountDecorator {
    fn name(&self) -> &'static str {
        "ValidateSigCount"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        let count = tx.auth_info.signer_infos.len();
        if count > self.limit {
            return Err(AnteError::TooManySignatures(format!(
                "signatures: {}, limit: {}",
                count, self.limit
            )));
        }
        next.run(ctx, tx, simulate)
    }
}
