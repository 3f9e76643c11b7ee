//! Skips a wrapped decorator for proposer-injected transactions.
//!
//! App-injected transactions carry no signer, signature or sequence, so
//! any decorator that assumes one would reject them. Wrapping lets the
//! stock signature decorators run unchanged for every other transaction.

use super::{AnteDecorator, Context, Next};
use crate::domain::{AnteError, MsgRegistry};
use shared_types::Tx;
use std::sync::Arc;

pub struct SkipForAppInjected<D> {
    inner: D,
    registry: Arc<MsgRegistry>,
}

impl<D: AnteDecorator> SkipForAppInjected<D> {
    pub fn new(inner: D, registry: Arc<MsgRegistry>) -> Self {
        Self { inner, registry }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: AnteDecorator> AnteDecorator for SkipForAppInjected<D> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        if self.registry.is_single_app_injected(tx.msgs()) {
            return next.run(ctx, tx, simulate);
        }
        self.inner.handle(ctx, tx, simulate, next)
    }
}
