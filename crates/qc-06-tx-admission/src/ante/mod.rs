//! # Ante Chain
//!
//! An ordered list of decorators run before a transaction's messages
//! execute. Each decorator gets the remainder of the chain as `next` and
//! either calls `next.run(..)` to continue or returns to stop. An error
//! stops the chain immediately.
//!
//! ```text
//! AnteChain::ante_handle
//!   └─ d0.handle(ctx, tx, simulate, next = [d1, d2, ..])
//!        └─ d1.handle(ctx, tx, simulate, next = [d2, ..])
//!             └─ ...
//!                  └─ Next::run on empty list -> Ok(())
//! ```
//!
//! Decorators hold only immutable configuration and shared collaborators,
//! so one chain can serve any number of concurrent transactions.

pub mod basic;
pub mod bypass;
pub mod context;
pub mod gas;
pub mod msg_type;
pub mod sigverify;

pub use basic::{
    TxTimeoutHeightDecorator, ValidateBasicDecorator, ValidateMemoDecorator,
    ValidateSigCountDecorator,
};
pub use bypass::SkipForAppInjected;
pub use context::Context;
pub use gas::{ConsumeTxSizeGasDecorator, FreeInfiniteGasDecorator, SetUpContextDecorator};
pub use msg_type::{validate_msg_payload, validate_nested_msg, ValidateMsgTypeDecorator};
pub use sigverify::{
    replay_mode, IncrementSequenceDecorator, SetPubKeyDecorator, SigGasConsumeDecorator,
    SigVerificationDecorator,
};

use crate::domain::AnteError;
use crate::ports::AnteHandler;
use shared_types::Tx;

/// One step of the ante chain.
pub trait AnteDecorator: Send + Sync {
    /// Name for logs and chain introspection.
    fn name(&self) -> &'static str;

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError>;
}

/// The decorators after the current one.
#[derive(Clone, Copy)]
pub struct Next<'c> {
    rest: &'c [Box<dyn AnteDecorator>],
}

impl<'c> Next<'c> {
    /// A continuation that ends the chain.
    pub fn terminal() -> Next<'static> {
        Next { rest: &[] }
    }

    pub fn run(self, ctx: &mut Context<'_>, tx: &Tx, simulate: bool) -> Result<(), AnteError> {
        match self.rest.split_first() {
            Some((head, tail)) => head.handle(ctx, tx, simulate, Next { rest: tail }),
            None => Ok(()),
        }
    }

    /// Number of decorators still to run.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}

/// A composed, immutable decorator chain.
pub struct AnteChain {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

impl AnteChain {
    pub fn builder() -> AnteChainBuilder {
        AnteChainBuilder::default()
    }

    /// Decorator names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.decorators.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }
}

impl AnteHandler for AnteChain {
    fn ante_handle(&self, ctx: &mut Context<'_>, tx: &Tx, simulate: bool) -> Result<(), AnteError> {
        Next {
            rest: &self.decorators,
        }
        .run(ctx, tx, simulate)
    }
}

/// Wires decorators into an `AnteChain` in the order they are added.
#[derive(Default)]
pub struct AnteChainBuilder {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

impl AnteChainBuilder {
    pub fn then<D>(mut self, decorator: D) -> Self
    where
        D: AnteDecorator + 'static,
    {
        self.decorators.push(Box::new(decorator));
        self
    }

    pub fn then_boxed(mut self, decorator: Box<dyn AnteDecorator>) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn build(self) -> AnteChain {
        AnteChain {
            decorators: self.decorators,
        }
    }
}
