//! Order-book classification from message payloads and order flags.

use crate::ports::ClobClassifier;
use shared_types::{OrderId, Tx};

/// Classifies order-book transactions without consulting order state.
///
/// A transaction is an order-book transaction when it carries exactly one
/// message and that message places, cancels or batch-cancels orders.
/// Statefulness comes from the order flags; unknown flags count as
/// stateful.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFlagsClassifier;

impl OrderFlagsClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl ClobClassifier for OrderFlagsClassifier {
    fn has_clob_msg(&self, tx: &Tx) -> bool {
        match tx.msgs() {
            [msg] => msg.is_clob_msg(),
            _ => false,
        }
    }

    fn is_stateful_order(&self, order_id: &OrderId) -> bool {
        order_id.is_stateful()
    }
}
