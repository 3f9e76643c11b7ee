//! # Order-Book Message Payloads
//!
//! Decoded forms of the order-book messages that carry their own
//! good-til-block validity window. Only the fields the admission layer
//! reads are modelled; matching semantics live in the order book.

use crate::entities::Address;
use serde::{Deserialize, Serialize};

/// Type URL of a place-order message.
pub const MSG_PLACE_ORDER: &str = "/dydxprotocol.clob.MsgPlaceOrder";
/// Type URL of a cancel-order message.
pub const MSG_CANCEL_ORDER: &str = "/dydxprotocol.clob.MsgCancelOrder";
/// Type URL of a batch-cancel message.
pub const MSG_BATCH_CANCEL: &str = "/dydxprotocol.clob.MsgBatchCancel";

/// Order flag for short-term orders (valid within a narrow block window).
pub const ORDER_FLAGS_SHORT_TERM: u32 = 0;
/// Order flag for conditional orders.
pub const ORDER_FLAGS_CONDITIONAL: u32 = 32;
/// Order flag for long-term orders.
pub const ORDER_FLAGS_LONG_TERM: u32 = 64;
/// Order flag for TWAP parent orders.
pub const ORDER_FLAGS_TWAP: u32 = 128;

/// Identifies a subaccount of an owner address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubaccountId {
    pub owner: Address,
    pub number: u32,
}

/// Unique identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId {
    pub subaccount_id: SubaccountId,
    pub client_id: u32,
    pub order_flags: u32,
    pub clob_pair_id: u32,
}

impl OrderId {
    /// Short-term orders live only in memory and expire by good-til-block.
    pub fn is_short_term(&self) -> bool {
        self.order_flags == ORDER_FLAGS_SHORT_TERM
    }

    pub fn is_long_term(&self) -> bool {
        self.order_flags == ORDER_FLAGS_LONG_TERM
    }

    pub fn is_conditional(&self) -> bool {
        self.order_flags == ORDER_FLAGS_CONDITIONAL
    }

    pub fn is_twap(&self) -> bool {
        self.order_flags == ORDER_FLAGS_TWAP
    }

    /// Anything that is not short-term is tracked in state across blocks.
    /// Unknown flag values are treated as stateful.
    pub fn is_stateful(&self) -> bool {
        !self.is_short_term()
    }
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// Expiration of an order or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoodTil {
    /// Valid up to and including this block height.
    Block(u32),
    /// Valid until this unix timestamp (seconds). Stateful orders only.
    BlockTime(u32),
}

/// An order as submitted by a trader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub quantums: u64,
    pub subticks: u64,
    pub good_til: GoodTil,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgPlaceOrder {
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCancelOrder {
    pub order_id: OrderId,
    pub good_til: GoodTil,
}

/// Client ids to cancel on one clob pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBatch {
    pub clob_pair_id: u32,
    pub client_ids: Vec<u32>,
}

/// Cancels many short-term orders of one subaccount at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBatchCancel {
    pub subaccount_id: SubaccountId,
    pub short_term_cancels: Vec<OrderBatch>,
    pub good_til_block: u32,
}
