//! Replay protection policy.
//!
//! A transaction is protected either by account sequence numbers or, for
//! short-term order-book messages, by the good-til-block window embedded in
//! each message. The choice is made once per transaction by
//! [`ReplayMode::for_msgs`] and every decorator that cares (signature
//! verification, sequence increment, timeout-height exclusivity) reads the
//! same decision.
//!
//! Within sequence mode a signer may still supply a timestamp nonce instead
//! of a counter value; see [`is_timestamp_nonce`].

use super::config::TIMESTAMP_NONCE_SEQUENCE_CUTOFF;
use super::errors::AnteError;
use shared_types::{Msg, MsgPayload, OrderId, MSG_BATCH_CANCEL, MSG_CANCEL_ORDER, MSG_PLACE_ORDER};

/// How a transaction is protected against replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayMode {
    /// Signer sequence must match and is incremented on delivery.
    Sequence,
    /// Every message carries its own good-til-block; sequences untouched.
    GoodTilBlock,
}

impl ReplayMode {
    /// Chooses the mode for `msgs`. See [`should_skip_sequence_validation`].
    pub fn for_msgs<F>(msgs: &[Msg], is_stateful: F) -> Self
    where
        F: Fn(&OrderId) -> bool,
    {
        if should_skip_sequence_validation(msgs, is_stateful) {
            ReplayMode::GoodTilBlock
        } else {
            ReplayMode::Sequence
        }
    }

    pub fn skips_sequence(&self) -> bool {
        matches!(self, ReplayMode::GoodTilBlock)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplayMode::Sequence => "sequence",
            ReplayMode::GoodTilBlock => "good_til_block",
        }
    }
}

/// True iff every message is a short-term place, cancel or batch-cancel.
///
/// One message needing ordinary protection puts the whole transaction in
/// sequence mode. An empty list is never skipped.
pub fn should_skip_sequence_validation<F>(msgs: &[Msg], is_stateful: F) -> bool
where
    F: Fn(&OrderId) -> bool,
{
    if msgs.is_empty() {
        return false;
    }

    msgs.iter().all(|msg| match (&msg.payload, msg.type_url.as_str()) {
        (MsgPayload::PlaceOrder(place), MSG_PLACE_ORDER) => !is_stateful(&place.order.order_id),
        (MsgPayload::CancelOrder(cancel), MSG_CANCEL_ORDER) => !is_stateful(&cancel.order_id),
        // Batch cancels only ever carry short-term client ids.
        (MsgPayload::BatchCancel(_), MSG_BATCH_CANCEL) => true,
        _ => false,
    })
}

/// Whether a signer's sequence value is a timestamp nonce.
pub fn is_timestamp_nonce(sequence: u64) -> bool {
    sequence >= TIMESTAMP_NONCE_SEQUENCE_CUTOFF
}

/// Good-til-block transactions must not also set a tx-level timeout height.
pub fn check_timeout_height_exclusivity(
    mode: ReplayMode,
    timeout_height: u64,
) -> Result<(), AnteError> {
    if mode.skips_sequence() && timeout_height > 0 {
        return Err(AnteError::invalid_request(
            "a short term place order message may not have a non-zero timeout height, use goodTilBlock instead",
        ));
    }
    Ok(())
}
