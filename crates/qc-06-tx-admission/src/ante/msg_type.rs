//! Message-type admission rules.

use super::{AnteDecorator, Context, Next};
use crate::domain::{AnteError, ExecutionMode, MsgCategory, MsgRegistry};
use shared_types::{address_to_hex, Msg, Tx};
use std::sync::Arc;

fn classify(registry: &MsgRegistry, msg: &Msg) -> Result<MsgCategory, AnteError> {
    registry
        .classify_msg(msg)
        .ok_or_else(|| AnteError::TxDecode(format!("unable to resolve type URL {}", msg.type_url)))
}

/// Order-book messages must carry the matching payload and be signed by
/// exactly the subaccount owner they act for.
pub fn validate_msg_payload(msg: &Msg) -> Result<(), AnteError> {
    if msg.has_mismatched_clob_payload() {
        return Err(AnteError::invalid_request(format!(
            "msg type {} does not match its payload",
            msg.type_url
        )));
    }
    if let Some(owner) = msg.payload_owner() {
        if msg.signers != [owner] {
            return Err(AnteError::invalid_request(format!(
                "msg {} must be signed by subaccount owner {} only",
                msg.type_url,
                address_to_hex(&owner)
            )));
        }
    }
    Ok(())
}

/// Checks the inner messages of a container message.
///
/// Internal messages are allowed inside a container; that is how
/// governance carries privileged messages. Nesting is one level deep.
pub fn validate_nested_msg(registry: &MsgRegistry, msg: &Msg) -> Result<(), AnteError> {
    let inner = msg.inner_msgs().ok_or_else(|| {
        AnteError::TxDecode(format!("nested msg {} carries no inner msgs", msg.type_url))
    })?;

    for inner_msg in inner {
        let category = classify(registry, inner_msg)?;
        validate_msg_payload(inner_msg)?;
        match category {
            MsgCategory::Unsupported => {
                return Err(AnteError::invalid_request(
                    "invalid nested msg: unsupported msg type",
                ))
            }
            MsgCategory::AppInjected => {
                return Err(AnteError::invalid_request(
                    "invalid nested msg: app-injected msg type",
                ))
            }
            MsgCategory::Nested => {
                return Err(AnteError::invalid_request(
                    "invalid nested msg: double-nested msg type",
                ))
            }
            MsgCategory::Internal | MsgCategory::Normal => {}
        }
    }
    Ok(())
}

/// Rejects transactions whose message mix may not enter a block.
///
/// Skipped on ReCheckTx: shape was already checked on first admission.
pub struct ValidateMsgTypeDecorator {
    registry: Arc<MsgRegistry>,
}

impl ValidateMsgTypeDecorator {
    pub fn new(registry: Arc<MsgRegistry>) -> Self {
        Self { registry }
    }
}

impl AnteDecorator for ValidateMsgTypeDecorator {
    fn name(&self) -> &'static str {
        "ValidateMsgType"
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

        let msgs = tx.msgs();
        if msgs.is_empty() {
            return Err(AnteError::invalid_request("msgs cannot be empty"));
        }

        // Categories are disjoint, so each message hits exactly one arm.
        let mut contains_app_injected = false;
        for msg in msgs {
            let category = classify(&self.registry, msg)?;
            validate_msg_payload(msg)?;
            match category {
                MsgCategory::AppInjected => contains_app_injected = true,
                MsgCategory::Internal => {
                    return Err(AnteError::invalid_request(
                        "internal msg cannot be submitted externally",
                    ))
                }
                MsgCategory::Nested => validate_nested_msg(&self.registry, msg)?,
                MsgCategory::Unsupported => {
                    return Err(AnteError::invalid_request("unsupported msg"))
                }
                MsgCategory::Normal => {}
            }
        }

        if contains_app_injected && msgs.len() > 1 {
            return Err(AnteError::invalid_request(
                "app-injected msg must be the only msg in a tx",
            ));
        }

        if contains_app_injected && ctx.mode() != ExecutionMode::DeliverTx {
            return Err(AnteError::invalid_request(
                "app-injected msg must only be included in DeliverTx",
            ));
        }

        next.run(ctx, tx, simulate)
    }
}
