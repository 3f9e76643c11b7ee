//! # Decoded Transactions
//!
//! The transaction model handed to admission after decoding:
//!
//! | Part | Contents |
//! |------|----------|
//! | `TxBody` | ordered messages, memo, optional timeout height |
//! | `AuthInfo` | one `SignerInfo` per signer, fee and gas limit |
//! | `signatures` | one signature per signer, same order as `signers()` |
//!
//! Messages are addressed by type URL. Container messages (governance
//! proposals, authz exec, delayed messages) carry their inner messages in
//! `MsgPayload::Nested`.

use crate::clob::{MsgBatchCancel, MsgCancelOrder, MsgPlaceOrder, MSG_BATCH_CANCEL, MSG_CANCEL_ORDER, MSG_PLACE_ORDER};
use crate::entities::{Address, Hash, PublicKey};
use crate::errors::TxEncodeError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Decoded payload of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MsgPayload {
    /// Message contents the admission layer does not inspect.
    Opaque(Vec<u8>),
    PlaceOrder(MsgPlaceOrder),
    CancelOrder(MsgCancelOrder),
    BatchCancel(MsgBatchCancel),
    /// Inner messages of a container message.
    Nested(Vec<Msg>),
}

/// A single message inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msg {
    /// Fully-qualified type URL, e.g. `/cosmos.bank.v1beta1.MsgSend`.
    pub type_url: String,
    /// Addresses that must sign for this message. Empty for
    /// proposer-injected messages.
    pub signers: Vec<Address>,
    pub payload: MsgPayload,
}

impl Msg {
    pub fn new(type_url: impl Into<String>, signers: Vec<Address>, payload: MsgPayload) -> Self {
        Self {
            type_url: type_url.into(),
            signers,
            payload,
        }
    }

    /// A message with an uninspected payload signed by `signer`.
    pub fn opaque(type_url: impl Into<String>, signer: Address) -> Self {
        Self::new(type_url, vec![signer], MsgPayload::Opaque(Vec::new()))
    }

    /// A message with no signers, as injected by the block proposer.
    pub fn unsigned(type_url: impl Into<String>) -> Self {
        Self::new(type_url, Vec::new(), MsgPayload::Opaque(Vec::new()))
    }

    /// A container message wrapping `inner`.
    pub fn nested(type_url: impl Into<String>, signer: Address, inner: Vec<Msg>) -> Self {
        Self::new(type_url, vec![signer], MsgPayload::Nested(inner))
    }

    pub fn place_order(msg: MsgPlaceOrder) -> Self {
        let signer = msg.order.order_id.subaccount_id.owner;
        Self::new(MSG_PLACE_ORDER, vec![signer], MsgPayload::PlaceOrder(msg))
    }

    pub fn cancel_order(msg: MsgCancelOrder) -> Self {
        let signer = msg.order_id.subaccount_id.owner;
        Self::new(MSG_CANCEL_ORDER, vec![signer], MsgPayload::CancelOrder(msg))
    }

    pub fn batch_cancel(msg: MsgBatchCancel) -> Self {
        let signer = msg.subaccount_id.owner;
        Self::new(MSG_BATCH_CANCEL, vec![signer], MsgPayload::BatchCancel(msg))
    }

    /// Whether this places, cancels or batch-cancels orders. The payload
    /// and the type URL must agree.
    pub fn is_clob_msg(&self) -> bool {
        matches!(
            (&self.payload, self.type_url.as_str()),
            (MsgPayload::PlaceOrder(_), MSG_PLACE_ORDER)
                | (MsgPayload::CancelOrder(_), MSG_CANCEL_ORDER)
                | (MsgPayload::BatchCancel(_), MSG_BATCH_CANCEL)
        )
    }

    /// Whether exactly one of type URL and payload names an order-book
    /// message.
    pub fn has_mismatched_clob_payload(&self) -> bool {
        let clob_url = matches!(
            self.type_url.as_str(),
            MSG_PLACE_ORDER | MSG_CANCEL_ORDER | MSG_BATCH_CANCEL
        );
        let clob_payload = matches!(
            self.payload,
            MsgPayload::PlaceOrder(_) | MsgPayload::CancelOrder(_) | MsgPayload::BatchCancel(_)
        );
        (clob_url || clob_payload) && !self.is_clob_msg()
    }

    /// Subaccount owner named by an order-book payload. The owner is the
    /// only address allowed to sign for it.
    pub fn payload_owner(&self) -> Option<Address> {
        match &self.payload {
            MsgPayload::PlaceOrder(m) => Some(m.order.order_id.subaccount_id.owner),
            MsgPayload::CancelOrder(m) => Some(m.order_id.subaccount_id.owner),
            MsgPayload::BatchCancel(m) => Some(m.subaccount_id.owner),
            MsgPayload::Opaque(_) | MsgPayload::Nested(_) => None,
        }
    }

    /// Inner messages if this is a container message.
    pub fn inner_msgs(&self) -> Option<&[Msg]> {
        match &self.payload {
            MsgPayload::Nested(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Fee paid by the transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Amount in the base fee denomination.
    pub amount: u128,
    pub gas_limit: u64,
    /// Optional explicit payer. Defaults to the first signer.
    pub payer: Option<Address>,
}

/// Per-signer authentication data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerInfo {
    /// Public key, required only when the account has none yet.
    pub public_key: Option<PublicKey>,
    /// Sequence value or timestamp nonce.
    pub sequence: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub signer_infos: Vec<SignerInfo>,
    pub fee: Fee,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBody {
    pub messages: Vec<Msg>,
    pub memo: String,
    /// Last block height at which the tx may be included; 0 means none.
    pub timeout_height: u64,
}

/// A decoded transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    pub body: TxBody,
    pub auth_info: AuthInfo,
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Serialize)]
struct SignDoc<'a> {
    body: &'a TxBody,
    auth_info: &'a AuthInfo,
    chain_id: &'a str,
    account_number: u64,
}

impl Tx {
    /// A transaction carrying `messages` with no signer data yet.
    pub fn new(messages: Vec<Msg>) -> Self {
        Self {
            body: TxBody {
                messages,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn msgs(&self) -> &[Msg] {
        &self.body.messages
    }

    pub fn gas_limit(&self) -> u64 {
        self.auth_info.fee.gas_limit
    }

    pub fn timeout_height(&self) -> u64 {
        self.body.timeout_height
    }

    /// Required signers in first-appearance order, followed by the fee
    /// payer if it is set and not already a signer.
    pub fn signers(&self) -> Vec<Address> {
        let mut out: Vec<Address> = Vec::new();
        for msg in &self.body.messages {
            for signer in &msg.signers {
                if !out.contains(signer) {
                    out.push(*signer);
                }
            }
        }
        if let Some(payer) = self.auth_info.fee.payer {
            if !out.contains(&payer) {
                out.push(payer);
            }
        }
        out
    }

    /// Address charged for fees.
    pub fn fee_payer(&self) -> Option<Address> {
        self.auth_info
            .fee
            .payer
            .or_else(|| self.signers().first().copied())
    }

    /// Bytes each signer signs. The account number binds the signature to
    /// one account; the chain id binds it to one network.
    pub fn sign_bytes(&self, chain_id: &str, account_number: u64) -> Result<Vec<u8>, TxEncodeError> {
        let doc = SignDoc {
            body: &self.body,
            auth_info: &self.auth_info,
            chain_id,
            account_number,
        };
        bincode::serialize(&doc).map_err(|e| TxEncodeError::Encode(e.to_string()))
    }

    pub fn encode(&self) -> Result<Vec<u8>, TxEncodeError> {
        bincode::serialize(self).map_err(|e| TxEncodeError::Encode(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, TxEncodeError> {
        bincode::deserialize(bytes).map_err(|e| TxEncodeError::Decode(e.to_string()))
    }

    /// Size of the encoded transaction in bytes.
    pub fn encoded_len(&self) -> Result<u64, TxEncodeError> {
        bincode::serialized_size(self).map_err(|e| TxEncodeError::Encode(e.to_string()))
    }

    pub fn hash(&self) -> Result<Hash, TxEncodeError> {
        let bytes = self.encode()?;
        Ok(Sha256::digest(&bytes).into())
    }
}
