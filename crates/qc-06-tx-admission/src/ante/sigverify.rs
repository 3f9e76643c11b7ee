//! Signer decorators: public key registration, signature gas, replay
//! guard with signature verification, and sequence increment.
//!
//! `SigVerificationDecorator` and `IncrementSequenceDecorator` must agree
//! on whether a transaction is in sequence or good-til-block mode. Both
//! call [`replay_mode`] and nothing else.

use super::{AnteDecorator, Context, Next};
use crate::domain::{
    check_timeout_height_exclusivity, is_timestamp_nonce, AnteError, MsgRegistry, ReplayMode,
};
use crate::ports::{
    AccountStore, ClobClassifier, KvStore, MetricsSink, NonceProcessor, SignatureVerifier,
    SignerData,
};
use shared_types::{address_to_hex, Address, BaseAccount, Tx};
use std::sync::Arc;
use tracing::trace;

/// The replay mode for `tx`.
pub fn replay_mode(clob: &dyn ClobClassifier, tx: &Tx) -> ReplayMode {
    ReplayMode::for_msgs(tx.msgs(), |order_id| clob.is_stateful_order(order_id))
}

fn load_signer(
    accounts: &dyn AccountStore,
    store: &dyn KvStore,
    address: &Address,
) -> Result<BaseAccount, AnteError> {
    accounts.get_account(store, address)?.ok_or_else(|| {
        AnteError::UnknownAddress(format!("account {} does not exist", address_to_hex(address)))
    })
}

/// Stores a signer's public key on first use.
pub struct SetPubKeyDecorator {
    accounts: Arc<dyn AccountStore>,
}

impl SetPubKeyDecorator {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }
}

impl AnteDecorator for SetPubKeyDecorator {
    fn name(&self) -> &'static str {
        "SetPubKey"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        let signers = tx.signers();
        let infos = &tx.auth_info.signer_infos;
        if infos.len() != signers.len() {
            return Err(AnteError::InvalidPubKey(format!(
                "invalid number of pubkeys; expected {}, got {}",
                signers.len(),
                infos.len()
            )));
        }

        for (i, (signer, info)) in signers.iter().zip(infos).enumerate() {
            let Some(pub_key) = info.public_key else {
                continue;
            };

            if pub_key.address() != *signer {
                if simulate {
                    continue;
                }
                return Err(AnteError::InvalidPubKey(format!(
                    "pubKey does not match signer address {} with signer index: {}",
                    address_to_hex(signer),
                    i
                )));
            }

            let mut account = load_signer(self.accounts.as_ref(), &*ctx.store, signer)?;
            if account.pub_key.is_some() {
                continue;
            }
            account.pub_key = Some(pub_key);
            self.accounts.set_account(&mut *ctx.store, &account)?;
        }

        next.run(ctx, tx, simulate)
    }
}

/// Charges the verification cost of each signature.
pub struct SigGasConsumeDecorator {
    accounts: Arc<dyn AccountStore>,
    cost_per_signature: u64,
}

impl SigGasConsumeDecorator {
    pub fn new(accounts: Arc<dyn AccountStore>, cost_per_signature: u64) -> Self {
        Self {
            accounts,
            cost_per_signature,
        }
    }
}

impl AnteDecorator for SigGasConsumeDecorator {
    fn name(&self) -> &'static str {
        "SigGasConsume"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        for signer in tx.signers() {
            let account = load_signer(self.accounts.as_ref(), &*ctx.store, &signer)?;
            if account.pub_key.is_none() && !simulate {
                return Err(AnteError::InvalidPubKey(
                    "pubkey on account is not set".to_string(),
                ));
            }
            ctx.consume_gas(self.cost_per_signature, "ante verify: secp256k1")?;
        }
        next.run(ctx, tx, simulate)
    }
}

/// Replay guard and signature check.
///
/// Per signer, in order:
/// 1. sequence mode: a timestamp nonce goes to the `NonceProcessor`, any
///    other value must equal the account sequence;
///    good-til-block mode: nothing;
/// 2. outside simulation and ReCheckTx: the signature must verify.
pub struct SigVerificationDecorator {
    registry: Arc<MsgRegistry>,
    accounts: Arc<dyn AccountStore>,
    nonces: Arc<dyn NonceProcessor>,
    verifier: Arc<dyn SignatureVerifier>,
    clob: Arc<dyn ClobClassifier>,
    metrics: Arc<dyn MetricsSink>,
}

impl SigVerificationDecorator {
    pub fn new(
        registry: Arc<MsgRegistry>,
        accounts: Arc<dyn AccountStore>,
        nonces: Arc<dyn NonceProcessor>,
        verifier: Arc<dyn SignatureVerifier>,
        clob: Arc<dyn ClobClassifier>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            registry,
            accounts,
            nonces,
            verifier,
            clob,
            metrics,
        }
    }
}

impl AnteDecorator for SigVerificationDecorator {
    fn name(&self) -> &'static str {
        "SigVerification"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        let mode = replay_mode(self.clob.as_ref(), tx);
        check_timeout_height_exclusivity(mode, tx.timeout_height())?;
        trace!("[Admission] Replay mode: {}", mode.as_str());

        let signers = tx.signers();
        let signatures = &tx.signatures;
        if signatures.len() != signers.len() {
            return Err(AnteError::unauthorized(format!(
                "invalid number of signer; expected: {}, got {}",
                signers.len(),
                signatures.len()
            )));
        }
        let infos = &tx.auth_info.signer_infos;
        if infos.len() != signers.len() {
            return Err(AnteError::unauthorized(format!(
                "invalid number of signer infos; expected: {}, got {}",
                signers.len(),
                infos.len()
            )));
        }

        let msg_type = self.registry.first_msg_label(tx.msgs());
        for ((signer, info), signature) in signers.iter().zip(infos).zip(signatures) {
            let account = load_signer(self.accounts.as_ref(), &*ctx.store, signer)?;
            if account.pub_key.is_none() && !simulate {
                return Err(AnteError::InvalidPubKey(
                    "pubkey on account is not set".to_string(),
                ));
            }

            if !mode.skips_sequence() {
                if is_timestamp_nonce(info.sequence) {
                    let block_time_ms = ctx.block_time_ms();
                    if let Err(err) = self.nonces.process_timestamp_nonce(
                        &mut *ctx.store,
                        block_time_ms,
                        signer,
                        info.sequence,
                    ) {
                        self.metrics.timestamp_nonce_invalid(msg_type);
                        return Err(AnteError::wrong_sequence(err.to_string()));
                    }
                } else if info.sequence != account.sequence {
                    self.metrics.sequence_invalid(msg_type);
                    return Err(AnteError::wrong_sequence(format!(
                        "account sequence mismatch, expected {}, got {}",
                        account.sequence, info.sequence
                    )));
                }
            }

            if simulate || ctx.is_recheck() {
                continue;
            }

            let Some(pub_key) = account.pub_key else {
                continue;
            };
            let sign_bytes = tx
                .sign_bytes(ctx.chain_id(), account.account_number)
                .map_err(|e| AnteError::TxDecode(e.to_string()))?;
            let signer_data = SignerData {
                address: *signer,
                chain_id: ctx.chain_id().to_string(),
                account_number: account.account_number,
                sequence: info.sequence,
            };
            if let Err(err) = self
                .verifier
                .verify(&pub_key, &signer_data, signature, &sign_bytes)
            {
                return Err(AnteError::unauthorized(format!(
                    "signature verification failed; please verify account number ({}), sequence ({}) and chain-id ({}): {}",
                    signer_data.account_number, signer_data.sequence, signer_data.chain_id, err
                )));
            }
        }

        next.run(ctx, tx, simulate)
    }
}

/// Advances each signer's sequence after a sequence-mode transaction.
///
/// Good-til-block transactions and timestamp-nonce signers leave the
/// counter untouched.
pub struct IncrementSequenceDecorator {
    accounts: Arc<dyn AccountStore>,
    clob: Arc<dyn ClobClassifier>,
}

impl IncrementSequenceDecorator {
    pub fn new(accounts: Arc<dyn AccountStore>, clob: Arc<dyn ClobClassifier>) -> Self {
        Self { accounts, clob }
    }
}

impl AnteDecorator for IncrementSequenceDecorator {
    fn name(&self) -> &'static str {
        "IncrementSequence"
    }

    fn handle(
        &self,
        ctx: &mut Context<'_>,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<(), AnteError> {
        if replay_mode(self.clob.as_ref(), tx).skips_sequence() {
            return next.run(ctx, tx, simulate);
        }

        for (signer, info) in tx.signers().iter().zip(&tx.auth_info.signer_infos) {
            if is_timestamp_nonce(info.sequence) {
                continue;
            }
            let mut account = load_signer(self.accounts.as_ref(), &*ctx.store, signer)?;
            account.sequence = account.sequence.checked_add(1).ok_or_else(|| {
                AnteError::Internal(format!(
                    "sequence overflow for account {}",
                    address_to_hex(signer)
                ))
            })?;
            self.accounts.set_account(&mut *ctx.store, &account)?;
        }

        next.run(ctx, tx, simulate)
    }
}
