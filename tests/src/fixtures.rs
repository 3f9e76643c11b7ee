//! Shared fixtures: a single-node admission harness, signing accounts and
//! message builders.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};
use qc_06_tx_admission::adapters::{AccountKeeper, MemoryStore};
use qc_06_tx_admission::ports::AccountStore;
use qc_06_tx_admission::{
    AdmissionConfig, AnteError, AnteOutcome, BlockHeader, TxAdmissionApi, TxAdmissionService,
};
use sha2::{Digest, Sha256};
use shared_types::{
    Address, BaseAccount, GoodTil, Msg, MsgBatchCancel, MsgCancelOrder, MsgPlaceOrder, Order,
    OrderBatch, OrderId, PublicKey, Side, SignerInfo, SubaccountId, Tx, ORDER_FLAGS_LONG_TERM,
    ORDER_FLAGS_SHORT_TERM, PUBLIC_KEY_LENGTH,
};

pub const CHAIN_ID: &str = "qc-testnet-1";
pub const GENESIS_TIME_MS: u64 = 1_700_000_000_000;
pub const BLOCK_TIME_MS: u64 = 1_000;
pub const GAS_LIMIT: u64 = 500_000;

pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_CREATE_TRANSFER: &str = "/dydxprotocol.sending.MsgCreateTransfer";
pub const MSG_EXEC: &str = "/cosmos.authz.v1beta1.MsgExec";
pub const MSG_SUBMIT_PROPOSAL: &str = "/cosmos.gov.v1.MsgSubmitProposal";
pub const MSG_SOFTWARE_UPGRADE: &str = "/cosmos.upgrade.v1beta1.MsgSoftwareUpgrade";
pub const MSG_PROPOSED_OPERATIONS: &str = "/dydxprotocol.clob.MsgProposedOperations";
pub const MSG_UPDATE_MARKET_PRICES: &str = "/dydxprotocol.prices.MsgUpdateMarketPrices";

/// A secp256k1 key and the address it controls.
pub struct TestAccount {
    pub signing_key: SigningKey,
    pub pub_key: PublicKey,
    pub address: Address,
}

impl TestAccount {
    /// Deterministic account from a non-zero seed.
    pub fn from_seed(seed: u8) -> Self {
        Self::from_key(SigningKey::from_slice(&[seed; 32]).expect("valid seed"))
    }

    pub fn random() -> Self {
        Self::from_key(SigningKey::random(&mut rand::thread_rng()))
    }

    fn from_key(signing_key: SigningKey) -> Self {
        let sec1 = signing_key.verifying_key().to_sec1_bytes();
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes.copy_from_slice(&sec1[..PUBLIC_KEY_LENGTH]);
        let pub_key = PublicKey(bytes);
        Self {
            signing_key,
            address: pub_key.address(),
            pub_key,
        }
    }

    pub fn sign(&self, sign_bytes: &[u8]) -> Vec<u8> {
        let digest = Sha256::digest(sign_bytes);
        let signature: Signature = self.signing_key.sign_prehash(&digest).expect("signing");
        signature.to_bytes().to_vec()
    }

    /// Fills signer infos and the signature for a tx signed only by this
    /// account.
    pub fn sign_tx(&self, tx: &mut Tx, account_number: u64, sequence: u64, chain_id: &str) {
        tx.auth_info.signer_infos = vec![SignerInfo {
            public_key: Some(self.pub_key),
            sequence,
        }];
        let sign_bytes = tx
            .sign_bytes(chain_id, account_number)
            .expect("sign bytes");
        tx.signatures = vec![self.sign(&sign_bytes)];
    }
}

/// Single-node harness: one admission service over one in-memory store.
pub struct TestChain {
    pub service: TxAdmissionService,
    pub store: MemoryStore,
    pub height: u64,
    pub time_ms: u64,
    accounts: AccountKeeper,
}

impl Default for TestChain {
    fn default() -> Self {
        Self::new()
    }
}

impl TestChain {
    pub fn new() -> Self {
        Self::with_config(AdmissionConfig::default())
    }

    pub fn with_config(config: AdmissionConfig) -> Self {
        Self {
            service: TxAdmissionService::new(config).expect("standard registry"),
            store: MemoryStore::new(),
            height: 1,
            time_ms: GENESIS_TIME_MS,
            accounts: AccountKeeper::new(),
        }
    }

    pub fn header(&self) -> BlockHeader {
        BlockHeader::new(CHAIN_ID, self.height, self.time_ms)
    }

    /// Moves the chain forward `blocks` blocks.
    pub fn advance(&mut self, blocks: u64) {
        self.height += blocks;
        self.time_ms += blocks * BLOCK_TIME_MS;
    }

    /// Creates the on-chain account for `account`.
    pub fn create_account(&mut self, account: &TestAccount) -> BaseAccount {
        self.accounts
            .new_account(&mut self.store, account.address)
            .expect("account creation")
    }

    pub fn account(&self, address: &Address) -> Option<BaseAccount> {
        self.accounts
            .get_account(&self.store, address)
            .expect("account decode")
    }

    pub fn sequence(&self, address: &Address) -> u64 {
        self.account(address).map(|a| a.sequence).unwrap_or_default()
    }

    /// Fills signer infos and signatures for a single-signer tx.
    pub fn sign(&self, tx: &mut Tx, signer: &TestAccount, sequence: u64) {
        self.sign_with_chain_id(tx, signer, sequence, CHAIN_ID);
    }

    pub fn sign_with_chain_id(
        &self,
        tx: &mut Tx,
        signer: &TestAccount,
        sequence: u64,
        chain_id: &str,
    ) {
        let account_number = self
            .account(&signer.address)
            .map(|a| a.account_number)
            .unwrap_or_default();
        signer.sign_tx(tx, account_number, sequence, chain_id);
    }

    /// A signed tx carrying `msgs`.
    pub fn signed_tx(&self, msgs: Vec<Msg>, signer: &TestAccount, sequence: u64) -> Tx {
        let mut tx = Tx::new(msgs);
        tx.auth_info.fee.gas_limit = GAS_LIMIT;
        self.sign(&mut tx, signer, sequence);
        tx
    }

    pub fn check(&mut self, tx: &Tx) -> Result<AnteOutcome, AnteError> {
        let header = self.header();
        self.service.check_tx(&mut self.store, &header, tx)
    }

    pub fn recheck(&mut self, tx: &Tx) -> Result<AnteOutcome, AnteError> {
        let header = self.header();
        self.service.recheck_tx(&mut self.store, &header, tx)
    }

    pub fn deliver(&mut self, tx: &Tx) -> Result<AnteOutcome, AnteError> {
        let header = self.header();
        self.service.deliver_tx(&mut self.store, &header, tx)
    }

    pub fn simulate(&mut self, tx: &Tx) -> Result<AnteOutcome, AnteError> {
        let header = self.header();
        self.service.simulate_tx(&mut self.store, &header, tx)
    }
}

fn order_id(owner: Address, client_id: u32, order_flags: u32) -> OrderId {
    OrderId {
        subaccount_id: SubaccountId { owner, number: 0 },
        client_id,
        order_flags,
        clob_pair_id: 0,
    }
}

pub fn short_term_order(owner: Address, client_id: u32, good_til_block: u32) -> Msg {
    Msg::place_order(MsgPlaceOrder {
        order: Order {
            order_id: order_id(owner, client_id, ORDER_FLAGS_SHORT_TERM),
            side: Side::Buy,
            quantums: 1_000,
            subticks: 50_000,
            good_til: GoodTil::Block(good_til_block),
        },
    })
}

pub fn long_term_order(owner: Address, client_id: u32, good_til_time: u32) -> Msg {
    Msg::place_order(MsgPlaceOrder {
        order: Order {
            order_id: order_id(owner, client_id, ORDER_FLAGS_LONG_TERM),
            side: Side::Sell,
            quantums: 1_000,
            subticks: 50_000,
            good_til: GoodTil::BlockTime(good_til_time),
        },
    })
}

pub fn short_term_cancel(owner: Address, client_id: u32, good_til_block: u32) -> Msg {
    Msg::cancel_order(MsgCancelOrder {
        order_id: order_id(owner, client_id, ORDER_FLAGS_SHORT_TERM),
        good_til: GoodTil::Block(good_til_block),
    })
}

pub fn batch_cancel(owner: Address, client_ids: Vec<u32>, good_til_block: u32) -> Msg {
    Msg::batch_cancel(MsgBatchCancel {
        subaccount_id: SubaccountId { owner, number: 0 },
        short_term_cancels: vec![OrderBatch {
            clob_pair_id: 0,
            client_ids,
        }],
        good_til_block,
    })
}
