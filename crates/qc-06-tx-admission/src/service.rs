//! # Tx Admission Service
//!
//! Application service layer that implements the `TxAdmissionApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Composes the standard decorator chain from the registry, the config
//!   and the outbound adapters
//! - Runs every transaction against a cache branch of the host store
//! - Commits the branch only for a successful, non-simulated DeliverTx
//!
//! Building with the standard adapters registers the admission collectors
//! in `quantum_telemetry::REGISTRY`; hosts serve them with
//! `quantum_telemetry::encode_metrics`. Hosts that pass their own deps own
//! their metrics sink.

use crate::adapters::{
    AccountKeeper, CacheStore, OrderFlagsClassifier, PrometheusMetrics, Secp256k1Verifier,
    TimestampNonceKeeper,
};
use crate::ante::{
    AnteChain, AnteDecorator, ConsumeTxSizeGasDecorator, Context, FreeInfiniteGasDecorator,
    IncrementSequenceDecorator, SetPubKeyDecorator, SetUpContextDecorator, SigGasConsumeDecorator,
    SigVerificationDecorator, SkipForAppInjected, TxTimeoutHeightDecorator,
    ValidateBasicDecorator, ValidateMemoDecorator, ValidateMsgTypeDecorator,
    ValidateSigCountDecorator,
};
use crate::domain::{
    AdmissionConfig, AnteError, AnteOutcome, BlockHeader, ExecutionMode, MsgCategory,
    MsgRegistry, RegistryError,
};
use crate::ports::{
    AccountStore, AnteHandler, ClobClassifier, KvStore, MetricsSink, NonceProcessor,
    SignatureVerifier, TxAdmissionApi,
};
use quantum_telemetry::register_metrics;
use shared_types::Tx;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outbound collaborators of the standard chain.
#[derive(Clone)]
pub struct TxAdmissionDeps {
    pub accounts: Arc<dyn AccountStore>,
    pub nonces: Arc<dyn NonceProcessor>,
    pub verifier: Arc<dyn SignatureVerifier>,
    pub clob: Arc<dyn ClobClassifier>,
    pub metrics: Arc<dyn MetricsSink>,
}

impl TxAdmissionDeps {
    /// Production adapters: bincode accounts, timestamp nonces, k256 and
    /// Prometheus.
    pub fn standard(config: &AdmissionConfig) -> Self {
        Self {
            accounts: Arc::new(AccountKeeper::new()),
            nonces: Arc::new(TimestampNonceKeeper::new(config.timestamp_nonce)),
            verifier: Arc::new(Secp256k1Verifier::new()),
            clob: Arc::new(OrderFlagsClassifier::new()),
            metrics: Arc::new(PrometheusMetrics::new()),
        }
    }
}

/// Builds the standard chain followed by `extra`.
pub fn standard_chain(
    registry: &Arc<MsgRegistry>,
    config: &AdmissionConfig,
    deps: &TxAdmissionDeps,
    extra: Vec<Box<dyn AnteDecorator>>,
) -> AnteChain {
    let mut builder = AnteChain::builder()
        .then(SetUpContextDecorator::new())
        .then(FreeInfiniteGasDecorator::new(
            Arc::clone(registry),
            Arc::clone(&deps.clob),
            Arc::clone(&deps.metrics),
        ))
        .then(ValidateMsgTypeDecorator::new(Arc::clone(registry)))
        .then(SkipForAppInjected::new(
            ValidateBasicDecorator::new(),
            Arc::clone(registry),
        ))
        .then(TxTimeoutHeightDecorator::new())
        .then(ValidateMemoDecorator::new(config.max_memo_characters))
        .then(ConsumeTxSizeGasDecorator::new(config.tx_size_cost_per_byte))
        .then(SkipForAppInjected::new(
            SetPubKeyDecorator::new(Arc::clone(&deps.accounts)),
            Arc::clone(registry),
        ))
        .then(ValidateSigCountDecorator::new(config.tx_sig_limit))
        .then(SkipForAppInjected::new(
            SigGasConsumeDecorator::new(
                Arc::clone(&deps.accounts),
                config.sig_verify_cost_secp256k1,
            ),
            Arc::clone(registry),
        ))
        .then(SkipForAppInjected::new(
            SigVerificationDecorator::new(
                Arc::clone(registry),
                Arc::clone(&deps.accounts),
                Arc::clone(&deps.nonces),
                Arc::clone(&deps.verifier),
                Arc::clone(&deps.clob),
                Arc::clone(&deps.metrics),
            ),
            Arc::clone(registry),
        ))
        .then(SkipForAppInjected::new(
            IncrementSequenceDecorator::new(Arc::clone(&deps.accounts), Arc::clone(&deps.clob)),
            Arc::clone(registry),
        ));

    for decorator in extra {
        builder = builder.then_boxed(decorator);
    }
    builder.build()
}

/// Tx Admission Service.
///
/// Owns the registry and the composed chain. Holds no per-transaction
/// state, so one instance serves concurrent callers.
pub struct TxAdmissionService {
    registry: Arc<MsgRegistry>,
    chain: AnteChain,
    metrics: Arc<dyn MetricsSink>,
    config: AdmissionConfig,
}

impl TxAdmissionService {
    /// Standard registry, standard adapters, no extra decorators.
    pub fn new(config: AdmissionConfig) -> Result<Self, RegistryError> {
        Self::builder(config).build()
    }

    pub fn builder(config: AdmissionConfig) -> TxAdmissionServiceBuilder {
        TxAdmissionServiceBuilder {
            config,
            deps: None,
            registry: None,
            extra: Vec::new(),
        }
    }

    pub fn registry(&self) -> &MsgRegistry {
        &self.registry
    }

    pub fn chain(&self) -> &AnteChain {
        &self.chain
    }

    pub fn config(&self) -> &AdmissionConfig {
        &self.config
    }

    /// Runs the chain for `tx` against a cache branch of `store`.
    pub fn run_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        mode: ExecutionMode,
        tx: &Tx,
        simulate: bool,
    ) -> Result<AnteOutcome, AnteError> {
        let _timer = self.metrics.start_timer(mode);
        let msg_type = self.registry.first_msg_label(tx.msgs());

        let mut branch = CacheStore::new(store);
        let result = {
            let mut ctx = Context::new(&mut branch, header.clone(), mode);
            self.chain
                .ante_handle(&mut ctx, tx, simulate)
                .map(|()| AnteOutcome {
                    gas_wanted: tx.gas_limit(),
                    gas_used: ctx.gas_meter().gas_consumed(),
                    gas_exempt: ctx.gas_exemption().is_some(),
                })
        };

        match result {
            Ok(outcome) => {
                if mode == ExecutionMode::DeliverTx && !simulate {
                    branch.write();
                }
                self.metrics.tx_outcome(mode, msg_type, None);
                Ok(outcome)
            }
            Err(err) => {
                debug!(
                    "[Admission] Rejected tx in {} (code {}): {}",
                    mode,
                    err.code(),
                    err
                );
                self.metrics.tx_outcome(mode, msg_type, Some(err.code()));
                Err(err)
            }
        }
    }
}

impl TxAdmissionApi for TxAdmissionService {
    fn check_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError> {
        self.run_tx(store, header, ExecutionMode::CheckTx, tx, false)
    }

    fn recheck_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError> {
        self.run_tx(store, header, ExecutionMode::ReCheckTx, tx, false)
    }

    fn deliver_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError> {
        self.run_tx(store, header, ExecutionMode::DeliverTx, tx, false)
    }

    fn simulate_tx(
        &self,
        store: &mut dyn KvStore,
        header: &BlockHeader,
        tx: &Tx,
    ) -> Result<AnteOutcome, AnteError> {
        self.run_tx(store, header, ExecutionMode::CheckTx, tx, true)
    }

    fn classify(&self, type_url: &str) -> Option<MsgCategory> {
        self.registry.classify(type_url)
    }
}

/// Assembles a `TxAdmissionService`.
pub struct TxAdmissionServiceBuilder {
    config: AdmissionConfig,
    deps: Option<TxAdmissionDeps>,
    registry: Option<MsgRegistry>,
    extra: Vec<Box<dyn AnteDecorator>>,
}

impl TxAdmissionServiceBuilder {
    /// Replaces the standard adapters.
    pub fn with_deps(mut self, deps: TxAdmissionDeps) -> Self {
        self.deps = Some(deps);
        self
    }

    /// Replaces the standard message catalogue.
    pub fn with_registry(mut self, registry: MsgRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Appends a host decorator after the standard chain.
    pub fn with_decorator<D>(mut self, decorator: D) -> Self
    where
        D: AnteDecorator + 'static,
    {
        self.extra.push(Box::new(decorator));
        self
    }

    pub fn build(self) -> Result<TxAdmissionService, RegistryError> {
        let registry = match self.registry {
            Some(registry) => registry,
            None => MsgRegistry::standard()?,
        };
        let registry = Arc::new(registry);
        let deps = match self.deps {
            Some(deps) => deps,
            None => {
                // Standard deps report to the global registry; make sure the
                // collectors are in it before the first tx.
                if let Err(err) = register_metrics() {
                    warn!("[Admission] Metrics not exported: {}", err);
                }
                TxAdmissionDeps::standard(&self.config)
            }
        };

        let chain = standard_chain(&registry, &self.config, &deps, self.extra);
        info!(
            "[Admission] Service ready: {} decorators, {} msg types",
            chain.len(),
            registry.len()
        );

        Ok(TxAdmissionService {
            registry,
            chain,
            metrics: deps.metrics,
            config: self.config,
        })
    }
}
