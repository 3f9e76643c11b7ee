//! Message type catalogue.
//!
//! One list per category. `MsgRegistry::standard()` assembles these and
//! refuses to start if any type URL appears in two lists.

/// Inserted by the block proposer during `PrepareProposal`; never signed.
pub const APP_INJECTED_MSGS: &[&str] = &[
    "/dydxprotocol.bridge.MsgAcknowledgeBridges",
    "/dydxprotocol.clob.MsgProposedOperations",
    "/dydxprotocol.perpetuals.MsgAddPremiumVotes",
    "/dydxprotocol.prices.MsgUpdateMarketPrices",
];

/// Require the governance or module authority as signer.
pub const INTERNAL_MSGS: &[&str] = &[
    // auth
    "/cosmos.auth.v1beta1.MsgUpdateParams",
    // bank
    "/cosmos.bank.v1beta1.MsgSetSendEnabled",
    "/cosmos.bank.v1beta1.MsgUpdateParams",
    // consensus
    "/cosmos.consensus.v1.MsgUpdateParams",
    // crisis
    "/cosmos.crisis.v1beta1.MsgUpdateParams",
    // distribution
    "/cosmos.distribution.v1beta1.MsgCommunityPoolSpend",
    "/cosmos.distribution.v1beta1.MsgUpdateParams",
    // gov
    "/cosmos.gov.v1.MsgExecLegacyContent",
    "/cosmos.gov.v1.MsgUpdateParams",
    // slashing
    "/cosmos.slashing.v1beta1.MsgUpdateParams",
    // staking
    "/cosmos.staking.v1beta1.MsgUpdateParams",
    // upgrade
    "/cosmos.upgrade.v1beta1.MsgCancelUpgrade",
    "/cosmos.upgrade.v1beta1.MsgSoftwareUpgrade",
    // ibc
    "/ibc.applications.transfer.v1.MsgUpdateParams",
    "/ibc.core.client.v1.MsgUpdateParams",
    "/ibc.core.connection.v1.MsgUpdateParams",
    // affiliates
    "/dydxprotocol.affiliates.MsgUpdateAffiliateTiers",
    "/dydxprotocol.affiliates.MsgUpdateAffiliateWhitelist",
    // blocktime
    "/dydxprotocol.blocktime.MsgUpdateDowntimeParams",
    // bridge
    "/dydxprotocol.bridge.MsgCompleteBridge",
    "/dydxprotocol.bridge.MsgUpdateEventParams",
    "/dydxprotocol.bridge.MsgUpdateProposeParams",
    "/dydxprotocol.bridge.MsgUpdateSafetyParams",
    // clob
    "/dydxprotocol.clob.MsgCreateClobPair",
    "/dydxprotocol.clob.MsgUpdateBlockRateLimitConfiguration",
    "/dydxprotocol.clob.MsgUpdateClobPair",
    "/dydxprotocol.clob.MsgUpdateEquityTierLimitConfiguration",
    "/dydxprotocol.clob.MsgUpdateLiquidationsConfig",
    // feetiers
    "/dydxprotocol.feetiers.MsgUpdatePerpetualFeeParams",
    // govplus
    "/dydxprotocol.govplus.MsgSlashValidator",
    // listing
    "/dydxprotocol.listing.MsgSetMarketsHardCap",
    "/dydxprotocol.listing.MsgSetListingVaultDepositParams",
    // perpetuals
    "/dydxprotocol.perpetuals.MsgCreatePerpetual",
    "/dydxprotocol.perpetuals.MsgSetLiquidityTier",
    "/dydxprotocol.perpetuals.MsgUpdateParams",
    "/dydxprotocol.perpetuals.MsgUpdatePerpetualParams",
    // prices
    "/dydxprotocol.prices.MsgCreateOracleMarket",
    "/dydxprotocol.prices.MsgUpdateMarketParam",
    // ratelimit
    "/dydxprotocol.ratelimit.MsgSetLimitParams",
    // revshare
    "/dydxprotocol.revshare.MsgSetMarketMapperRevenueShare",
    "/dydxprotocol.revshare.MsgSetMarketMapperRevShareDetailsForMarket",
    // rewards
    "/dydxprotocol.rewards.MsgUpdateParams",
    // sending
    "/dydxprotocol.sending.MsgSendFromModuleToAccount",
    // stats
    "/dydxprotocol.stats.MsgUpdateParams",
    // vault
    "/dydxprotocol.vault.MsgUnlockShares",
    // vest
    "/dydxprotocol.vest.MsgDeleteVestEntry",
    "/dydxprotocol.vest.MsgSetVestEntry",
];

/// Containers whose payload is a list of messages run with delegated authority.
pub const NESTED_MSGS: &[&str] = &[
    "/cosmos.authz.v1beta1.MsgExec",
    "/cosmos.gov.v1.MsgSubmitProposal",
    "/dydxprotocol.delaymsg.MsgDelayMessage",
];

/// Decodable for wire compatibility only.
pub const UNSUPPORTED_MSGS: &[&str] = &[
    "/cosmos.crisis.v1beta1.MsgVerifyInvariant",
    "/cosmos.gov.v1beta1.MsgSubmitProposal",
    "/ibc.applications.interchain_accounts.controller.v1.MsgRegisterInterchainAccount",
    "/ibc.applications.interchain_accounts.controller.v1.MsgSendTx",
    "/ibc.applications.interchain_accounts.controller.v1.MsgUpdateParams",
    "/ibc.applications.interchain_accounts.host.v1.MsgUpdateParams",
    "/dydxprotocol.vault.MsgUpdateParams",
];

/// Ordinary user-submittable messages.
pub const NORMAL_MSGS: &[&str] = &[
    // authz
    "/cosmos.authz.v1beta1.MsgGrant",
    "/cosmos.authz.v1beta1.MsgRevoke",
    // bank
    "/cosmos.bank.v1beta1.MsgMultiSend",
    "/cosmos.bank.v1beta1.MsgSend",
    // distribution
    "/cosmos.distribution.v1beta1.MsgDepositValidatorRewardsPool",
    "/cosmos.distribution.v1beta1.MsgFundCommunityPool",
    "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
    "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
    "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
    // evidence
    "/cosmos.evidence.v1beta1.MsgSubmitEvidence",
    // feegrant
    "/cosmos.feegrant.v1beta1.MsgGrantAllowance",
    "/cosmos.feegrant.v1beta1.MsgPruneAllowances",
    "/cosmos.feegrant.v1beta1.MsgRevokeAllowance",
    // gov
    "/cosmos.gov.v1.MsgDeposit",
    "/cosmos.gov.v1.MsgVote",
    "/cosmos.gov.v1.MsgVoteWeighted",
    "/cosmos.gov.v1beta1.MsgDeposit",
    "/cosmos.gov.v1beta1.MsgVote",
    "/cosmos.gov.v1beta1.MsgVoteWeighted",
    // slashing
    "/cosmos.slashing.v1beta1.MsgUnjail",
    // staking
    "/cosmos.staking.v1beta1.MsgBeginRedelegate",
    "/cosmos.staking.v1beta1.MsgCancelUnbondingDelegation",
    "/cosmos.staking.v1beta1.MsgCreateValidator",
    "/cosmos.staking.v1beta1.MsgDelegate",
    "/cosmos.staking.v1beta1.MsgEditValidator",
    "/cosmos.staking.v1beta1.MsgUndelegate",
    // ibc transfer
    "/ibc.applications.transfer.v1.MsgTransfer",
    // ibc channel
    "/ibc.core.channel.v1.MsgAcknowledgement",
    "/ibc.core.channel.v1.MsgChannelCloseConfirm",
    "/ibc.core.channel.v1.MsgChannelCloseInit",
    "/ibc.core.channel.v1.MsgChannelOpenAck",
    "/ibc.core.channel.v1.MsgChannelOpenConfirm",
    "/ibc.core.channel.v1.MsgChannelOpenInit",
    "/ibc.core.channel.v1.MsgChannelOpenTry",
    "/ibc.core.channel.v1.MsgRecvPacket",
    "/ibc.core.channel.v1.MsgTimeout",
    "/ibc.core.channel.v1.MsgTimeoutOnClose",
    // ibc client
    "/ibc.core.client.v1.MsgCreateClient",
    "/ibc.core.client.v1.MsgIBCSoftwareUpgrade",
    "/ibc.core.client.v1.MsgRecoverClient",
    "/ibc.core.client.v1.MsgSubmitMisbehaviour",
    "/ibc.core.client.v1.MsgUpdateClient",
    "/ibc.core.client.v1.MsgUpgradeClient",
    // ibc connection
    "/ibc.core.connection.v1.MsgConnectionOpenAck",
    "/ibc.core.connection.v1.MsgConnectionOpenConfirm",
    "/ibc.core.connection.v1.MsgConnectionOpenInit",
    "/ibc.core.connection.v1.MsgConnectionOpenTry",
    // accountplus
    "/dydxprotocol.accountplus.MsgAddAuthenticator",
    "/dydxprotocol.accountplus.MsgRemoveAuthenticator",
    // affiliates
    "/dydxprotocol.affiliates.MsgRegisterAffiliate",
    // clob
    "/dydxprotocol.clob.MsgBatchCancel",
    "/dydxprotocol.clob.MsgCancelOrder",
    "/dydxprotocol.clob.MsgPlaceOrder",
    "/dydxprotocol.clob.MsgUpdateLeverage",
    // listing
    "/dydxprotocol.listing.MsgCreateMarketPermissionless",
    // sending
    "/dydxprotocol.sending.MsgCreateTransfer",
    "/dydxprotocol.sending.MsgDepositToSubaccount",
    "/dydxprotocol.sending.MsgWithdrawFromSubaccount",
    // vault
    "/dydxprotocol.vault.MsgAllocateToVault",
    "/dydxprotocol.vault.MsgDepositToMegavault",
    "/dydxprotocol.vault.MsgRetrieveFromVault",
    "/dydxprotocol.vault.MsgSetVaultParams",
    "/dydxprotocol.vault.MsgUpdateDefaultQuotingParams",
    "/dydxprotocol.vault.MsgWithdrawFromMegavault",
    // slinky marketmap
    "/slinky.marketmap.v1.MsgCreateMarkets",
    "/slinky.marketmap.v1.MsgParams",
    "/slinky.marketmap.v1.MsgRemoveMarketAuthorities",
    "/slinky.marketmap.v1.MsgRemoveMarkets",
    "/slinky.marketmap.v1.MsgUpdateMarkets",
    "/slinky.marketmap.v1.MsgUpsertMarkets",
];

/// Type URL of a cross-subaccount transfer.
pub const MSG_CREATE_TRANSFER: &str = "/dydxprotocol.sending.MsgCreateTransfer";
/// Type URL of a plain bank send.
pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
/// Type URL of an authz exec container.
pub const MSG_EXEC: &str = "/cosmos.authz.v1beta1.MsgExec";
/// Type URL of a governance proposal container.
pub const MSG_SUBMIT_PROPOSAL: &str = "/cosmos.gov.v1.MsgSubmitProposal";
/// Type URL of the proposer's order-book operations.
pub const MSG_PROPOSED_OPERATIONS: &str = "/dydxprotocol.clob.MsgProposedOperations";
