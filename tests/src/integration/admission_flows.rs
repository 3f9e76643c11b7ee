//! # Admission Flows
//!
//! Message-type triage, signature checks and gas accounting through the
//! full standard chain.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use qc_06_tx_admission::{AdmissionConfig, AnteError, MsgCategory, TxAdmissionApi};
    use shared_types::{Msg, Tx};

    // =============================================================================
    // SIGNED TRANSACTIONS
    // =============================================================================

    #[test]
    fn test_send_check_then_deliver() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(1);
        chain.create_account(&alice);

        let tx = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, 0);

        let outcome = chain.check(&tx).unwrap();
        assert_eq!(outcome.gas_wanted, GAS_LIMIT);
        assert!(outcome.gas_used > 0);
        assert!(!outcome.gas_exempt);
        // CheckTx leaves no trace.
        assert_eq!(chain.sequence(&alice.address), 0);
        assert!(chain.account(&alice.address).unwrap().pub_key.is_none());
        assert!(chain.check(&tx).is_ok());

        chain.deliver(&tx).unwrap();
        let account = chain.account(&alice.address).unwrap();
        assert_eq!(account.sequence, 1);
        assert_eq!(account.pub_key, Some(alice.pub_key));
    }

    #[test]
    fn test_recheck_after_commit_evicts_stale_tx() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(2);
        chain.create_account(&alice);

        let tx = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, 0);
        chain.deliver(&tx).unwrap();
        chain.advance(1);

        let err = chain.recheck(&tx).unwrap_err();
        assert_eq!(err.code(), 32);
    }

    #[test]
    fn test_wrong_chain_id_fails_verification() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(3);
        chain.create_account(&alice);

        let mut tx = Tx::new(vec![Msg::opaque(MSG_SEND, alice.address)]);
        tx.auth_info.fee.gas_limit = GAS_LIMIT;
        chain.sign_with_chain_id(&mut tx, &alice, 0, "other-chain");

        let err = chain.check(&tx).unwrap_err();
        assert_eq!(err.code(), 4);
        assert!(err.detail().contains("chain-id (qc-testnet-1)"));
    }

    #[test]
    fn test_unknown_account_rejected() {
        let mut chain = TestChain::new();
        let stranger = TestAccount::random();
        let tx = chain.signed_tx(
            vec![Msg::opaque(MSG_SEND, stranger.address)],
            &stranger,
            0,
        );
        assert_eq!(chain.check(&tx).unwrap_err().code(), 9);
    }

    #[test]
    fn test_missing_signature_rejected() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(4);
        chain.create_account(&alice);

        let mut tx = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, 0);
        tx.signatures.clear();
        assert!(matches!(chain.check(&tx), Err(AnteError::NoSignatures(_))));
    }

    #[test]
    fn test_memo_and_gas_limits() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(5);
        chain.create_account(&alice);

        let mut tx = Tx::new(vec![Msg::opaque(MSG_SEND, alice.address)]);
        tx.auth_info.fee.gas_limit = GAS_LIMIT;
        tx.body.memo = "x".repeat(AdmissionConfig::default().max_memo_characters + 1);
        chain.sign(&mut tx, &alice, 0);
        assert_eq!(chain.check(&tx).unwrap_err().code(), 12);

        let mut tx = Tx::new(vec![Msg::opaque(MSG_SEND, alice.address)]);
        tx.auth_info.fee.gas_limit = 100;
        chain.sign(&mut tx, &alice, 0);
        assert_eq!(chain.check(&tx).unwrap_err().code(), 11);
    }

    #[test]
    fn test_simulate_estimates_without_signature() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(6);
        chain.create_account(&alice);

        let mut tx = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, 0);
        tx.signatures = vec![Vec::new()];

        let outcome = chain.simulate(&tx).unwrap();
        assert!(outcome.gas_used >= AdmissionConfig::default().sig_verify_cost_secp256k1);
        assert!(chain.account(&alice.address).unwrap().pub_key.is_none());
        assert_eq!(chain.sequence(&alice.address), 0);
    }

    // =============================================================================
    // MESSAGE CATEGORIES
    // =============================================================================

    #[test]
    fn test_app_injected_deliver_only_and_gas_free() {
        let mut chain = TestChain::new();
        let tx = Tx::new(vec![Msg::unsigned(MSG_PROPOSED_OPERATIONS)]);

        let outcome = chain.deliver(&tx).unwrap();
        assert!(outcome.gas_exempt);
        assert_eq!(outcome.gas_used, 0);

        let err = chain.check(&tx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "app-injected msg must only be included in DeliverTx: invalid request"
        );
    }

    #[test]
    fn test_app_injected_mixed_with_normal_rejected() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(7);
        chain.create_account(&alice);

        let tx = chain.signed_tx(
            vec![
                Msg::unsigned(MSG_UPDATE_MARKET_PRICES),
                Msg::opaque(MSG_SEND, alice.address),
            ],
            &alice,
            0,
        );
        let err = chain.deliver(&tx).unwrap_err();
        assert_eq!(err.detail(), "app-injected msg must be the only msg in a tx");
    }

    #[test]
    fn test_internal_msg_only_inside_proposal() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(8);
        chain.create_account(&alice);
        let gov = [0xAA; 20];

        let direct = chain.signed_tx(vec![Msg::opaque(MSG_SOFTWARE_UPGRADE, alice.address)], &alice, 0);
        assert_eq!(
            chain.check(&direct).unwrap_err().detail(),
            "internal msg cannot be submitted externally"
        );

        let proposal = chain.signed_tx(
            vec![Msg::nested(
                MSG_SUBMIT_PROPOSAL,
                alice.address,
                vec![Msg::opaque(MSG_SOFTWARE_UPGRADE, gov)],
            )],
            &alice,
            0,
        );
        assert!(chain.check(&proposal).is_ok());
    }

    #[test]
    fn test_double_nested_rejected() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(9);
        chain.create_account(&alice);

        let tx = chain.signed_tx(
            vec![Msg::nested(
                MSG_EXEC,
                alice.address,
                vec![Msg::nested(
                    MSG_EXEC,
                    alice.address,
                    vec![Msg::opaque(MSG_SEND, alice.address)],
                )],
            )],
            &alice,
            0,
        );
        let err = chain.check(&tx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid nested msg: double-nested msg type: invalid request"
        );
    }

    #[test]
    fn test_order_payload_under_send_url_gets_no_free_gas() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(11);
        chain.create_account(&alice);

        let payload = short_term_order(alice.address, 1, 20).payload;
        let tx = chain.signed_tx(
            vec![Msg::new(MSG_SEND, vec![alice.address], payload)],
            &alice,
            0,
        );
        let err = chain.deliver(&tx).unwrap_err();
        assert_eq!(err.code(), 18);
        assert_eq!(chain.sequence(&alice.address), 0);
    }

    #[test]
    fn test_order_for_foreign_subaccount_rejected() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(12);
        let mallory = TestAccount::from_seed(13);
        chain.create_account(&alice);
        chain.create_account(&mallory);

        let mut order = short_term_order(alice.address, 1, 20);
        order.signers = vec![mallory.address];
        let tx = chain.signed_tx(vec![order], &mallory, 0);

        let err = chain.deliver(&tx).unwrap_err();
        assert_eq!(err.code(), 18);
        assert!(err.detail().contains("must be signed by subaccount owner"));
    }

    #[test]
    fn test_unknown_type_url() {
        let mut chain = TestChain::new();
        let alice = TestAccount::from_seed(10);
        chain.create_account(&alice);

        let tx = chain.signed_tx(vec![Msg::opaque("/acme.v1.MsgNope", alice.address)], &alice, 0);
        assert_eq!(chain.check(&tx).unwrap_err().code(), 2);
        assert_eq!(chain.service.classify("/acme.v1.MsgNope"), None);
        assert_eq!(
            chain.service.classify(MSG_PROPOSED_OPERATIONS),
            Some(MsgCategory::AppInjected)
        );
    }
}
