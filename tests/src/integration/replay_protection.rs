//! # Replay Protection
//!
//! Sequence mode vs good-til-block mode, timeout-height exclusivity and
//! timestamp nonces, all with real signatures.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use qc_06_tx_admission::TIMESTAMP_NONCE_SEQUENCE_CUTOFF;
    use shared_types::Msg;

    fn setup(seed: u8) -> (TestChain, TestAccount) {
        let mut chain = TestChain::new();
        let account = TestAccount::from_seed(seed);
        chain.create_account(&account);
        (chain, account)
    }

    // =============================================================================
    // GOOD-TIL-BLOCK MODE
    // =============================================================================

    #[test]
    fn test_short_term_order_ignores_sequence() {
        let (mut chain, alice) = setup(20);
        let tx = chain.signed_tx(vec![short_term_order(alice.address, 1, 20)], &alice, 42);

        let outcome = chain.deliver(&tx).unwrap();
        assert!(outcome.gas_exempt);
        assert_eq!(chain.sequence(&alice.address), 0);

        // Replays of short-term orders are the order book's concern.
        assert!(chain.deliver(&tx).is_ok());
        assert_eq!(chain.sequence(&alice.address), 0);
    }

    #[test]
    fn test_short_term_cancels_ignore_sequence() {
        let (mut chain, alice) = setup(21);
        let cancel = chain.signed_tx(vec![short_term_cancel(alice.address, 1, 20)], &alice, 7);
        assert!(chain.check(&cancel).is_ok());

        let batch = chain.signed_tx(vec![batch_cancel(alice.address, vec![1, 2, 3], 20)], &alice, 9);
        assert!(chain.deliver(&batch).is_ok());
        assert_eq!(chain.sequence(&alice.address), 0);
    }

    #[test]
    fn test_short_term_order_still_needs_valid_signature() {
        let (mut chain, alice) = setup(22);
        let mallory = TestAccount::from_seed(23);

        let mut tx = chain.signed_tx(vec![short_term_order(alice.address, 1, 20)], &alice, 0);
        let forged = chain.signed_tx(vec![short_term_order(alice.address, 1, 20)], &mallory, 0);
        tx.signatures = forged.signatures;

        assert_eq!(chain.check(&tx).unwrap_err().code(), 4);
    }

    // =============================================================================
    // SEQUENCE MODE
    // =============================================================================

    #[test]
    fn test_short_term_order_with_transfer_uses_sequence() {
        let (mut chain, alice) = setup(24);
        let msgs = vec![
            short_term_order(alice.address, 1, 20),
            Msg::opaque(MSG_CREATE_TRANSFER, alice.address),
        ];

        let stale = chain.signed_tx(msgs.clone(), &alice, 42);
        let err = chain.deliver(&stale).unwrap_err();
        assert_eq!(err.code(), 32);
        assert_eq!(err.detail(), "account sequence mismatch, expected 0, got 42");

        let fresh = chain.signed_tx(msgs, &alice, 0);
        let outcome = chain.deliver(&fresh).unwrap();
        assert!(!outcome.gas_exempt);
        assert_eq!(chain.sequence(&alice.address), 1);
    }

    #[test]
    fn test_long_term_order_uses_sequence() {
        let (mut chain, alice) = setup(25);
        let stale = chain.signed_tx(vec![long_term_order(alice.address, 1, 1_800_000_000)], &alice, 3);
        assert_eq!(chain.deliver(&stale).unwrap_err().code(), 32);

        let fresh = chain.signed_tx(vec![long_term_order(alice.address, 1, 1_800_000_000)], &alice, 0);
        chain.deliver(&fresh).unwrap();
        assert_eq!(chain.sequence(&alice.address), 1);
    }

    #[test]
    fn test_sequence_advances_one_per_tx() {
        let (mut chain, alice) = setup(26);
        for sequence in 0..5 {
            let tx = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, sequence);
            chain.deliver(&tx).unwrap();
            chain.advance(1);
        }
        assert_eq!(chain.sequence(&alice.address), 5);
    }

    // =============================================================================
    // TIMEOUT HEIGHT EXCLUSIVITY
    // =============================================================================

    #[test]
    fn test_short_term_order_with_timeout_height_rejected() {
        let (mut chain, alice) = setup(27);
        let mut tx = shared_types::Tx::new(vec![short_term_order(alice.address, 1, 20)]);
        tx.auth_info.fee.gas_limit = GAS_LIMIT;
        tx.body.timeout_height = chain.height + 5;
        chain.sign(&mut tx, &alice, 0);

        let err = chain.check(&tx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a short term place order message may not have a non-zero timeout height, use goodTilBlock instead: invalid request"
        );
    }

    #[test]
    fn test_sequence_mode_tx_may_carry_timeout_height() {
        let (mut chain, alice) = setup(28);
        let mut tx = shared_types::Tx::new(vec![long_term_order(alice.address, 1, 1_800_000_000)]);
        tx.auth_info.fee.gas_limit = GAS_LIMIT;
        tx.body.timeout_height = chain.height + 5;
        chain.sign(&mut tx, &alice, 0);
        assert!(chain.check(&tx).is_ok());

        chain.advance(10);
        assert_eq!(chain.check(&tx).unwrap_err().code(), 30);
    }

    // =============================================================================
    // TIMESTAMP NONCES
    // =============================================================================

    #[test]
    fn test_timestamp_nonce_single_use() {
        let (mut chain, alice) = setup(29);
        let nonce = chain.time_ms;
        assert!(nonce >= TIMESTAMP_NONCE_SEQUENCE_CUTOFF);

        let tx = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, nonce);
        // CheckTx does not consume the nonce.
        assert!(chain.check(&tx).is_ok());
        assert!(chain.check(&tx).is_ok());

        chain.deliver(&tx).unwrap();
        assert_eq!(chain.sequence(&alice.address), 0);

        let err = chain.deliver(&tx).unwrap_err();
        assert_eq!(err.code(), 32);
        assert!(err.detail().contains("already used"));

        let next = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, nonce + 1);
        assert!(chain.deliver(&next).is_ok());
    }

    #[test]
    fn test_timestamp_nonce_outside_window() {
        let (mut chain, alice) = setup(30);
        let stale = chain.time_ms - 60_000;
        let tx = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, stale);

        let err = chain.check(&tx).unwrap_err();
        assert_eq!(err.code(), 32);
        assert!(err.detail().contains("not within valid time window"));
    }

    #[test]
    fn test_timestamp_nonce_and_sequence_coexist() {
        let (mut chain, alice) = setup(31);
        let by_nonce = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, chain.time_ms);
        chain.deliver(&by_nonce).unwrap();

        let by_sequence = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, 0);
        chain.deliver(&by_sequence).unwrap();
        assert_eq!(chain.sequence(&alice.address), 1);
    }
}
