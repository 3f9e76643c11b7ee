//! # Concurrency
//!
//! One admission service shared by many threads, each driving its own
//! store. The service holds no per-tx state, so results must match a
//! single-threaded run.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use qc_06_tx_admission::adapters::{AccountKeeper, MemoryStore};
    use qc_06_tx_admission::ports::AccountStore;
    use qc_06_tx_admission::{AdmissionConfig, BlockHeader, TxAdmissionApi, TxAdmissionService};
    use shared_types::{Msg, Tx};

    const THREADS: usize = 8;
    const TXS_PER_THREAD: u64 = 10;

    #[test]
    fn test_shared_service_across_threads() {
        let service = TxAdmissionService::new(AdmissionConfig::default()).unwrap();

        let sequences: Vec<u64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let service = &service;
                    scope.spawn(move || {
                        let mut store = MemoryStore::new();
                        let keeper = AccountKeeper::new();
                        let account = TestAccount::random();
                        let number = keeper
                            .new_account(&mut store, account.address)
                            .unwrap()
                            .account_number;

                        for sequence in 0..TXS_PER_THREAD {
                            let header = BlockHeader::new(
                                CHAIN_ID,
                                sequence + 1,
                                GENESIS_TIME_MS + sequence * BLOCK_TIME_MS,
                            );
                            let mut tx = Tx::new(vec![Msg::opaque(MSG_SEND, account.address)]);
                            tx.auth_info.fee.gas_limit = GAS_LIMIT;
                            account.sign_tx(&mut tx, number, sequence, CHAIN_ID);

                            service.check_tx(&mut store, &header, &tx).unwrap();
                            service.deliver_tx(&mut store, &header, &tx).unwrap();
                            assert!(service.deliver_tx(&mut store, &header, &tx).is_err());
                        }

                        keeper
                            .get_account(&store, &account.address)
                            .unwrap()
                            .unwrap()
                            .sequence
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequences, vec![TXS_PER_THREAD; THREADS]);
    }

    #[test]
    fn test_concurrent_short_term_orders() {
        let service = TxAdmissionService::new(AdmissionConfig::default()).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..THREADS {
                let service = &service;
                scope.spawn(move || {
                    let mut store = MemoryStore::new();
                    let keeper = AccountKeeper::new();
                    let account = TestAccount::random();
                    keeper.new_account(&mut store, account.address).unwrap();
                    let header = BlockHeader::new(CHAIN_ID, 1, GENESIS_TIME_MS);

                    for client_id in 0..TXS_PER_THREAD as u32 {
                        let mut tx = Tx::new(vec![short_term_order(account.address, client_id, 20)]);
                        tx.auth_info.fee.gas_limit = GAS_LIMIT;
                        account.sign_tx(&mut tx, 0, 0, CHAIN_ID);

                        let outcome = service.deliver_tx(&mut store, &header, &tx).unwrap();
                        assert!(outcome.gas_exempt);
                    }

                    let sequence = keeper
                        .get_account(&store, &account.address)
                        .unwrap()
                        .unwrap()
                        .sequence;
                    assert_eq!(sequence, 0);
                });
            }
        });
    }
}
