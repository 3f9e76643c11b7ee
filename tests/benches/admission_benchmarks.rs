//! # Admission Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Msg classification | < 1µs |
//! | CheckTx, signed send | < 1ms |
//! | CheckTx, short-term order | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qc_06_tx_admission::MsgRegistry;
use qc_tests::fixtures::*;
use shared_types::Msg;
use std::time::Duration;

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-06-classification");
    let registry = MsgRegistry::standard().expect("standard registry");

    group.bench_function("classify_known", |b| {
        b.iter(|| black_box(registry.classify(black_box(MSG_SEND))))
    });
    group.bench_function("classify_unknown", |b| {
        b.iter(|| black_box(registry.classify(black_box("/acme.v1.MsgNope"))))
    });

    group.finish();
}

fn bench_check_tx(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-06-check-tx");
    group.measurement_time(Duration::from_secs(10));

    let mut chain = TestChain::new();
    let alice = TestAccount::from_seed(1);
    chain.create_account(&alice);

    let send = chain.signed_tx(vec![Msg::opaque(MSG_SEND, alice.address)], &alice, 0);
    group.bench_function("signed_send", |b| {
        b.iter(|| black_box(chain.check(&send).is_ok()))
    });

    let order = chain.signed_tx(vec![short_term_order(alice.address, 1, 20)], &alice, 0);
    group.bench_function("short_term_order", |b| {
        b.iter(|| black_box(chain.check(&order).is_ok()))
    });

    group.finish();
}

criterion_group!(benches, bench_classification, bench_check_tx);
criterion_main!(benches);
