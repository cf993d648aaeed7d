//! Matching engine benchmarks.
//!
//! Run with: cargo bench -p matching-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matching_engine::{MatchingAlgorithm, MatchingEngine};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{LimitOrder, Order, Side};

fn limit(side: Side, price: u64, qty: u64, timestamp: i64) -> Order {
    Order::Limit(LimitOrder {
        id: OrderId::new(),
        side,
        price: Price::from_u64(price),
        quantity: Quantity::from_u64(qty),
        timestamp,
    })
}

/// Benchmark resting an order into an empty book.
fn bench_rest_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("rest_empty");
    group.throughput(Throughput::Elements(1));

    group.bench_function("limit_order", |b| {
        b.iter_batched(
            || MatchingEngine::new(MatchingAlgorithm::PriceTime),
            |mut engine| black_box(engine.match_order(limit(Side::Bid, 100, 1, 1))),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark sweeping an incoming order across resting counter-orders.
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.throughput(Throughput::Elements(1));

    for depth in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter_batched(
                || {
                    let mut engine = MatchingEngine::new(MatchingAlgorithm::PriceTime);
                    for i in 0..depth {
                        engine
                            .match_order(limit(Side::Ask, 100 + (i as u64 % 10), 10, i as i64))
                            .unwrap();
                    }
                    engine
                },
                |mut engine| {
                    black_box(
                        engine.match_order(limit(
                            Side::Bid,
                            200,
                            10 * depth as u64,
                            depth as i64,
                        )),
                    )
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark a mixed workload of crossing and resting orders.
fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(1_000));

    for algorithm in [MatchingAlgorithm::PriceTime, MatchingAlgorithm::ProRata] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &algorithm,
            |b, &algorithm| {
                b.iter_batched(
                    || MatchingEngine::new(algorithm),
                    |mut engine| {
                        for i in 0..1_000u64 {
                            let side = if i % 2 == 0 { Side::Bid } else { Side::Ask };
                            let price = 100 + (i % 10);
                            black_box(
                                engine
                                    .match_order(limit(side, price, 5, i as i64))
                                    .unwrap(),
                            );
                        }
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rest_empty, bench_sweep, bench_mixed_workload);
criterion_main!(benches);
