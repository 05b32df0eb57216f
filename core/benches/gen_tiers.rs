use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sapper_core::{GameConfig, GameSession, MineDeployer, RandomDeployer};
use std::hint::black_box;

fn deploy_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("deploy");
    let tiers = [
        ("beginner", (9u8, 9u8, 10u16)),
        ("intermediate", (16, 16, 40)),
        ("expert", (16, 30, 99)),
    ];
    for (name, (rows, cols, mines)) in tiers {
        let config = GameConfig::new(rows, cols, mines).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| black_box(RandomDeployer::new(0x5EED).deploy(config)))
        });
    }
    group.finish();
}

fn cascade_tiers(c: &mut Criterion) {
    // a mine-free board makes the first reveal flood the whole grid
    let mut group = c.benchmark_group("cascade");
    for (name, (rows, cols)) in [("small", (16u8, 16u8)), ("large", (200, 200))] {
        let config = GameConfig::new(rows, cols, 0).unwrap();
        group.bench_function(name, |b| {
            b.iter_batched(
                || GameSession::new(RandomDeployer::new(1).deploy(config)),
                |mut session| {
                    session.reveal((0, 0)).unwrap();
                    session
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, deploy_tiers, cascade_tiers);
criterion_main!(benches);
