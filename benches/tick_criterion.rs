use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use sandworm_game_core::config_fixture;
use sandworm_game_core::types::TickInstruments;

#[derive(Debug)]
struct Instruments {}

impl TickInstruments for Instruments {
    fn observe_tick(&self, _: std::time::Duration) {}
}

fn bench_ticks(c: &mut Criterion) {
    let config = config_fixture(include_str!("../fixtures/desktop_start.json"));

    c.bench_function("hundred ticks on a desktop board", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(31);
            let mut state = config.build_state().unwrap();
            for _ in 0..100 {
                state = black_box(state.tick(None, &mut rng, &Instruments {}).unwrap());
            }
            state
        })
    });

    c.bench_function("build a desktop starting state", |b| {
        b.iter(|| black_box(config.build_state().unwrap()))
    });
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
