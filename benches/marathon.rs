use num_format::{Locale, ToFormattedString};
use rand::{rngs::SmallRng, SeedableRng};
use sandworm_game_core::config_fixture;
use sandworm_game_core::types::TickInstruments;
use std::time::Instant;

#[derive(Debug)]
struct Instruments {}

impl TickInstruments for Instruments {
    fn observe_tick(&self, _: std::time::Duration) {}
}

fn main() {
    tracing_subscriber::fmt::init();

    let config = config_fixture(include_str!("../fixtures/desktop_start.json"));
    let mut rng = SmallRng::seed_from_u64(77);
    let mut state = config.build_state().unwrap();

    let start = Instant::now();
    let mut ticks: u64 = 0;
    while start.elapsed().as_secs() < 10 {
        for _ in 0..1_000 {
            state = state.tick(None, &mut rng, &Instruments {}).unwrap();
            ticks += 1;
        }
    }

    println!(
        "{} ticks in {:?}",
        ticks.to_formatted_string(&Locale::en),
        start.elapsed()
    );
    println!("{}", state.field().tile_grid);
}
