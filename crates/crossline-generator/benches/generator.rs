//! Benchmarks for crossword layout generation.
//!
//! # Benchmarks
//!
//! - **`generator_small`**: five short, heavily overlapping words.
//! - **`generator_large`**: fifteen words of mixed length, closer to a
//!   hand-written puzzle.
//!
//! Both run the default attempt budget, so they measure the full
//! shuffle/place/score loop.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use crossline_core::Clue;
use crossline_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const SMALL: [(&str, &str); 5] = [
    ("Feline", "CAT"),
    ("Automobile", "CAR"),
    ("Road surface", "TAR"),
    ("Part of a circle", "ARC"),
    ("Rodent", "RAT"),
];

const LARGE: [(&str, &str); 15] = [
    ("Largest planet", "JUPITER"),
    ("Red planet", "MARS"),
    ("Our star", "SUN"),
    ("Ringed planet", "SATURN"),
    ("Closest planet to the sun", "MERCURY"),
    ("Morning star", "VENUS"),
    ("Ice giant", "NEPTUNE"),
    ("Tilted planet", "URANUS"),
    ("Our planet", "EARTH"),
    ("Natural satellite", "MOON"),
    ("Dwarf planet", "PLUTO"),
    ("Shooting star", "METEOR"),
    ("Icy wanderer", "COMET"),
    ("Star cluster", "GALAXY"),
    ("Telescope target", "NEBULA"),
];

fn clues(pairs: &[(&str, &str)]) -> Vec<Clue> {
    pairs
        .iter()
        .map(|&(hint, answer)| Clue::new(hint, answer))
        .collect()
}

fn bench_clues(c: &mut Criterion, name: &str, clues: &[Clue]) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(clues, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_small(c: &mut Criterion) {
    bench_clues(c, "generator_small", &clues(&SMALL));
}

fn bench_generator_large(c: &mut Criterion) {
    bench_clues(c, "generator_large", &clues(&LARGE));
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_small,
        bench_generator_large
);
criterion_main!(benches);
