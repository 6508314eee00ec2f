//! Benchmark instance generators.
//!
//! Two classic presets: 200 items into 10 bins with weights `1..=200`
//! ([`Preset::Bpp1`]), and into 50 bins with weights `perm[i] * (i + 1) / 2`
//! ([`Preset::Bpp2`]).

mod generators;

pub use generators::{permutation_items, scaled_permutation_items, Preset};
