//! Seed point generation.

mod seeds;

pub use seeds::{density_acceptance, generate_seeds, SeedSampler};
