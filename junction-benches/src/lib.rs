//! Benchmark support crate for junction.
//!
//! Provides seeded synthetic point clouds and the setup error type used by
//! the Criterion benchmarks in `benches/`.

pub mod error;
pub mod source;
