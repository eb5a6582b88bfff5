//! Shared test utilities for `junction-core`.

use proptest::test_runner::Config as ProptestConfig;

const CASES_ENV: &str = "JUNCTION_PBT_CASES";

/// Builds the proptest configuration shared by every property suite.
///
/// `JUNCTION_PBT_CASES` overrides `default_cases` so CI can run longer
/// sweeps without touching the suites.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = std::env::var(CASES_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
