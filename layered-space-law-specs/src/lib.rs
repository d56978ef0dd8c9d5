//! Fixture-driven scenario testing for layered-space-law.
//!
//! Scenarios are declared in TOML fixture files: a small corpus, an optional
//! analysis request and the classifications, boundaries and recommendations
//! the pipeline is expected to produce. The runner executes each fixture,
//! compares the outcome field by field and tallies mismatches against an
//! expected-failures list so that only regressions fail a run.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types
//! - [`loader`] - Fixture file loading
//! - [`config`] - Pipeline configuration for runs
//! - [`runner`] - Runs fixtures and checks expectations
//! - [`failures`] - Expected failures tracking via TOML
//! - [`formatter`] - Failure and summary formatting
//! - [`errors`] - Error types

pub mod config;
pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use config::PipelineConfig;
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{
    BoundaryExpectation, ClassificationExpectation, Expectations, LawFixture,
    RecommendationExpectation,
};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture, parse_fixture};
pub use runner::{
    check_fixture, check_outcome, run_fixture, run_harness, FixtureReport, Mismatch,
    SCORE_TOLERANCE,
};
