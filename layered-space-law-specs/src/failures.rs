//! Expected failures tracking via TOML file.
//!
//! ```toml
//! [[known]]
//! fixture = "scenario-e-jurisdictions.toml"
//! check = "boundary[us].legal_basis"
//! reason = "Greedy reference capture"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{SpecError, SpecResult};

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture file name, relative to the fixtures directory.
    pub fixture: String,
    /// Check reference, e.g. `classification[b1].confidence`.
    pub check: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SpecError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Classify a failed check.
    pub fn is_expected(&self, fixture: &str, check: &str) -> FailureState {
        let matches = |e: &FailureEntry| e.fixture == fixture && e.check == check;
        if self.known.iter().any(matches) {
            FailureState::Known
        } else if self.pending.iter().any(matches) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total checks.
    pub total: usize,
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed check with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => self.expected_failures += 1,
            FailureState::Regression => self.regressions += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_is_empty() {
        let failures = ExpectedFailures::load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(failures.count(), 0);
        assert_eq!(
            failures.is_expected("a.toml", "boundary[us].confidence"),
            FailureState::Regression
        );
    }

    #[test]
    fn load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[pending]]
fixture = "a.toml"
check = "classification[a1].confidence"
reason = "Awaiting catalog update"
added = "2026-10-01"

[[known]]
fixture = "b.toml"
check = "boundary[us].legal_basis"
"#
        )
        .unwrap();

        let failures = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(failures.count(), 2);
        assert_eq!(
            failures.is_expected("a.toml", "classification[a1].confidence"),
            FailureState::Pending
        );
        assert_eq!(
            failures.is_expected("b.toml", "boundary[us].legal_basis"),
            FailureState::Known
        );
        assert_eq!(
            failures.is_expected("b.toml", "boundary[us].confidence"),
            FailureState::Regression
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[known]]\nfixture = 3").unwrap();

        assert!(matches!(
            ExpectedFailures::load(file.path()),
            Err(SpecError::Parse { .. })
        ));
    }

    #[test]
    fn harness_result_tally() {
        let mut result = HarnessResult::new();
        result.record_pass();
        result.record_failure(FailureState::Known);
        assert!(result.success());

        result.record_failure(FailureState::Regression);
        assert_eq!(result.total, 3);
        assert_eq!(result.expected_failures, 1);
        assert!(!result.success());
    }
}
