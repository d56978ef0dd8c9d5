//! Failure and summary formatting.

use std::fmt::Write;

use crate::failures::HarnessResult;
use crate::runner::Mismatch;

/// Format the mismatches of one fixture.
pub fn format_failure(fixture_name: &str, title: Option<&str>, mismatches: &[Mismatch]) -> String {
    let mut output = String::new();

    match title {
        Some(title) => {
            let _ = writeln!(output, "FAIL: {} ({})", fixture_name, title);
        }
        None => {
            let _ = writeln!(output, "FAIL: {}", fixture_name);
        }
    }

    for mismatch in mismatches {
        let _ = writeln!(
            output,
            "  \u{2717} {}: expected `{}`, found `{}`",
            mismatch.reference(),
            mismatch.expected,
            mismatch.actual
        );
    }

    output
}

/// Format a one-line harness summary.
pub fn format_summary(result: &HarnessResult) -> String {
    let status = if result.success() { "PASS" } else { "FAIL" };
    format!(
        "{}: {} checks, {} passed, {} expected failures, {} regressions",
        status, result.total, result.passed, result.expected_failures, result.regressions
    )
}
