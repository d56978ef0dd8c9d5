//! Runs fixtures through the analysis pipeline and checks expectations.

use std::fmt::Debug;

use layered_space_law::AnalysisOutcome;

use crate::config::PipelineConfig;
use crate::errors::SpecResult;
use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{
    BoundaryExpectation, ClassificationExpectation, LawFixture, RecommendationExpectation,
};

/// Absolute tolerance for confidence and strength comparisons.
pub const SCORE_TOLERANCE: f64 = 1e-9;

/// One expectation that the analysis output did not meet.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// What was checked, e.g. `classification[b1]`
    pub subject: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    fn new(subject: &str, field: &str, expected: impl Debug, actual: impl Debug) -> Self {
        Self {
            subject: subject.to_string(),
            field: field.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    fn missing(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            field: "present".to_string(),
            expected: "true".to_string(),
            actual: "false".to_string(),
        }
    }

    /// Reference used in the expected-failures file, e.g.
    /// `classification[b1].confidence`.
    pub fn reference(&self) -> String {
        format!("{}.{}", self.subject, self.field)
    }
}

/// Outcome of one fixture run.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub outcome: AnalysisOutcome,
    pub checks: usize,
    pub mismatches: Vec<Mismatch>,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Run the fixture's request over its corpus.
pub fn run_fixture(fixture: &LawFixture, config: &PipelineConfig) -> SpecResult<AnalysisOutcome> {
    let pipeline = config.build()?;
    Ok(pipeline.run(&fixture.documents, &fixture.effective_request()))
}

/// Run a fixture and compare the outcome with its expectations.
pub fn check_fixture(fixture: &LawFixture, config: &PipelineConfig) -> SpecResult<FixtureReport> {
    let outcome = run_fixture(fixture, config)?;
    let mismatches = check_outcome(fixture, &outcome);
    Ok(FixtureReport {
        outcome,
        checks: fixture.check_count(),
        mismatches,
    })
}

/// Compare an outcome with a fixture's expectations.
pub fn check_outcome(fixture: &LawFixture, outcome: &AnalysisOutcome) -> Vec<Mismatch> {
    let expect = &fixture.expect;
    let mut mismatches = Vec::new();

    for expected in &expect.classifications {
        check_classification(expected, outcome, &mut mismatches);
    }
    for expected in &expect.boundaries {
        check_boundary(expected, outcome, &mut mismatches);
    }
    for expected in &expect.recommendations {
        check_recommendation(expected, outcome, &mut mismatches);
    }

    if let Some(count) = expect.boundary_count {
        if outcome.boundaries.len() != count {
            mismatches.push(Mismatch::new("boundaries", "count", count, outcome.boundaries.len()));
        }
    }
    if let Some(count) = expect.recommendation_count {
        if outcome.recommendations.len() != count {
            mismatches.push(Mismatch::new(
                "recommendations",
                "count",
                count,
                outcome.recommendations.len(),
            ));
        }
    }
    if let Some(missing) = &expect.missing_documents {
        if &outcome.missing_documents != missing {
            mismatches.push(Mismatch::new(
                "outcome",
                "missing_documents",
                missing,
                &outcome.missing_documents,
            ));
        }
    }

    mismatches
}

fn scores_match(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() <= SCORE_TOLERANCE
}

fn check_classification(
    expected: &ClassificationExpectation,
    outcome: &AnalysisOutcome,
    mismatches: &mut Vec<Mismatch>,
) {
    let subject = format!("classification[{}]", expected.document);
    let Some(found) = outcome.analysis_for(&expected.document) else {
        mismatches.push(Mismatch::missing(&subject));
        return;
    };
    let actual = &found.analysis;

    if let Some(classification) = expected.classification {
        if classification != actual.classification {
            mismatches.push(Mismatch::new(
                &subject,
                "classification",
                classification,
                actual.classification,
            ));
        }
    }
    if let Some(confidence) = expected.confidence {
        if !scores_match(confidence, actual.confidence) {
            mismatches.push(Mismatch::new(&subject, "confidence", confidence, actual.confidence));
        }
    }
    if let Some(count) = expected.customary_indicators {
        if count != actual.customary_indicator_count {
            mismatches.push(Mismatch::new(
                &subject,
                "customary_indicators",
                count,
                actual.customary_indicator_count,
            ));
        }
    }
    if let Some(count) = expected.treaty_indicators {
        if count != actual.treaty_indicator_count {
            mismatches.push(Mismatch::new(
                &subject,
                "treaty_indicators",
                count,
                actual.treaty_indicator_count,
            ));
        }
    }
    if let Some(score) = expected.jus_cogens_score {
        if !scores_match(score, actual.jus_cogens_score) {
            mismatches.push(Mismatch::new(
                &subject,
                "jus_cogens_score",
                score,
                actual.jus_cogens_score,
            ));
        }
    }
}

fn check_boundary(
    expected: &BoundaryExpectation,
    outcome: &AnalysisOutcome,
    mismatches: &mut Vec<Mismatch>,
) {
    let subject = format!("boundary[{}]", expected.jurisdiction);
    let Some(actual) = outcome
        .boundaries
        .iter()
        .find(|b| b.jurisdiction == expected.jurisdiction)
    else {
        mismatches.push(Mismatch::missing(&subject));
        return;
    };

    if let Some(confidence) = expected.confidence {
        if !scores_match(confidence, actual.confidence) {
            mismatches.push(Mismatch::new(&subject, "confidence", confidence, actual.confidence));
        }
    }
    if let Some(legal_basis) = &expected.legal_basis {
        if legal_basis != &actual.legal_basis {
            mismatches.push(Mismatch::new(&subject, "legal_basis", legal_basis, &actual.legal_basis));
        }
    }
    if let Some(count) = expected.conflict_count {
        if count != actual.conflicts.len() {
            mismatches.push(Mismatch::new(&subject, "conflict_count", count, actual.conflicts.len()));
        }
    }
}

fn check_recommendation(
    expected: &RecommendationExpectation,
    outcome: &AnalysisOutcome,
    mismatches: &mut Vec<Mismatch>,
) {
    let subject = format!("recommendation[{}]", expected.principle);
    let Some(actual) = outcome
        .recommendations
        .iter()
        .find(|r| r.principle == expected.principle)
    else {
        mismatches.push(Mismatch::missing(&subject));
        return;
    };

    if let Some(supporting) = &expected.supporting_documents {
        if supporting != &actual.supporting_documents {
            mismatches.push(Mismatch::new(
                &subject,
                "supporting_documents",
                supporting,
                &actual.supporting_documents,
            ));
        }
    }
    if let Some(strength) = expected.strength {
        if !scores_match(strength, actual.recommendation_strength) {
            mismatches.push(Mismatch::new(
                &subject,
                "strength",
                strength,
                actual.recommendation_strength,
            ));
        }
    }
}

/// Run every fixture and tally passes against the expected-failures list.
///
/// Each declared field check counts once. A mismatch listed in `expected`
/// counts as an expected failure; any other mismatch is a regression.
pub fn run_harness(
    fixtures: &[(String, LawFixture)],
    config: &PipelineConfig,
    expected: &ExpectedFailures,
) -> SpecResult<(HarnessResult, Vec<(String, Mismatch)>)> {
    let mut result = HarnessResult::new();
    let mut regressions = Vec::new();

    for (name, fixture) in fixtures {
        let report = check_fixture(fixture, config)?;
        let failed = report.mismatches.len();
        for _ in 0..report.checks.saturating_sub(failed) {
            result.record_pass();
        }
        for mismatch in report.mismatches {
            let state = expected.is_expected(name, &mismatch.reference());
            result.record_failure(state);
            if state == FailureState::Regression {
                regressions.push((name.clone(), mismatch));
            }
        }
    }

    Ok((result, regressions))
}
