use super::pipeline::corpus;
use crate::{AnalysisOutcome, AnalysisRequest, Pipeline};

#[test]
fn full_report() {
    let docs = corpus();
    let request = AnalysisRequest::new(["ost", "res-1962", "csla", "gone"]);
    let outcome = Pipeline::standard().run(&docs, &request);

    insta::assert_snapshot!(outcome.report().to_string(), @r###"
    Classifications
    document  classification      confidence  customary  treaty  jus cogens
    ────────  ──────────────────  ──────────  ─────────  ──────  ──────────
    ost       treaty_law          0.90        0          4       0.2
    res-1962  customary_law       0.80        2          0       0.2
    csla      mixed_or_uncertain  0.50        0          0       0.2

    Jurisdictional boundaries
    jurisdiction   type        legal basis  conflicts  confidence
    ─────────────  ──────────  ───────────  ─────────  ──────────
    international  functional  1            0          0.65
    un             functional  0            0          0.55
    us             functional  1            1          0.65

    Jus cogens recommendations
    principle                               support  strength
    ──────────────────────────────────────  ───────  ────────
    Peaceful Use Of Outer Space             1        0.40
    Benefit And Interests Of All Countries  1        0.40
    International Cooperation               1        0.40

    Missing documents: gone
    "###);
}

#[test]
fn empty_sections_are_omitted() {
    let docs = corpus();
    let request = AnalysisRequest::new(["csla"]).with_analysis_types([]).with_jus_cogens(false);
    let outcome = Pipeline::standard().run(&docs, &request);

    assert_eq!(outcome.report().to_string(), "");
    assert_eq!(AnalysisOutcome::default().report().to_string(), "");
}
