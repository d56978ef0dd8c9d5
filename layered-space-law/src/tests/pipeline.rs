use layered_legal::{Document, DocumentStatus, Jurisdiction};

use crate::{
    AnalysisKind, AnalysisRequest, IndicatorCatalog, LawClassification, Pipeline, METHODOLOGY,
};

pub(super) fn corpus() -> Vec<Document> {
    vec![
        Document::new(
            "ost",
            "Outer Space Treaty",
            "States shall not place nuclear weapons in orbit. This treaty was signed, ratified and entered into force in 1967. Exploration is carried out for the benefit and interests of all countries.",
        )
        .with_jurisdiction("international")
        .with_status(DocumentStatus::Completed),
        Document::new(
            "res-1962",
            "Declaration of Legal Principles",
            "General practice accepted as law confirms the peaceful use of outer space. States should promote international cooperation.",
        )
        .with_jurisdiction("un")
        .with_status(DocumentStatus::Completed),
        Document::new(
            "csla",
            "Commercial Space Launch Act",
            "A licensee must obtain insurance. Any dispute over liability goes to the agency.",
        )
        .with_jurisdiction("us"),
    ]
}

#[test]
fn full_run() {
    let docs = corpus();
    let request = AnalysisRequest::new(["ost", "res-1962", "csla", "gone"]);
    let outcome = Pipeline::standard().run(&docs, &request);

    let labels: Vec<_> = outcome
        .analyses
        .iter()
        .map(|a| (a.document_id.as_str(), a.analysis.classification, a.confidence_score))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("ost", LawClassification::TreatyLaw, 0.9),
            ("res-1962", LawClassification::CustomaryLaw, 0.8),
            ("csla", LawClassification::MixedOrUncertain, 0.5),
        ]
    );
    assert!(outcome
        .analyses
        .iter()
        .all(|a| a.methodology == METHODOLOGY && a.analysis_type == AnalysisKind::CustomaryVsTreaty));

    let boundaries: Vec<_> = outcome
        .boundaries
        .iter()
        .map(|b| (b.jurisdiction, b.confidence))
        .collect();
    assert_eq!(
        boundaries,
        vec![
            (Jurisdiction::International, 0.65),
            (Jurisdiction::Un, 0.55),
            (Jurisdiction::Us, 0.65),
        ]
    );

    assert_eq!(outcome.recommendations.len(), 3);
    assert_eq!(outcome.missing_documents, vec!["gone".to_string()]);
}

#[test]
fn analyses_follow_request_order() {
    let docs = corpus();
    let request = AnalysisRequest::new(["csla", "ost"]);
    let outcome = Pipeline::standard().run(&docs, &request);

    let ids: Vec<_> = outcome.analyses.iter().map(|a| a.document_id.as_str()).collect();
    assert_eq!(ids, vec!["csla", "ost"]);
    assert_eq!(outcome.boundaries[0].jurisdiction, Jurisdiction::Us);
}

#[test]
fn only_requested_analyses_run() {
    let docs = corpus();
    let request = AnalysisRequest::new(["ost"])
        .with_analysis_types([AnalysisKind::JurisdictionalAnalysis])
        .with_jus_cogens(false);
    let outcome = Pipeline::standard().run(&docs, &request);

    assert!(outcome.analyses.is_empty());
    assert_eq!(outcome.boundaries.len(), 1);
    assert!(outcome.recommendations.is_empty());
}

#[test]
fn recommendations_use_completed_documents_of_full_set() {
    let docs = corpus();
    let request = AnalysisRequest::new(["csla"]).with_analysis_types([]);
    let outcome = Pipeline::standard().run(&docs, &request);

    let supporting: Vec<_> = outcome
        .recommendations
        .iter()
        .flat_map(|r| r.supporting_documents.iter().map(String::as_str))
        .collect();
    assert_eq!(supporting, vec!["res-1962", "ost", "res-1962"]);
}

#[test]
fn empty_request_is_not_an_error() {
    let outcome = Pipeline::standard().run(&[], &AnalysisRequest::new(Vec::<String>::new()));

    assert!(outcome.analyses.is_empty());
    assert!(outcome.boundaries.is_empty());
    assert!(outcome.recommendations.is_empty());
    assert!(outcome.missing_documents.is_empty());
}

#[test]
fn worker_count_does_not_change_results() {
    let docs: Vec<Document> = (0..25)
        .flat_map(|i| {
            corpus().into_iter().map(move |mut d| {
                d.id = format!("{}-{}", d.id, i);
                d
            })
        })
        .collect();

    let sequential = Pipeline::standard().classify_all(&docs);
    for workers in [2, 4, 7] {
        assert_eq!(Pipeline::standard().with_workers(workers).classify_all(&docs), sequential);
    }
}

#[test]
fn custom_catalog_flows_through_every_layer() {
    let catalog = IndicatorCatalog::new(
        vec!["state practice".into()],
        vec!["launch".into(), "licensee".into(), "insurance".into()],
        vec!["jus cogens".into()],
        vec!["obtain insurance".into()],
        vec!["agency".into()],
    )
    .unwrap();
    let pipeline = Pipeline::with_catalog(catalog.into()).unwrap();
    let mut docs = corpus();
    docs[2].status = DocumentStatus::Completed;

    let outcome = pipeline.run(&docs, &AnalysisRequest::new(["csla"]));
    assert_eq!(outcome.analyses[0].analysis.classification, LawClassification::TreatyLaw);
    assert_eq!(outcome.boundaries[0].conflicts.len(), 1);
    assert_eq!(outcome.recommendations[0].principle, "Obtain Insurance");
}

#[test]
fn json_hand_off() {
    let docs = corpus();
    let outcome = Pipeline::standard().run(&docs, &AnalysisRequest::new(["res-1962"]));
    let json: serde_json::Value = serde_json::from_str(&outcome.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["analyses"][0]["document_id"], "res-1962");
    assert_eq!(json["analyses"][0]["analysis_type"], "customary_vs_treaty");
    assert_eq!(json["analyses"][0]["methodology"], "Pattern-based legal analysis");
    assert_eq!(json["analyses"][0]["analysis"]["classification"], "customary_law");
    assert_eq!(json["boundaries"][0]["jurisdiction"], "un");
    assert_eq!(json["missing_documents"], serde_json::json!([]));
}

#[test]
fn outcome_lookup_by_document() {
    let docs = corpus();
    let outcome = Pipeline::standard().run(&docs, &AnalysisRequest::new(["ost"]));

    assert!(outcome.analysis_for("ost").is_some());
    assert!(outcome.analysis_for("csla").is_none());
}
