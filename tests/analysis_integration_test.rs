use exhume::{analyze_artifacts, PatternCategory, Severity, SourceArtifact};
use pretty_assertions::assert_eq;

fn artifact(path: &str, content: &str) -> SourceArtifact {
    SourceArtifact::new(path, content, "js")
}

const LEGACY_SAMPLE: &str = r#"
var apiClient = null;
$(document).ready(function() {
    var password = "hunter2hunter2";
    document.getElementById('status').innerHTML = "<b>ready</b>";
});
"#;

#[test]
fn analysis_is_bit_identical_across_runs() {
    let files = vec![
        artifact("legacy/app.js", LEGACY_SAMPLE),
        artifact("legacy/page.html", r#"<div class="col-md-6 panel">old</div>"#),
    ];

    let first = analyze_artifacts(&files);
    let second = analyze_artifacts(&files);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn score_is_always_within_bounds() {
    let inputs: Vec<Vec<SourceArtifact>> = vec![
        vec![],
        vec![artifact("empty.js", "")],
        vec![artifact("clean.js", "const x = compute();")],
        vec![artifact("bad.js", LEGACY_SAMPLE); 10],
    ];
    for files in inputs {
        let report = analyze_artifacts(&files);
        assert!(report.overall_score <= 100);
        assert_eq!(
            report.top_findings.is_empty(),
            report.patterns_detected.is_empty()
        );
        assert!(report.top_findings.len() <= 3);
    }
}

#[test]
fn hardcoded_secret_detection_matches_contract() {
    let report = analyze_artifacts(&[artifact("cfg.js", r#"password = "abcdefgh12""#)]);
    let secret = report
        .patterns_detected
        .iter()
        .find(|p| p.id == "hardcoded-secrets")
        .expect("hardcoded-secrets finding");
    assert_eq!(secret.severity, Severity::Critical);
    assert_eq!(secret.category, PatternCategory::Security);
    assert!(secret.occurrences >= 1);
}

#[test]
fn clean_codebase_reports_low_risk() {
    let report = analyze_artifacts(&[artifact("clean.js", "const a = 1;\nlet b = a + 1;\n")]);
    assert_eq!(report.overall_score, 100);
    assert_eq!(report.risk_band.level, Severity::Low);
    assert_eq!(report.risk_band.range, "80-100");
    assert!(report.patterns_detected.is_empty());
    assert!(report.resurrection_routes.is_empty());
    // Only the hardening phase remains for a healthy codebase.
    assert_eq!(report.migration_phases.len(), 1);
    assert_eq!(report.migration_phases[0].name, "Hardening & Observability");
    // Opener plus the continuous-improvement note.
    assert_eq!(report.recommendations.len(), 2);
}

#[test]
fn legacy_ui_codebase_routes_to_ghost_ui() {
    let report = analyze_artifacts(&[
        artifact("page.html", r#"<div class="col-xs-12 jumbotron">x</div>"#),
        artifact("app.js", "$(document).ready(function() {});"),
    ]);

    let ui_route = report
        .resurrection_routes
        .iter()
        .find(|r| format!("{:?}", r.chamber) == "GhostUi")
        .expect("ghost-ui route");
    assert_eq!(ui_route.priority, 2);

    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("UI Modernization")));
    assert!(report
        .migration_phases
        .iter()
        .any(|p| p.name == "UI Modernization"));
}

#[test]
fn soap_descriptor_routes_to_api_necromancer() {
    let report = analyze_artifacts(&[artifact(
        "service.wsdl",
        r#"<wsdl:definitions xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"></wsdl:definitions>"#,
    )]);

    let route = &report.resurrection_routes[0];
    assert_eq!(route.priority, 1);
    assert!(route.reason.contains("SOAP/WSDL"));

    assert!(report
        .migration_phases
        .iter()
        .any(|p| p.name == "API Modernization (Strangler Fig)"));
}

#[test]
fn report_totals_count_files_and_lines() {
    let report = analyze_artifacts(&[
        artifact("a.js", "one\ntwo\nthree"),
        artifact("b.js", "one\ntwo"),
    ]);
    assert_eq!(report.analyzed_files, 2);
    assert_eq!(report.total_lines, 5);
}
