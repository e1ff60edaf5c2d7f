//! Legacy-code analysis pipeline: pattern detection, complexity metrics,
//! risk scoring, and chamber routing over a set of source artifacts.
//!
//! Every stage is a pure function over immutable inputs. The pipeline is
//! total: any text input yields a report, and identical inputs always yield
//! an identical report.

pub mod catalog;
pub mod complexity;
pub mod detector;
pub mod router;
pub mod scorer;

pub use catalog::{DetectionRule, DETECTION_RULES};
pub use complexity::analyze_complexity;
pub use detector::detect_patterns;
pub use router::determine_resurrection_routes;
pub use scorer::{
    calculate_risk_score, determine_risk_band, generate_migration_phases,
    generate_recommendations, identify_top_findings,
};

use crate::core::{RiskReport, SourceArtifact};
use log::debug;

/// Run the full analysis pipeline over the given artifacts.
pub fn analyze_artifacts(artifacts: &[SourceArtifact]) -> RiskReport {
    let patterns = detect_patterns(artifacts);
    debug!("detected {} distinct patterns", patterns.len());

    let overall_score = calculate_risk_score(&patterns);
    let risk_band = determine_risk_band(overall_score);
    let top_findings = identify_top_findings(&patterns);
    let recommendations = generate_recommendations(&patterns, overall_score);
    let resurrection_routes = determine_resurrection_routes(&patterns);
    let migration_phases = generate_migration_phases(&patterns, overall_score);
    let complexity_metrics = analyze_complexity(artifacts);

    let total_lines = artifacts
        .iter()
        .map(|a| a.content.split('\n').count())
        .sum();

    RiskReport {
        overall_score,
        risk_band,
        top_findings,
        patterns_detected: patterns,
        recommendations,
        resurrection_routes,
        migration_phases,
        analyzed_files: artifacts.len(),
        total_lines,
        complexity_metrics,
    }
}
