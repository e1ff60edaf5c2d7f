//! Risk scoring: numeric score, risk band, top findings, recommendations,
//! and phased migration planning derived from the detected pattern set.

use crate::core::{
    LegacyPattern, MigrationPhase, PatternCategory, RiskBand, Severity, SuggestedTarget,
    TopFinding,
};

/// Per-pattern penalty cap, bounding the influence of any single rule.
const MAX_PATTERN_PENALTY: f64 = 40.0;

fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::Critical => 35.0,
        Severity::High => 25.0,
        Severity::Medium => 12.0,
        Severity::Low => 5.0,
    }
}

fn category_multiplier(category: PatternCategory) -> f64 {
    match category {
        PatternCategory::Security => 1.5,
        PatternCategory::DataAccess => 1.3,
        PatternCategory::Architecture => 1.2,
        PatternCategory::ApiDesign => 1.1,
        PatternCategory::Performance => 1.0,
        PatternCategory::Maintainability => 0.9,
        PatternCategory::Modernization => 0.8,
        PatternCategory::UiFramework => 0.8,
    }
}

/// Start at 100, subtract capped severity-weighted penalties, floor at 0.
pub fn calculate_risk_score(patterns: &[LegacyPattern]) -> u32 {
    let total_penalty: f64 = patterns
        .iter()
        .map(|p| (severity_weight(p.severity) * category_multiplier(p.category)).min(MAX_PATTERN_PENALTY))
        .sum();

    (100.0 - total_penalty).round().max(0.0) as u32
}

/// Partition the score at thresholds 80/50/20.
pub fn determine_risk_band(score: u32) -> RiskBand {
    if score >= 80 {
        RiskBand {
            level: Severity::Low,
            range: "80-100".to_string(),
            description: "Low risk - codebase is relatively modern with minimal technical debt"
                .to_string(),
        }
    } else if score >= 50 {
        RiskBand {
            level: Severity::Medium,
            range: "50-79".to_string(),
            description: "Medium risk - significant modernization opportunities identified"
                .to_string(),
        }
    } else if score >= 20 {
        RiskBand {
            level: Severity::High,
            range: "20-49".to_string(),
            description: "High risk - critical technical debt requiring immediate attention"
                .to_string(),
        }
    } else {
        RiskBand {
            level: Severity::Critical,
            range: "0-19".to_string(),
            description:
                "Critical risk - severe technical debt threatening system stability and security"
                    .to_string(),
        }
    }
}

/// Sort by severity then occurrences descending; keep the top three.
pub fn identify_top_findings(patterns: &[LegacyPattern]) -> Vec<TopFinding> {
    let mut sorted: Vec<&LegacyPattern> = patterns.iter().collect();
    sorted.sort_by(|a, b| {
        b.severity
            .rank()
            .cmp(&a.severity.rank())
            .then(b.occurrences.cmp(&a.occurrences))
    });

    sorted
        .into_iter()
        .take(3)
        .map(|p| TopFinding {
            pattern: p.name.clone(),
            severity: p.severity,
            impact: impact_statement(p),
        })
        .collect()
}

fn impact_statement(pattern: &LegacyPattern) -> String {
    let n = pattern.occurrences;
    match (pattern.severity, pattern.category) {
        (Severity::Critical, PatternCategory::Security) => {
            format!("{n} critical security vulnerabilities requiring immediate remediation")
        }
        (Severity::Critical, _) => format!("{n} critical issues threatening system stability"),
        (Severity::High, PatternCategory::Architecture) => {
            format!("{n} architectural issues impeding scalability and maintainability")
        }
        (Severity::High, PatternCategory::ApiDesign) => {
            format!("{n} legacy API patterns blocking modern integration")
        }
        (Severity::High, _) => format!("{n} high-priority issues requiring near-term attention"),
        (Severity::Medium, _) => format!("{n} modernization opportunities to improve code quality"),
        (Severity::Low, _) => format!("{n} minor improvements for long-term maintainability"),
    }
}

/// Ordered, append-only recommendation list: a severity-banded opener
/// followed by condition-gated entries in a fixed order.
pub fn generate_recommendations(patterns: &[LegacyPattern], score: u32) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score < 20 {
        recommendations.push(
            "🚨 CRITICAL: Immediate executive attention required. This codebase poses significant business risk and requires emergency modernization planning."
                .to_string(),
        );
    } else if score < 50 {
        recommendations.push(
            "⚠️ HIGH PRIORITY: Schedule dedicated modernization sprint within next quarter. Technical debt is impeding velocity and increasing operational risk."
                .to_string(),
        );
    } else if score < 80 {
        recommendations.push(
            "📋 PLANNED WORK: Incorporate modernization tasks into regular sprint planning. Address high-priority items first."
                .to_string(),
        );
    } else {
        recommendations.push(
            "✅ GOOD STANDING: Codebase is relatively healthy. Focus on incremental improvements and preventing regression."
                .to_string(),
        );
    }

    let security: Vec<&LegacyPattern> = patterns
        .iter()
        .filter(|p| p.category == PatternCategory::Security)
        .collect();
    if !security.is_empty() {
        let critical_security = security
            .iter()
            .filter(|p| p.severity == Severity::Critical)
            .count();
        if critical_security > 0 {
            recommendations.push(format!(
                "🔒 SECURITY ALERT: {critical_security} critical security vulnerabilities detected. Engage security team for immediate assessment and remediation plan."
            ));
        } else {
            recommendations.push(format!(
                "🔒 Security: {} security-related patterns identified. Schedule security review and implement fixes in priority order.",
                security.len()
            ));
        }
    }

    let architecture_count = patterns
        .iter()
        .filter(|p| p.category == PatternCategory::Architecture)
        .count();
    if architecture_count > 0 {
        let god_count = patterns
            .iter()
            .filter(|p| p.id.contains("god-class") || p.id.contains("god-function"))
            .count();
        if god_count > 0 {
            recommendations.push(format!(
                "🏗️ Architecture: {god_count} god classes/functions detected. Apply SOLID principles and extract responsibilities into focused modules."
            ));
        } else {
            recommendations.push(format!(
                "🏗️ Architecture: {architecture_count} architectural improvements identified. Consider refactoring to improve modularity and testability."
            ));
        }
    }

    if let Some(soap) = patterns
        .iter()
        .find(|p| p.suggested_target == Some(SuggestedTarget::ApiNecromancer))
    {
        recommendations.push(format!(
            "⚡ API Modernization: {} SOAP/legacy API patterns detected. Use API Necromancer to generate REST endpoints with OpenAPI 3.0 specifications.",
            soap.occurrences
        ));
    }

    let ui_occurrences: usize = patterns
        .iter()
        .filter(|p| p.suggested_target == Some(SuggestedTarget::GhostUi))
        .map(|p| p.occurrences)
        .sum();
    if ui_occurrences > 0 {
        recommendations.push(format!(
            "👻 UI Modernization: {ui_occurrences} legacy UI patterns detected. Use Ghost UI Converter to transform Bootstrap/jQuery into React + Tailwind components."
        ));
    }

    let data_count = patterns
        .iter()
        .filter(|p| p.category == PatternCategory::DataAccess)
        .count();
    if data_count > 0 {
        recommendations.push(format!(
            "💾 Data Layer: {data_count} data access issues found. Implement ORM or query builder with parameterized queries to prevent SQL injection."
        ));
    }

    let perf_count = patterns
        .iter()
        .filter(|p| p.category == PatternCategory::Performance)
        .count();
    if perf_count > 0 {
        recommendations.push(format!(
            "⚡ Performance: {perf_count} performance anti-patterns detected. Profile application and address bottlenecks in high-traffic code paths."
        ));
    }

    let modernization_count = patterns
        .iter()
        .filter(|p| p.category == PatternCategory::Modernization)
        .count();
    if modernization_count > 0 && score >= 50 {
        recommendations.push(format!(
            "🔄 Modernization: {modernization_count} syntax/pattern updates available. Consider automated refactoring tools (ESLint --fix, Rector, etc.) for quick wins."
        ));
    }

    if patterns.len() > 20 {
        recommendations.push(format!(
            "📊 Strategy: High pattern count ({}) suggests systematic issues. Recommend strangler fig approach: build new alongside old, migrate incrementally, deprecate legacy.",
            patterns.len()
        ));
    }

    if recommendations.len() == 1 && score >= 80 {
        recommendations.push(
            "🎯 Continuous Improvement: Maintain code quality through regular reviews, automated testing, and staying current with framework updates."
                .to_string(),
        );
    }

    recommendations
}

/// Fixed, ordered phase skeleton; phase numbers are assigned in emission order.
pub fn generate_migration_phases(patterns: &[LegacyPattern], score: u32) -> Vec<MigrationPhase> {
    let has_critical = patterns.iter().any(|p| p.severity == Severity::Critical);
    let has_security = patterns
        .iter()
        .any(|p| p.category == PatternCategory::Security);
    let has_architecture = patterns
        .iter()
        .any(|p| p.category == PatternCategory::Architecture);
    let has_api = patterns
        .iter()
        .any(|p| p.suggested_target == Some(SuggestedTarget::ApiNecromancer));
    let has_ui = patterns
        .iter()
        .any(|p| p.suggested_target == Some(SuggestedTarget::GhostUi));

    let mut phases = Vec::new();

    if score < 80 {
        phases.push(MigrationPhase {
            phase: 1,
            name: "Stabilization & Risk Mitigation".to_string(),
            duration: if has_critical { "2-3 weeks" } else { "1-2 weeks" }.to_string(),
            activities: vec![
                if has_security {
                    "Address critical security vulnerabilities immediately".to_string()
                } else {
                    "Establish baseline metrics and monitoring".to_string()
                },
                "Implement comprehensive test coverage for critical paths".to_string(),
                "Set up CI/CD pipeline with automated quality gates".to_string(),
                "Document current architecture and dependencies".to_string(),
            ],
            deliverables: vec![
                "Security vulnerabilities remediated".to_string(),
                "Test coverage report (target: 60%+ for critical paths)".to_string(),
                "Architecture documentation".to_string(),
                "Monitoring dashboard with key metrics".to_string(),
            ],
            risks: Vec::new(),
        });
    }

    if has_api {
        phases.push(MigrationPhase {
            phase: phases.len() + 1,
            name: "API Modernization (Strangler Fig)".to_string(),
            duration: "4-6 weeks".to_string(),
            activities: vec![
                "Generate REST API specifications using API Necromancer".to_string(),
                "Implement REST façade alongside existing SOAP services".to_string(),
                "Deploy with feature flags for gradual rollout".to_string(),
                "Migrate internal consumers to REST endpoints".to_string(),
            ],
            deliverables: vec![
                "OpenAPI 3.0 specification".to_string(),
                "REST API implementation with 100% feature parity".to_string(),
                "API documentation and client SDKs".to_string(),
                "Migration guide for external consumers".to_string(),
            ],
            risks: Vec::new(),
        });
    }

    if has_ui {
        phases.push(MigrationPhase {
            phase: phases.len() + 1,
            name: "UI Modernization".to_string(),
            duration: "6-8 weeks".to_string(),
            activities: vec![
                "Convert legacy UI components using Ghost UI Converter".to_string(),
                "Implement React component library with Tailwind CSS".to_string(),
                "Establish design system and accessibility standards".to_string(),
                "Migrate pages incrementally with A/B testing".to_string(),
            ],
            deliverables: vec![
                "React component library".to_string(),
                "Tailwind CSS design system".to_string(),
                "WCAG 2.1 AA compliance certification".to_string(),
                "Performance improvement metrics (target: 40% faster load times)".to_string(),
            ],
            risks: Vec::new(),
        });
    }

    if has_architecture {
        phases.push(MigrationPhase {
            phase: phases.len() + 1,
            name: "Architecture Refactoring".to_string(),
            duration: "8-12 weeks".to_string(),
            activities: vec![
                "Decompose god classes into focused modules".to_string(),
                "Extract business logic from presentation layer".to_string(),
                "Implement dependency injection and SOLID principles".to_string(),
                "Establish clear layering (presentation, business, data)".to_string(),
            ],
            deliverables: vec![
                "Refactored codebase with improved modularity".to_string(),
                "Dependency injection container configuration".to_string(),
                "Updated architecture diagrams".to_string(),
                "Reduced cyclomatic complexity (target: <10 per function)".to_string(),
            ],
            risks: Vec::new(),
        });
    }

    phases.push(MigrationPhase {
        phase: phases.len() + 1,
        name: "Hardening & Observability".to_string(),
        duration: "2-4 weeks".to_string(),
        activities: vec![
            "Implement comprehensive logging and distributed tracing".to_string(),
            "Set up alerting for critical business metrics".to_string(),
            "Conduct load testing and performance optimization".to_string(),
            "Establish runbooks and incident response procedures".to_string(),
        ],
        deliverables: vec![
            "Observability stack (logs, metrics, traces)".to_string(),
            "SLO/SLA definitions and monitoring".to_string(),
            "Load test results and capacity planning".to_string(),
            "Production readiness checklist completed".to_string(),
        ],
        risks: Vec::new(),
    });

    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(severity: Severity, category: PatternCategory) -> LegacyPattern {
        LegacyPattern {
            id: "test-pattern".to_string(),
            name: "Test Pattern".to_string(),
            severity,
            category,
            occurrences: 1,
            locations: Vec::new(),
            modernization_path: String::new(),
            description: String::new(),
            rationale: String::new(),
            recommendation: String::new(),
            suggested_target: None,
        }
    }

    #[test]
    fn empty_pattern_set_scores_100() {
        assert_eq!(calculate_risk_score(&[]), 100);
    }

    #[test]
    fn critical_security_penalty_is_capped_at_40() {
        // 35 * 1.5 = 52.5, capped to 40
        let patterns = vec![pattern(Severity::Critical, PatternCategory::Security)];
        assert_eq!(calculate_risk_score(&patterns), 60);
    }

    #[test]
    fn score_floors_at_zero() {
        let patterns: Vec<_> = (0..5)
            .map(|_| pattern(Severity::Critical, PatternCategory::Security))
            .collect();
        assert_eq!(calculate_risk_score(&patterns), 0);
    }

    #[test]
    fn risk_band_boundaries() {
        assert_eq!(determine_risk_band(80).level, Severity::Low);
        assert_eq!(determine_risk_band(79).level, Severity::Medium);
        assert_eq!(determine_risk_band(50).level, Severity::Medium);
        assert_eq!(determine_risk_band(49).level, Severity::High);
        assert_eq!(determine_risk_band(20).level, Severity::High);
        assert_eq!(determine_risk_band(19).level, Severity::Critical);
    }

    #[test]
    fn top_findings_capped_at_three_and_sorted() {
        let mut low = pattern(Severity::Low, PatternCategory::Performance);
        low.occurrences = 50;
        let critical = pattern(Severity::Critical, PatternCategory::Security);
        let mut high_a = pattern(Severity::High, PatternCategory::Architecture);
        high_a.occurrences = 2;
        let mut high_b = pattern(Severity::High, PatternCategory::ApiDesign);
        high_b.occurrences = 9;

        let findings = identify_top_findings(&[low, critical.clone(), high_a, high_b]);
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[1].severity, Severity::High);
        // Higher occurrence count wins within the same severity.
        assert!(findings[1].impact.starts_with('9'));
    }

    #[test]
    fn top_findings_empty_iff_no_patterns() {
        assert!(identify_top_findings(&[]).is_empty());
        assert_eq!(
            identify_top_findings(&[pattern(Severity::Low, PatternCategory::Performance)]).len(),
            1
        );
    }

    #[test]
    fn healthy_score_gets_continuous_improvement_note() {
        let recs = generate_recommendations(&[], 100);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("GOOD STANDING"));
        assert!(recs[1].contains("Continuous Improvement"));
    }

    #[test]
    fn critical_security_triggers_alert() {
        let patterns = vec![pattern(Severity::Critical, PatternCategory::Security)];
        let score = calculate_risk_score(&patterns);
        let recs = generate_recommendations(&patterns, score);
        assert!(recs.iter().any(|r| r.contains("SECURITY ALERT")));
    }

    #[test]
    fn hardening_phase_is_always_last() {
        let phases = generate_migration_phases(&[], 100);
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].name, "Hardening & Observability");
        assert_eq!(phases[0].phase, 1);

        let mut soap = pattern(Severity::High, PatternCategory::ApiDesign);
        soap.suggested_target = Some(SuggestedTarget::ApiNecromancer);
        let phases = generate_migration_phases(&[soap], 60);
        assert_eq!(phases.len(), 3);
        assert_eq!(phases[0].name, "Stabilization & Risk Mitigation");
        assert_eq!(phases[1].name, "API Modernization (Strangler Fig)");
        assert_eq!(phases.last().unwrap().name, "Hardening & Observability");
        let numbers: Vec<usize> = phases.iter().map(|p| p.phase).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
