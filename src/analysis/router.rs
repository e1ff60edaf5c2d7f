//! Routes detected patterns toward downstream transformation chambers.

use crate::core::{Chamber, Confidence, LegacyPattern, ResurrectionRoute, SuggestedTarget};

const UI_HIGH_CONFIDENCE_PATTERNS: usize = 3;
const JS_HIGH_CONFIDENCE_PATTERNS: usize = 5;

const JS_PATTERN_IDS: &[&str] = &[
    "var-declarations",
    "direct-innerhtml-manipulation",
    "direct-dom-manipulation",
];

/// Emit routing suggestions for the chambers that can act on the findings,
/// sorted ascending by priority.
pub fn determine_resurrection_routes(patterns: &[LegacyPattern]) -> Vec<ResurrectionRoute> {
    let mut routes = Vec::new();

    let soap: Vec<&LegacyPattern> = patterns
        .iter()
        .filter(|p| p.suggested_target == Some(SuggestedTarget::ApiNecromancer))
        .collect();
    if let Some(first) = soap.first() {
        routes.push(ResurrectionRoute {
            chamber: Chamber::ApiNecromancer,
            reason: format!(
                "{} SOAP/WSDL patterns detected - ready for REST conversion",
                first.occurrences
            ),
            priority: 1,
            confidence: Confidence::High,
        });
    }

    let ui: Vec<&LegacyPattern> = patterns
        .iter()
        .filter(|p| p.suggested_target == Some(SuggestedTarget::GhostUi))
        .collect();
    if !ui.is_empty() {
        let total: usize = ui.iter().map(|p| p.occurrences).sum();
        routes.push(ResurrectionRoute {
            chamber: Chamber::GhostUi,
            reason: format!("{total} legacy UI patterns detected - convert to React + Tailwind"),
            priority: 2,
            confidence: if ui.len() >= UI_HIGH_CONFIDENCE_PATTERNS {
                Confidence::High
            } else {
                Confidence::Medium
            },
        });
    }

    let js: Vec<&LegacyPattern> = patterns
        .iter()
        .filter(|p| JS_PATTERN_IDS.contains(&p.id.as_str()))
        .collect();
    if !js.is_empty() {
        let total: usize = js.iter().map(|p| p.occurrences).sum();
        routes.push(ResurrectionRoute {
            chamber: Chamber::Reanimator,
            reason: format!("{total} legacy JavaScript patterns - modernize syntax and practices"),
            priority: 3,
            confidence: if js.len() >= JS_HIGH_CONFIDENCE_PATTERNS {
                Confidence::High
            } else {
                Confidence::Medium
            },
        });
    }

    routes.sort_by_key(|r| r.priority);
    routes
}
