//! Pattern detection: fold the rule catalog over a set of source artifacts.

use crate::analysis::catalog::{DetectionRule, DETECTION_RULES};
use crate::core::{LegacyPattern, PatternLocation, SourceArtifact};
use std::collections::HashMap;

const SNIPPET_MAX_CHARS: usize = 100;

/// Scan all artifacts against the rule catalog and aggregate matches into
/// one `LegacyPattern` per distinct rule triggered.
///
/// `occurrences` counts raw whole-content matches; `locations` is built by a
/// separate per-line pass and can legitimately disagree for rules whose
/// pattern spans lines. Both passes are kept as-is; callers must not assume
/// `occurrences == locations.len()`.
pub fn detect_patterns(artifacts: &[SourceArtifact]) -> Vec<LegacyPattern> {
    let mut patterns: Vec<LegacyPattern> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for artifact in artifacts {
        for rule in DETECTION_RULES.iter() {
            let occurrences = rule.pattern.find_iter(&artifact.content).count();
            if occurrences == 0 {
                continue;
            }

            let locations = scan_lines(rule, artifact);
            let id = rule.id();

            match index.get(&id) {
                Some(&i) => {
                    patterns[i].occurrences += occurrences;
                    patterns[i].locations.extend(locations);
                }
                None => {
                    index.insert(id.clone(), patterns.len());
                    patterns.push(LegacyPattern {
                        id,
                        name: rule.name.to_string(),
                        severity: rule.severity,
                        category: rule.category,
                        occurrences,
                        locations,
                        modernization_path: rule.modernization_path.to_string(),
                        description: rule.description.to_string(),
                        rationale: rule.rationale.to_string(),
                        recommendation: rule.recommendation.to_string(),
                        suggested_target: rule.suggested_target,
                    });
                }
            }
        }
    }

    patterns
}

/// Re-test the rule against each line in isolation to record locations.
fn scan_lines(rule: &DetectionRule, artifact: &SourceArtifact) -> Vec<PatternLocation> {
    artifact
        .content
        .lines()
        .enumerate()
        .filter(|(_, line)| rule.pattern.is_match(line))
        .map(|(idx, line)| PatternLocation {
            file: artifact.path.clone(),
            line: idx + 1,
            snippet: Some(truncate_chars(line.trim(), SNIPPET_MAX_CHARS)),
        })
        .collect()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
