//! Function-size statistics, independent of the rule catalog.

use crate::core::{ComplexityMetrics, SourceArtifact};
use once_cell::sync::Lazy;
use regex::Regex;

/// Character length beyond which a function block counts as a god function.
const GOD_FUNCTION_THRESHOLD: usize = 500;

// Keyword plus balanced-looking braces (JS-style) or a def header (Python).
// Non-greedy body match is a heuristic, not a parser: nested braces cut the
// block short, which is acceptable for descriptive statistics.
static FUNCTION_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)function\s+\w+\s*\([^)]*\)\s*\{.*?\}|def\s+\w+\s*\([^)]*\):").unwrap()
});

/// Measure average/maximum function-block length in characters and count
/// blocks exceeding the god-function threshold.
pub fn analyze_complexity(artifacts: &[SourceArtifact]) -> ComplexityMetrics {
    let mut total_functions = 0usize;
    let mut total_length = 0usize;
    let mut max_length = 0usize;
    let mut god_functions = 0usize;

    for artifact in artifacts {
        for m in FUNCTION_BLOCK.find_iter(&artifact.content) {
            let length = m.as_str().chars().count();
            total_functions += 1;
            total_length += length;
            max_length = max_length.max(length);
            if length > GOD_FUNCTION_THRESHOLD {
                god_functions += 1;
            }
        }
    }

    ComplexityMetrics {
        avg_function_length: if total_functions > 0 {
            (total_length as f64 / total_functions as f64).round() as usize
        } else {
            0
        },
        max_function_length: max_length,
        god_functions,
    }
}
