//! Common type definitions used across the codebase

pub mod errors;

pub use errors::{ExhumeError, ExhumeResult};

use serde::{Deserialize, Serialize};

/// Severity levels for detected patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Ordering rank used when sorting findings (critical > high > medium > low)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Categories a detection rule can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternCategory {
    Security,
    Performance,
    Maintainability,
    Modernization,
    Architecture,
    DataAccess,
    UiFramework,
    ApiDesign,
}

impl PatternCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            PatternCategory::Security => "security",
            PatternCategory::Performance => "performance",
            PatternCategory::Maintainability => "maintainability",
            PatternCategory::Modernization => "modernization",
            PatternCategory::Architecture => "architecture",
            PatternCategory::DataAccess => "data-access",
            PatternCategory::UiFramework => "ui-framework",
            PatternCategory::ApiDesign => "api-design",
        }
    }
}

/// Downstream transformation chamber a rule can point toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestedTarget {
    ApiNecromancer,
    GhostUi,
    PlatformRefactor,
}

/// A single source artifact submitted for analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceArtifact {
    pub path: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SourceArtifact {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind: kind.into(),
        }
    }
}

/// One matched line within an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternLocation {
    pub file: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Aggregated report of all occurrences of one detection rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPattern {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub category: PatternCategory,
    pub occurrences: usize,
    pub locations: Vec<PatternLocation>,
    pub modernization_path: String,
    pub description: String,
    pub rationale: String,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_target: Option<SuggestedTarget>,
}

/// Qualitative band derived from the numeric risk score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBand {
    pub level: Severity,
    pub range: String,
    pub description: String,
}

/// One of the (at most three) highest-impact findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopFinding {
    pub pattern: String,
    pub severity: Severity,
    pub impact: String,
}

/// A suggested route into a downstream transformation chamber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResurrectionRoute {
    pub chamber: Chamber,
    pub reason: String,
    pub priority: u8,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chamber {
    Reanimator,
    ApiNecromancer,
    GhostUi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One phase of a generated migration plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPhase {
    pub phase: usize,
    pub name: String,
    pub duration: String,
    pub activities: Vec<String>,
    pub deliverables: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub risks: Vec<String>,
}

/// Descriptive function-size statistics, independent of the rule catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetrics {
    pub avg_function_length: usize,
    pub max_function_length: usize,
    pub god_functions: usize,
}

/// Full analysis result for one invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub overall_score: u32,
    pub risk_band: RiskBand,
    pub top_findings: Vec<TopFinding>,
    pub patterns_detected: Vec<LegacyPattern>,
    pub recommendations: Vec<String>,
    pub resurrection_routes: Vec<ResurrectionRoute>,
    pub migration_phases: Vec<MigrationPhase>,
    pub analyzed_files: usize,
    pub total_lines: usize,
    pub complexity_metrics: ComplexityMetrics,
}
