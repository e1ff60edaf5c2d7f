// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod soap;

// Re-export commonly used types
pub use crate::core::{
    Chamber, ComplexityMetrics, Confidence, ExhumeError, ExhumeResult, LegacyPattern,
    MigrationPhase, PatternCategory, PatternLocation, ResurrectionRoute, RiskBand, RiskReport,
    Severity, SourceArtifact, SuggestedTarget, TopFinding,
};

pub use crate::analysis::{
    analyze_artifacts, analyze_complexity, calculate_risk_score, detect_patterns,
    determine_resurrection_routes, determine_risk_band, generate_migration_phases,
    generate_recommendations, identify_top_findings, DETECTION_RULES,
};

pub use crate::soap::{
    convert_soap_to_rest, extract_complex_types, extract_service_info, parse_wsdl, AuthStrategy,
    ConversionError, ConversionOptions, ConversionResult, HttpMethod, OpenApiSpec, ParseError,
    RestEndpoint, TargetFramework, WsdlComplexType, WsdlMessage, WsdlOperation,
};
