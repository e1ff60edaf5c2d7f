//! SOAP→REST conversion pipeline: WSDL structural parsing, REST synthesis,
//! and OpenAPI assembly, plus the migration plan and advisory outputs that
//! accompany a conversion.

pub mod openapi;
pub mod parser;
pub mod transformer;

pub use openapi::{generate_openapi_spec, OpenApiSpec};
pub use parser::{
    extract_complex_types, extract_service_info, extract_service_name, parse_wsdl, ParseError,
    WsdlComplexType, WsdlMessage, WsdlOperation, WsdlPart, WsdlService, WsdlTypeProperty,
};
pub use transformer::{transform_to_rest_endpoints, HttpMethod, RestEndpoint, RestParameter};

use crate::core::MigrationPhase;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operation count beyond which a service is flagged as oversized.
const LARGE_SERVICE_THRESHOLD: usize = 20;
/// Complex-type count beyond which a DDD-refactoring suggestion is emitted.
const LARGE_TYPE_MODEL_THRESHOLD: usize = 10;

/// A conversion call fails as a whole when the WSDL cannot be parsed.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("SOAP to REST conversion failed: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetFramework {
    Express,
    Nextjs,
    Fastapi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    None,
    Bearer,
    #[value(name = "apikey")]
    ApiKey,
    #[value(name = "oauth2")]
    OAuth2,
}

impl AuthStrategy {
    pub fn scheme_name(&self) -> &'static str {
        match self {
            AuthStrategy::None => "none",
            AuthStrategy::Bearer => "bearer",
            AuthStrategy::ApiKey => "apikey",
            AuthStrategy::OAuth2 => "oauth2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    pub generate_stubs: bool,
    pub target_framework: TargetFramework,
    pub auth_strategy: AuthStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub include_examples: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            generate_stubs: false,
            target_framework: TargetFramework::Nextjs,
            auth_strategy: AuthStrategy::Bearer,
            service_name: None,
            include_examples: true,
        }
    }
}

/// Full conversion output: a valid (possibly empty) result plus advisory
/// warnings and cross-chamber suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub open_api_spec: OpenApiSpec,
    pub endpoints: Vec<RestEndpoint>,
    pub complex_types: Vec<WsdlComplexType>,
    pub migration_plan: Vec<MigrationPhase>,
    pub warnings: Vec<String>,
    pub cross_chamber_suggestions: Vec<String>,
}

/// Convert a WSDL document to a REST API description.
///
/// Malformed XML is fatal; a well-formed document with no recognizable port
/// types produces an empty endpoint set plus a warning.
pub fn convert_soap_to_rest(
    wsdl: &str,
    options: &ConversionOptions,
) -> Result<ConversionResult, ConversionError> {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    let operations = parse_wsdl(wsdl)?;
    debug!("parsed {} WSDL operations", operations.len());

    if operations.is_empty() {
        warn!("no operations found in WSDL document");
        warnings.push("No operations found in WSDL document. Verify WSDL structure.".to_string());
    }
    if operations.len() > LARGE_SERVICE_THRESHOLD {
        warnings.push(format!(
            "Large service detected ({} operations). Consider splitting into multiple microservices.",
            operations.len()
        ));
    }

    let service_name = options
        .service_name
        .clone()
        .unwrap_or_else(|| extract_service_name(wsdl));

    let complex_types = extract_complex_types(wsdl);
    if !complex_types.is_empty() {
        warnings.push(format!(
            "{} complex types detected. Review generated schemas for accuracy.",
            complex_types.len()
        ));
    }

    let endpoints = transform_to_rest_endpoints(&operations, options.include_examples);
    let open_api_spec = generate_openapi_spec(&endpoints, &service_name, options, &complex_types);
    let migration_plan = generate_migration_plan(operations.len());

    let lower = wsdl.to_lowercase();
    if lower.contains("html") || lower.contains("ui") {
        suggestions.push(
            "UI patterns detected in service. Consider using Ghost UI Converter for frontend modernization."
                .to_string(),
        );
    }
    if operations.iter().any(|op| {
        let name = op.name.to_lowercase();
        name.contains("legacy") || name.contains("old")
    }) {
        suggestions.push(
            "Legacy naming detected. Use Legacy Reanimator to analyze backend implementation for additional modernization opportunities."
                .to_string(),
        );
    }
    if complex_types.len() > LARGE_TYPE_MODEL_THRESHOLD {
        suggestions.push(
            "Complex data model detected. Consider domain-driven design refactoring for better maintainability."
                .to_string(),
        );
    }

    Ok(ConversionResult {
        open_api_spec,
        endpoints,
        complex_types,
        migration_plan,
        warnings,
        cross_chamber_suggestions: suggestions,
    })
}

/// Fixed four-phase strangler-fig migration plan; durations scale with the
/// operation count.
fn generate_migration_plan(operation_count: usize) -> Vec<MigrationPhase> {
    let large = operation_count > 10;

    vec![
        MigrationPhase {
            phase: 1,
            name: "Mirror SOAP via REST Façade".to_string(),
            duration: if large { "3-4 weeks" } else { "2-3 weeks" }.to_string(),
            activities: vec![
                "Implement REST API endpoints alongside existing SOAP service".to_string(),
                "Create façade layer that translates REST calls to SOAP internally".to_string(),
                "Deploy to staging environment with feature flags".to_string(),
                "Establish monitoring and observability for both APIs".to_string(),
            ],
            deliverables: vec![
                "REST API with 100% feature parity to SOAP".to_string(),
                "OpenAPI 3.0 specification and documentation".to_string(),
                "Monitoring dashboard with comparative metrics".to_string(),
                "Feature flag configuration for gradual rollout".to_string(),
            ],
            risks: vec![
                "Performance overhead from translation layer".to_string(),
                "Potential data mapping inconsistencies".to_string(),
                "Increased infrastructure costs during parallel operation".to_string(),
            ],
        },
        MigrationPhase {
            phase: 2,
            name: "Contract Testing & Consumer Validation".to_string(),
            duration: "2-3 weeks".to_string(),
            activities: vec![
                "Implement contract tests using OpenAPI specification".to_string(),
                "Validate REST API behavior matches SOAP semantics".to_string(),
                "Conduct load testing and performance benchmarking".to_string(),
                "Engage with internal consumers for early feedback".to_string(),
            ],
            deliverables: vec![
                "Comprehensive contract test suite (target: 95%+ coverage)".to_string(),
                "Performance benchmarks (REST vs SOAP comparison)".to_string(),
                "Consumer validation reports".to_string(),
                "Updated API documentation with migration guides".to_string(),
            ],
            risks: vec![
                "Semantic differences between SOAP and REST".to_string(),
                "Performance degradation under load".to_string(),
                "Consumer integration issues".to_string(),
            ],
        },
        MigrationPhase {
            phase: 3,
            name: "Gradual Consumer Migration".to_string(),
            duration: if large { "8-12 weeks" } else { "4-6 weeks" }.to_string(),
            activities: vec![
                "Migrate internal consumers to REST API incrementally".to_string(),
                "Implement traffic shadowing to compare SOAP vs REST".to_string(),
                "Monitor error rates and performance metrics".to_string(),
                "Provide migration support and troubleshooting".to_string(),
            ],
            deliverables: vec![
                "Consumer migration tracker (target: 95%+ migrated)".to_string(),
                "Traffic analysis reports".to_string(),
                "Zero critical incidents during migration".to_string(),
                "Client SDK libraries for major languages".to_string(),
            ],
            risks: vec![
                "Consumer resistance to change".to_string(),
                "Unexpected edge cases in production".to_string(),
                "Rollback complexity if issues arise".to_string(),
            ],
        },
        MigrationPhase {
            phase: 4,
            name: "SOAP Deprecation & Backend Refactoring".to_string(),
            duration: "3-4 weeks".to_string(),
            activities: vec![
                "Announce SOAP deprecation timeline (6-month notice)".to_string(),
                "Migrate remaining consumers with dedicated support".to_string(),
                "Remove SOAP façade layer and refactor backend".to_string(),
                "Decommission SOAP infrastructure".to_string(),
            ],
            deliverables: vec![
                "100% consumer migration completed".to_string(),
                "SOAP services decommissioned".to_string(),
                "Refactored backend without translation layer".to_string(),
                "Infrastructure cost savings report (target: 30-40% reduction)".to_string(),
            ],
            risks: vec![
                "Forgotten consumers causing production issues".to_string(),
                "Legacy documentation still referencing SOAP".to_string(),
                "Compliance/audit requirements for API changes".to_string(),
            ],
        },
    ]
}
