//! OpenAPI 3.0 document assembly from synthesized endpoints and extracted
//! complex types. Produces a complete serializable document; performs no
//! validation against the OpenAPI meta-schema.

use crate::soap::parser::WsdlComplexType;
use crate::soap::transformer::RestEndpoint;
use crate::soap::{AuthStrategy, ConversionOptions};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiSpec {
    pub openapi: String,
    pub info: ApiInfo,
    pub servers: Vec<ApiServer>,
    pub paths: BTreeMap<String, BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ApiTag>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    pub description: String,
    pub contact: ApiContact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiContact {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiServer {
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiTag {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<BTreeMap<String, Value>>,
    #[serde(rename = "securitySchemes", skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<BTreeMap<String, Value>>,
    pub responses: BTreeMap<String, Value>,
}

/// Combine endpoints and complex types into one OpenAPI 3.0 document.
pub fn generate_openapi_spec(
    endpoints: &[RestEndpoint],
    service_name: &str,
    options: &ConversionOptions,
    complex_types: &[WsdlComplexType],
) -> OpenApiSpec {
    let mut paths: BTreeMap<String, BTreeMap<String, Value>> = BTreeMap::new();

    for endpoint in endpoints {
        let mut operation = json!({
            "operationId": endpoint.operation_id,
            "summary": endpoint.summary,
            "tags": endpoint.tags,
            "parameters": endpoint.parameters,
            "responses": endpoint.responses,
        });
        if let Some(description) = &endpoint.description {
            operation["description"] = json!(description);
        }
        if let Some(body) = &endpoint.request_body {
            operation["requestBody"] = serde_json::to_value(body).unwrap_or(Value::Null);
        }
        if options.auth_strategy != AuthStrategy::None {
            let scheme = options.auth_strategy.scheme_name();
            operation["security"] = json!([{ (scheme): [] }]);
        }

        paths
            .entry(endpoint.path.clone())
            .or_default()
            .insert(endpoint.method.as_str().to_lowercase(), operation);
    }

    let schemas: BTreeMap<String, Value> = complex_types
        .iter()
        .map(|ct| {
            let required: Vec<&String> = ct
                .properties
                .iter()
                .filter(|(_, p)| p.required)
                .map(|(name, _)| name)
                .collect();
            let mut schema = json!({
                "type": "object",
                "properties": ct.properties,
                "required": required,
            });
            if let Some(doc) = &ct.documentation {
                schema["description"] = json!(doc);
            }
            (ct.name.clone(), schema)
        })
        .collect();

    // De-duplicated tag set, first-seen order.
    let mut tags: Vec<ApiTag> = Vec::new();
    for endpoint in endpoints {
        for tag in &endpoint.tags {
            if !tags.iter().any(|t| &t.name == tag) {
                tags.push(ApiTag {
                    name: tag.clone(),
                    description: format!("Operations related to {tag}"),
                });
            }
        }
    }

    let components = if !schemas.is_empty() || options.auth_strategy != AuthStrategy::None {
        Some(Components {
            schemas: (!schemas.is_empty()).then_some(schemas),
            security_schemes: (options.auth_strategy != AuthStrategy::None).then(|| {
                let mut map = BTreeMap::new();
                map.insert(
                    options.auth_strategy.scheme_name().to_string(),
                    security_scheme(options.auth_strategy),
                );
                map
            }),
            responses: error_response_templates(),
        })
    } else {
        None
    };

    OpenApiSpec {
        openapi: "3.0.0".to_string(),
        info: ApiInfo {
            title: service_name.to_string(),
            version: "1.0.0".to_string(),
            description: "REST API converted from SOAP service. This specification follows OpenAPI 3.0 standards and includes comprehensive request/response schemas, error handling, and example payloads.".to_string(),
            contact: ApiContact {
                name: "API Support Team".to_string(),
                email: "api-support@example.com".to_string(),
            },
        },
        servers: vec![
            ApiServer {
                url: "https://api.example.com/v1".to_string(),
                description: "Production server".to_string(),
            },
            ApiServer {
                url: "https://staging-api.example.com/v1".to_string(),
                description: "Staging server".to_string(),
            },
            ApiServer {
                url: "http://localhost:3000/api".to_string(),
                description: "Development server".to_string(),
            },
        ],
        paths,
        components,
        tags: (!tags.is_empty()).then_some(tags),
    }
}

fn security_scheme(strategy: AuthStrategy) -> Value {
    match strategy {
        AuthStrategy::Bearer => json!({
            "type": "http",
            "scheme": "bearer",
            "bearerFormat": "JWT",
            "description": "JWT Bearer token authentication"
        }),
        AuthStrategy::ApiKey => json!({
            "type": "apiKey",
            "in": "header",
            "name": "X-API-Key",
            "description": "API key for authentication"
        }),
        AuthStrategy::OAuth2 => json!({
            "type": "oauth2",
            "description": "OAuth 2.0 authentication",
            "flows": {
                "authorizationCode": {
                    "authorizationUrl": "https://example.com/oauth/authorize",
                    "tokenUrl": "https://example.com/oauth/token",
                    "scopes": {
                        "read": "Read access to resources",
                        "write": "Write access to resources",
                        "admin": "Administrative access"
                    }
                }
            }
        }),
        AuthStrategy::None => json!({}),
    }
}

fn error_response_templates() -> BTreeMap<String, Value> {
    let mut responses = BTreeMap::new();
    responses.insert(
        "BadRequest".to_string(),
        json!({
            "description": "Bad request - Invalid input parameters",
            "content": { "application/json": { "schema": {
                "type": "object",
                "properties": {
                    "error": { "type": "string", "example": "INVALID_INPUT" },
                    "message": { "type": "string", "example": "The provided input is invalid" },
                    "details": { "type": "array", "items": { "type": "string" } }
                }
            }}}
        }),
    );
    responses.insert(
        "NotFound".to_string(),
        json!({
            "description": "Resource not found",
            "content": { "application/json": { "schema": {
                "type": "object",
                "properties": {
                    "error": { "type": "string", "example": "NOT_FOUND" },
                    "message": { "type": "string", "example": "The requested resource was not found" }
                }
            }}}
        }),
    );
    responses.insert(
        "InternalError".to_string(),
        json!({
            "description": "Internal server error",
            "content": { "application/json": { "schema": {
                "type": "object",
                "properties": {
                    "error": { "type": "string", "example": "INTERNAL_ERROR" },
                    "message": { "type": "string", "example": "An unexpected error occurred" }
                }
            }}}
        }),
    );
    responses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::transformer::transform_to_rest_endpoints;
    use crate::soap::parser::{WsdlMessage, WsdlOperation, WsdlTypeProperty};

    fn sample_endpoints() -> Vec<RestEndpoint> {
        let ops = vec![
            WsdlOperation {
                name: "GetUser".to_string(),
                input: WsdlMessage {
                    name: "GetUserRequest".to_string(),
                    parts: Vec::new(),
                },
                output: WsdlMessage {
                    name: "GetUserResponse".to_string(),
                    parts: Vec::new(),
                },
                fault: None,
                documentation: None,
                soap_action: None,
            },
            WsdlOperation {
                name: "CreateUser".to_string(),
                input: WsdlMessage {
                    name: "CreateUserRequest".to_string(),
                    parts: Vec::new(),
                },
                output: WsdlMessage {
                    name: "CreateUserResponse".to_string(),
                    parts: Vec::new(),
                },
                fault: None,
                documentation: None,
                soap_action: None,
            },
        ];
        transform_to_rest_endpoints(&ops, false)
    }

    #[test]
    fn groups_operations_by_path() {
        let options = ConversionOptions::default();
        let spec = generate_openapi_spec(&sample_endpoints(), "UserService", &options, &[]);
        assert_eq!(spec.openapi, "3.0.0");
        assert_eq!(spec.info.title, "UserService");
        assert!(spec.paths["/users/{id}"].contains_key("get"));
        assert!(spec.paths["/users"].contains_key("post"));
    }

    #[test]
    fn bearer_auth_adds_scheme_and_per_operation_security() {
        let options = ConversionOptions::default();
        assert_eq!(options.auth_strategy, AuthStrategy::Bearer);
        let spec = generate_openapi_spec(&sample_endpoints(), "S", &options, &[]);
        let components = spec.components.unwrap();
        let schemes = components.security_schemes.unwrap();
        assert_eq!(schemes["bearer"]["scheme"], json!("bearer"));
        let op = &spec.paths["/users"]["post"];
        assert_eq!(op["security"], json!([{ "bearer": [] }]));
    }

    #[test]
    fn none_auth_omits_security() {
        let options = ConversionOptions {
            auth_strategy: AuthStrategy::None,
            ..Default::default()
        };
        let spec = generate_openapi_spec(&sample_endpoints(), "S", &options, &[]);
        let op = &spec.paths["/users"]["post"];
        assert!(op.get("security").is_none());
        // No schemas either, so components collapse entirely.
        assert!(spec.components.is_none());
    }

    #[test]
    fn complex_types_become_schemas_with_required_lists() {
        let mut properties = std::collections::BTreeMap::new();
        properties.insert(
            "userId".to_string(),
            WsdlTypeProperty {
                type_name: "string".to_string(),
                required: true,
                is_array: false,
            },
        );
        properties.insert(
            "nickname".to_string(),
            WsdlTypeProperty {
                type_name: "string".to_string(),
                required: false,
                is_array: false,
            },
        );
        let types = vec![WsdlComplexType {
            name: "User".to_string(),
            properties,
            documentation: None,
        }];
        let options = ConversionOptions::default();
        let spec = generate_openapi_spec(&sample_endpoints(), "S", &options, &types);
        let schemas = spec.components.unwrap().schemas.unwrap();
        assert_eq!(schemas["User"]["required"], json!(["userId"]));
        assert_eq!(
            schemas["User"]["properties"]["nickname"]["type"],
            json!("string")
        );
    }

    #[test]
    fn tags_are_deduplicated() {
        let options = ConversionOptions::default();
        let spec = generate_openapi_spec(&sample_endpoints(), "S", &options, &[]);
        let tags = spec.tags.unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "user");
    }
}
