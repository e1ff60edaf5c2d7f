//! REST synthesis: map each WSDL operation to exactly one HTTP method, path,
//! and parameter/schema shape via naming heuristics.
//!
//! The heuristics form an ordered decision table with first-match-wins
//! semantics; keep `DECISION_TABLE` as the single source of that ordering.

use crate::soap::parser::{WsdlMessage, WsdlOperation};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "PATCH")]
    Patch,
    #[serde(rename = "DELETE")]
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn action_verb(&self) -> &'static str {
        match self {
            HttpMethod::Get => "Retrieve",
            HttpMethod::Post => "Create",
            HttpMethod::Put => "Update",
            HttpMethod::Patch => "Modify",
            HttpMethod::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestParameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub required: bool,
    pub content: BTreeMap<String, Value>,
}

/// One synthesized REST endpoint; strict 1:1 with its source operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestEndpoint {
    pub method: HttpMethod,
    pub path: String,
    pub operation_id: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<RestParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<String, Value>,
    pub tags: Vec<String>,
    #[serde(skip)]
    pub has_fault: bool,
}

struct Route {
    method: HttpMethod,
    path: String,
    parameters: Vec<RestParameter>,
}

type Predicate = fn(&str) -> bool;
type Outcome = fn(&str) -> Route;

/// Priority-ordered (predicate, outcome) pairs; evaluated in sequence,
/// first match wins. The trailing fallback is appended in `route_operation`.
static DECISION_TABLE: &[(Predicate, Outcome)] = &[
    (is_get_single, get_single),
    (is_get_collection, get_collection),
    (is_create, post_collection),
    (is_full_update, put_by_id),
    (is_partial_update, patch_by_id),
    (is_delete, delete_by_id),
    (is_transfer, post_collection),
];

fn is_get_single(name: &str) -> bool {
    static GET_CAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i:get)[A-Z]").unwrap());
    let lower = name.to_lowercase();
    GET_CAP.is_match(name) && !lower.contains("list") && !lower.contains("all")
}

fn is_get_collection(name: &str) -> bool {
    starts_with_any(name, &["list", "get", "find", "search", "query"])
}

fn is_create(name: &str) -> bool {
    starts_with_any(name, &["create", "add", "insert", "register", "new"])
}

fn is_full_update(name: &str) -> bool {
    starts_with_any(name, &["update", "modify", "edit", "replace"])
}

fn is_partial_update(name: &str) -> bool {
    starts_with_any(name, &["patch", "set", "change"]) || name.to_lowercase().contains("status")
}

fn is_delete(name: &str) -> bool {
    starts_with_any(name, &["delete", "remove", "close", "cancel"])
}

fn is_transfer(name: &str) -> bool {
    starts_with_any(name, &["transfer", "move", "send"])
}

fn starts_with_any(name: &str, prefixes: &[&str]) -> bool {
    let lower = name.to_lowercase();
    prefixes.iter().any(|p| lower.starts_with(p))
}

fn get_single(name: &str) -> Route {
    let resource = extract_resource_name(name);
    Route {
        method: HttpMethod::Get,
        path: format!("/{}/{{id}}", pluralize(&resource)),
        parameters: vec![id_parameter(&resource)],
    }
}

fn get_collection(name: &str) -> Route {
    let resource = extract_resource_name(name);
    Route {
        method: HttpMethod::Get,
        path: format!("/{}", pluralize(&resource)),
        parameters: vec![
            RestParameter {
                name: "limit".to_string(),
                location: "query".to_string(),
                required: false,
                schema: json!({"type": "integer", "format": "int32"}),
                description: Some("Maximum number of results to return".to_string()),
            },
            RestParameter {
                name: "offset".to_string(),
                location: "query".to_string(),
                required: false,
                schema: json!({"type": "integer", "format": "int32"}),
                description: Some("Number of results to skip".to_string()),
            },
        ],
    }
}

fn post_collection(name: &str) -> Route {
    let resource = extract_resource_name(name);
    Route {
        method: HttpMethod::Post,
        path: format!("/{}", pluralize(&resource)),
        parameters: Vec::new(),
    }
}

fn put_by_id(name: &str) -> Route {
    let resource = extract_resource_name(name);
    Route {
        method: HttpMethod::Put,
        path: format!("/{}/{{id}}", pluralize(&resource)),
        parameters: vec![id_parameter(&resource)],
    }
}

fn patch_by_id(name: &str) -> Route {
    let resource = extract_resource_name(name);
    let path = match extract_field_name(name) {
        Some(field) => format!("/{}/{{id}}/{}", pluralize(&resource), field),
        None => format!("/{}/{{id}}", pluralize(&resource)),
    };
    Route {
        method: HttpMethod::Patch,
        path,
        parameters: vec![id_parameter(&resource)],
    }
}

fn delete_by_id(name: &str) -> Route {
    let resource = extract_resource_name(name);
    Route {
        method: HttpMethod::Delete,
        path: format!("/{}/{{id}}", pluralize(&resource)),
        parameters: vec![id_parameter(&resource)],
    }
}

fn id_parameter(resource: &str) -> RestParameter {
    RestParameter {
        name: "id".to_string(),
        location: "path".to_string(),
        required: true,
        schema: json!({"type": "string"}),
        description: Some(format!("{resource} identifier")),
    }
}

fn route_operation(name: &str) -> Route {
    for (predicate, outcome) in DECISION_TABLE {
        if predicate(name) {
            return outcome(name);
        }
    }
    Route {
        method: HttpMethod::Post,
        path: format!("/operations/{}", to_kebab_case(name)),
        parameters: Vec::new(),
    }
}

/// Transform parsed operations into REST endpoints, order-preserving.
pub fn transform_to_rest_endpoints(
    operations: &[WsdlOperation],
    include_examples: bool,
) -> Vec<RestEndpoint> {
    operations
        .iter()
        .map(|op| {
            let route = route_operation(&op.name);
            let resource = extract_resource_name(&op.name);
            let wants_body =
                route.method != HttpMethod::Get && route.method != HttpMethod::Delete;

            RestEndpoint {
                summary: op
                    .documentation
                    .clone()
                    .unwrap_or_else(|| generate_summary(&op.name, route.method)),
                description: op
                    .documentation
                    .as_ref()
                    .map(|_| format!("Converted from SOAP operation: {}", op.name)),
                operation_id: to_camel_case(&op.name),
                request_body: wants_body.then(|| build_request_body(op, include_examples)),
                responses: build_responses(op, &resource, include_examples),
                tags: vec![resource],
                has_fault: op.fault.is_some(),
                method: route.method,
                path: route.path,
                parameters: route.parameters,
            }
        })
        .collect()
}

fn generate_summary(name: &str, method: HttpMethod) -> String {
    format!("{} {}", method.action_verb(), extract_resource_name(name))
}

const VERB_PREFIXES: &[&str] = &[
    "get", "create", "add", "insert", "update", "modify", "edit", "delete", "remove", "list",
    "find", "search", "query", "transfer", "send", "close", "cancel", "register", "new", "patch",
    "set", "change",
];

const NOUN_SUFFIXES: &[&str] = &["request", "response", "operation", "service"];

/// Strip verb prefixes and noun suffixes, split camelCase, take the first
/// word, kebab-case it.
pub fn extract_resource_name(operation_name: &str) -> String {
    let mut resource = operation_name.to_string();

    let lower = resource.to_lowercase();
    if let Some(prefix) = VERB_PREFIXES.iter().find(|p| lower.starts_with(*p)) {
        resource = resource[prefix.len()..].to_string();
    }

    let lower = resource.to_lowercase();
    if let Some(suffix) = NOUN_SUFFIXES.iter().find(|s| lower.ends_with(*s)) {
        resource = resource[..resource.len() - suffix.len()].to_string();
    }

    let first_word = split_camel_case(&resource)
        .into_iter()
        .next()
        .unwrap_or_else(|| "resource".to_string());

    to_kebab_case(&first_word)
}

fn split_camel_case(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in s.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        if !c.is_whitespace() {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn extract_field_name(operation_name: &str) -> Option<&'static str> {
    let lower = operation_name.to_lowercase();
    if lower.contains("status") {
        Some("status")
    } else if lower.contains("password") {
        Some("password")
    } else if lower.contains("email") {
        Some("email")
    } else if lower.contains("name") {
        Some("name")
    } else {
        None
    }
}

/// Simplified English pluralization.
pub fn pluralize(word: &str) -> String {
    if word.ends_with('s') || word.ends_with('x') || word.ends_with("ch") || word.ends_with("sh") {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        let penultimate = stem.chars().last();
        if penultimate.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

fn build_request_body(operation: &WsdlOperation, include_examples: bool) -> RequestBody {
    let (schema, example) = message_schema(&operation.input, true, "parameter");

    let mut media = json!({ "schema": schema });
    if include_examples {
        media["examples"] = json!({
            "default": { "summary": "Example request", "value": example }
        });
    }

    let mut content = BTreeMap::new();
    content.insert("application/json".to_string(), media);

    RequestBody {
        required: true,
        content,
    }
}

fn build_responses(
    operation: &WsdlOperation,
    resource: &str,
    include_examples: bool,
) -> BTreeMap<String, Value> {
    let (schema, example) = message_schema(&operation.output, false, "value");

    let mut success = json!({
        "description": "Successful operation",
        "content": { "application/json": { "schema": schema } }
    });
    if include_examples {
        success["content"]["application/json"]["examples"] = json!({
            "success": { "summary": "Successful response", "value": example }
        });
    }

    let mut responses = BTreeMap::new();
    responses.insert("200".to_string(), success);
    responses.insert(
        "400".to_string(),
        json!({
            "description": "Bad request - Invalid input parameters",
            "content": { "application/json": { "schema": {
                "type": "object",
                "properties": {
                    "error": { "type": "string" },
                    "message": { "type": "string" },
                    "details": { "type": "array", "items": { "type": "string" } }
                }
            }}}
        }),
    );
    responses.insert(
        "404".to_string(),
        json!({
            "description": format!("{resource} not found"),
            "content": { "application/json": { "schema": {
                "type": "object",
                "properties": {
                    "error": { "type": "string" },
                    "message": { "type": "string" }
                }
            }}}
        }),
    );
    responses.insert(
        "500".to_string(),
        json!({
            "description": "Internal server error",
            "content": { "application/json": { "schema": {
                "type": "object",
                "properties": {
                    "error": { "type": "string" },
                    "message": { "type": "string" }
                }
            }}}
        }),
    );

    if operation.fault.is_some() {
        responses.insert(
            "422".to_string(),
            json!({
                "description": "Business logic error",
                "content": { "application/json": { "schema": {
                    "type": "object",
                    "properties": {
                        "faultCode": { "type": "string" },
                        "faultString": { "type": "string" }
                    }
                }}}
            }),
        );
    }

    responses
}

/// Build an object schema (and an example payload) from message parts.
/// Required-ness defaults to true unless the part name says "optional".
fn message_schema(message: &WsdlMessage, track_required: bool, role: &str) -> (Value, Value) {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();
    let mut example = serde_json::Map::new();

    for part in &message.parts {
        let prop_name = to_camel_case(&part.name);
        properties.insert(
            prop_name.clone(),
            json!({
                "type": map_wsdl_type(&part.type_name),
                "description": format!("{} {role}", part.name)
            }),
        );
        if track_required && !part.name.to_lowercase().contains("optional") {
            required.push(Value::String(prop_name.clone()));
        }
        example.insert(prop_name, example_value(&part.type_name, &part.name));
    }

    let mut schema = json!({ "type": "object", "properties": properties });
    if track_required {
        schema["required"] = Value::Array(required);
    }

    (schema, Value::Object(example))
}

fn map_wsdl_type(wsdl_type: &str) -> &'static str {
    let lower = wsdl_type.to_lowercase();
    if lower.contains("string") {
        "string"
    } else if lower.contains("int") || lower.contains("long") || lower.contains("short") {
        "integer"
    } else if lower.contains("decimal") || lower.contains("float") || lower.contains("double") {
        "number"
    } else if lower.contains("bool") {
        "boolean"
    } else if lower.contains("date") || lower.contains("time") {
        "string"
    } else if lower.contains("array") || lower.contains("list") {
        "array"
    } else {
        "object"
    }
}

/// Fixed name/type inference table for example payload values.
fn example_value(type_name: &str, part_name: &str) -> Value {
    let lower_name = part_name.to_lowercase();
    let lower_type = type_name.to_lowercase();

    if lower_name.contains("id") {
        return json!("123e4567-e89b-12d3-a456-426614174000");
    }
    if lower_name.contains("email") {
        return json!("user@example.com");
    }
    if lower_name.contains("name") {
        return json!("John Doe");
    }
    if lower_name.contains("amount") || lower_name.contains("balance") {
        return json!(1000.50);
    }
    if lower_name.contains("currency") {
        return json!("USD");
    }
    if lower_name.contains("status") {
        return json!("active");
    }
    if lower_name.contains("date") || lower_name.contains("time") {
        return json!("2025-01-15T10:30:00Z");
    }
    if lower_name.contains("count") || lower_name.contains("number") {
        return json!(42);
    }

    if lower_type.contains("bool") {
        return json!(true);
    }
    if lower_type.contains("int") || lower_type.contains("long") {
        return json!(123);
    }
    if lower_type.contains("decimal") || lower_type.contains("float") {
        return json!(123.45);
    }
    if lower_type.contains("array") {
        return json!([]);
    }

    json!("example value")
}

pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_whitespace() || c == '_' {
            if !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase();
        }
    }
    out.trim_matches('-').to_string()
}

fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
