//! WSDL structural parsing.
//!
//! Two independent passes over the document:
//! 1. a tree pass (roxmltree) that extracts messages and resolves
//!    portType/operation references against them;
//! 2. regex passes over the raw text for soapAction attributes, schema
//!    complex types, and service metadata, which are not reliably reachable
//!    through the tree for every WSDL dialect in the wild.
//!
//! The two passes tolerate producing no overlap.

use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Malformed XML is fatal for the conversion call that supplied it.
#[derive(Debug, Error)]
#[error("failed to parse WSDL: {0}")]
pub struct ParseError(#[from] pub roxmltree::Error);

/// A single named request/response pair defined in a WSDL port type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsdlOperation {
    pub name: String,
    pub input: WsdlMessage,
    pub output: WsdlMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<WsdlMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soap_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsdlMessage {
    pub name: String,
    pub parts: Vec<WsdlPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsdlPart {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    pub is_array: bool,
}

/// Complex type extracted from the schema section by the secondary pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsdlComplexType {
    pub name: String,
    pub properties: BTreeMap<String, WsdlTypeProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsdlTypeProperty {
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
    pub is_array: bool,
}

/// Service-level metadata gathered from the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsdlService {
    pub name: String,
    pub port_types: Vec<String>,
    pub bindings: Vec<String>,
}

/// Parse WSDL text into an ordered operation list.
///
/// Unresolved message references fall back to a synthetic empty message;
/// a well-formed document with no port types yields an empty list.
pub fn parse_wsdl(wsdl: &str) -> Result<Vec<WsdlOperation>, ParseError> {
    let doc = Document::parse(wsdl)?;
    let root = doc.root_element();

    let messages = extract_messages(root);
    let mut operations = Vec::new();

    for port_type in elements_named(root, "portType") {
        for op in port_type
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "operation")
        {
            let Some(name) = op.attribute("name") else {
                continue;
            };

            let input = resolve_message(&op, "input", &messages, name, "Request");
            let output = resolve_message(&op, "output", &messages, name, "Response");
            let fault = op
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == "fault")
                .map(|_| resolve_message(&op, "fault", &messages, name, "Fault"));

            operations.push(WsdlOperation {
                name: name.to_string(),
                input,
                output,
                fault,
                documentation: extract_documentation(&op),
                soap_action: extract_soap_action(wsdl, name),
            });
        }
    }

    Ok(operations)
}

/// All element descendants of `root` with the given local name, any prefix.
fn elements_named<'a, 'input>(
    root: Node<'a, 'input>,
    local: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    root.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == local)
}

fn extract_messages(root: Node<'_, '_>) -> HashMap<String, WsdlMessage> {
    let mut messages = HashMap::new();

    for msg in elements_named(root, "message") {
        let Some(name) = msg.attribute("name") else {
            continue;
        };

        let parts = msg
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "part")
            .filter_map(|part| {
                let part_name = part.attribute("name")?;
                let element = part.attribute("element");
                let type_attr = part.attribute("type").or(element)?;
                Some(WsdlPart {
                    name: part_name.to_string(),
                    type_name: clean_type_name(type_attr),
                    element: element.map(clean_type_name),
                    is_array: is_array_type(type_attr),
                })
            })
            .collect();

        messages.insert(
            clean_message_name(name),
            WsdlMessage {
                name: name.to_string(),
                parts,
            },
        );
    }

    messages
}

fn resolve_message(
    op: &Node<'_, '_>,
    child_name: &str,
    messages: &HashMap<String, WsdlMessage>,
    op_name: &str,
    fallback_suffix: &str,
) -> WsdlMessage {
    let reference = op
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == child_name)
        .and_then(|n| n.attribute("message").map(str::to_string));

    match &reference {
        Some(msg_ref) => messages
            .get(&clean_message_name(msg_ref))
            .cloned()
            .unwrap_or_else(|| WsdlMessage {
                name: msg_ref.clone(),
                parts: Vec::new(),
            }),
        None => WsdlMessage {
            name: format!("{op_name}{fallback_suffix}"),
            parts: Vec::new(),
        },
    }
}

fn extract_documentation(op: &Node<'_, '_>) -> Option<String> {
    op.children()
        .find(|n| n.is_element() && n.tag_name().name() == "documentation")
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// soapAction lives on the binding, not the port type; pull it straight from
/// the raw text instead of correlating binding and portType trees.
fn extract_soap_action(wsdl: &str, operation_name: &str) -> Option<String> {
    let pattern = format!(
        r#"(?i)<wsdl:operation[^>]*name="{}"[^>]*>\s*<soap:operation[^>]*soapAction="([^"]+)""#,
        regex::escape(operation_name)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(wsdl)
        .map(|caps| caps[1].to_string())
}

static SCHEMA_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<xsd:schema[^>]*>(.*?)</xsd:schema>").unwrap());
static COMPLEX_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<xsd:complexType[^>]*name="([^"]+)"[^>]*>(.*?)</xsd:complexType>"#).unwrap()
});
static SCHEMA_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<xsd:element[^>]*name="([^"]+)"[^>]*type="([^"]+)"[^>]*/>"#).unwrap()
});
static MIN_OCCURS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"minOccurs="([^"]+)""#).unwrap());
static MAX_OCCURS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"maxOccurs="([^"]+)""#).unwrap());

/// Regex-based secondary pass over the raw text for schema complex types.
pub fn extract_complex_types(wsdl: &str) -> Vec<WsdlComplexType> {
    let mut types = Vec::new();

    for schema in SCHEMA_BLOCK.captures_iter(wsdl) {
        for complex in COMPLEX_TYPE.captures_iter(&schema[1]) {
            let name = complex[1].to_string();
            let body = &complex[2];

            let mut properties = BTreeMap::new();
            for element in SCHEMA_ELEMENT.captures_iter(body) {
                let element_text = element.get(0).map(|m| m.as_str()).unwrap_or_default();
                let required = MIN_OCCURS
                    .captures(element_text)
                    .map(|m| &m[1] != "0")
                    .unwrap_or(true);
                let is_array = MAX_OCCURS
                    .captures(element_text)
                    .map(|m| &m[1] == "unbounded")
                    .unwrap_or(false);

                properties.insert(
                    element[1].to_string(),
                    WsdlTypeProperty {
                        type_name: map_xsd_type(&element[2]),
                        required,
                        is_array,
                    },
                );
            }

            types.push(WsdlComplexType {
                name,
                properties,
                documentation: None,
            });
        }
    }

    types
}

static SERVICE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<(?:wsdl:)?service[^>]*name="([^"]+)""#).unwrap());
static PORT_TYPE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<(?:wsdl:)?portType[^>]*name="([^"]+)""#).unwrap());
static BINDING_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<(?:wsdl:)?binding[^>]*name="([^"]+)""#).unwrap());

pub fn extract_service_info(wsdl: &str) -> WsdlService {
    WsdlService {
        name: SERVICE_NAME
            .captures(wsdl)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| "ConvertedService".to_string()),
        port_types: PORT_TYPE_NAME
            .captures_iter(wsdl)
            .map(|c| c[1].to_string())
            .collect(),
        bindings: BINDING_NAME
            .captures_iter(wsdl)
            .map(|c| c[1].to_string())
            .collect(),
    }
}

pub fn extract_service_name(wsdl: &str) -> String {
    extract_service_info(wsdl).name
}

fn clean_message_name(name: &str) -> String {
    strip_ns_prefix(name).to_string()
}

fn clean_type_name(type_name: &str) -> String {
    strip_ns_prefix(type_name).to_string()
}

fn strip_ns_prefix(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, rest)) => rest,
        None => name,
    }
}

fn is_array_type(type_name: &str) -> bool {
    let lower = type_name.to_lowercase();
    lower.contains("array") || lower.contains("list")
}

fn map_xsd_type(xsd_type: &str) -> String {
    match clean_type_name(xsd_type).to_lowercase().as_str() {
        "string" => "string",
        "int" | "integer" | "long" | "short" => "integer",
        "decimal" | "float" | "double" => "number",
        "boolean" | "bool" => "boolean",
        "date" | "datetime" | "time" => "string",
        _ => "object",
    }
    .to_string()
}
