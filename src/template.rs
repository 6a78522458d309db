//! The synthesized deployment descriptor.
//!
//! A [`Template`] is the inert output of [`Stack::synth`](crate::Stack::synth):
//! a resource map and an output map keyed by logical id, in the shape the
//! deployment engine consumes. Maps are ordered so repeated synthesis of the
//! same graph is byte-identical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::token::Token;
use crate::types::ResourceType;

/// Descriptor format revision understood by the deployment engine.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// One declared resource: its canonical type and serialized properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceEntry {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Properties")]
    properties: Value,
}

impl ResourceEntry {
    pub(crate) fn new(kind: impl Into<String>, properties: Value) -> Self {
        Self {
            kind: kind.into(),
            properties,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn properties(&self) -> &Value {
        &self.properties
    }
}

/// One published output: a deferred value under a logical name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputEntry {
    #[serde(rename = "Value")]
    value: Token,
}

impl OutputEntry {
    pub(crate) fn new(value: Token) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Token {
        &self.value
    }
}

/// The complete descriptor for one deployment graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: String,
    #[serde(rename = "Resources")]
    resources: BTreeMap<String, ResourceEntry>,
    #[serde(rename = "Outputs", default, skip_serializing_if = "BTreeMap::is_empty")]
    outputs: BTreeMap<String, OutputEntry>,
}

impl Template {
    pub(crate) fn from_parts(
        resources: BTreeMap<String, ResourceEntry>,
        outputs: BTreeMap<String, OutputEntry>,
    ) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            resources,
            outputs,
        }
    }

    pub fn resources(&self) -> &BTreeMap<String, ResourceEntry> {
        &self.resources
    }

    pub fn outputs(&self) -> &BTreeMap<String, OutputEntry> {
        &self.outputs
    }

    /// Look up one resource by its logical id.
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceEntry> {
        self.resources.get(logical_id)
    }

    /// Look up one output by its logical name.
    pub fn output(&self, name: &str) -> Option<&OutputEntry> {
        self.outputs.get(name)
    }

    /// Logical ids of every declaration of the given type, in map order.
    pub fn resources_of_type(&self, kind: ResourceType) -> Vec<&str> {
        self.resources
            .iter()
            .filter(|(_, entry)| entry.kind() == kind.as_ref())
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Template {
        let mut resources = BTreeMap::new();
        resources.insert(
            "AuthUserPool".to_string(),
            ResourceEntry::new("AWS::Cognito::UserPool", json!({"UserPoolName": "prod-users"})),
        );
        let mut outputs = BTreeMap::new();
        outputs.insert(
            "UserPoolId".to_string(),
            OutputEntry::new(Token::Ref("AuthUserPool".to_string())),
        );
        Template::from_parts(resources, outputs)
    }

    #[test]
    fn test_template_serialization_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Resources": {
                    "AuthUserPool": {
                        "Type": "AWS::Cognito::UserPool",
                        "Properties": {"UserPoolName": "prod-users"}
                    }
                },
                "Outputs": {
                    "UserPoolId": {"Value": {"Ref": "AuthUserPool"}}
                }
            })
        );
    }

    #[test]
    fn test_empty_outputs_are_omitted() {
        let template = Template::from_parts(BTreeMap::new(), BTreeMap::new());
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(
            value,
            json!({"AWSTemplateFormatVersion": "2010-09-09", "Resources": {}})
        );
    }

    #[test]
    fn test_template_round_trips_through_serde() {
        let template = sample();
        let value = serde_json::to_value(&template).unwrap();
        let back: Template = serde_json::from_value(value).unwrap();
        assert_eq!(template, back);
    }

    #[test]
    fn test_lookup_accessors() {
        let template = sample();
        assert_eq!(
            template.resource("AuthUserPool").unwrap().kind(),
            "AWS::Cognito::UserPool"
        );
        assert!(template.resource("Missing").is_none());
        assert_eq!(
            template.output("UserPoolId").unwrap().value(),
            &Token::Ref("AuthUserPool".to_string())
        );
        assert!(template.output("Missing").is_none());
    }

    #[test]
    fn test_resources_of_type() {
        let template = sample();
        assert_eq!(
            template.resources_of_type(ResourceType::UserPool),
            vec!["AuthUserPool"]
        );
        assert!(template.resources_of_type(ResourceType::UserPoolClient).is_empty());
    }
}
