use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape a query parameter is bound into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// 32-bit integer. Absent and optional binds to `0`.
    #[serde(rename = "scalar-int")]
    Int,
    /// 32-bit integer that binds to null when absent.
    #[serde(rename = "scalar-integer-nullable")]
    NullableInt,
    #[serde(rename = "scalar-string")]
    Str,
    #[serde(rename = "array-of-string")]
    Array,
    #[serde(rename = "ordered-list-of-string")]
    List,
    #[serde(rename = "unique-set-of-string")]
    Set,
}

impl TargetKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, TargetKind::Int | TargetKind::NullableInt)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Int => "scalar-int",
            TargetKind::NullableInt => "scalar-integer-nullable",
            TargetKind::Str => "scalar-string",
            TargetKind::Array => "array-of-string",
            TargetKind::List => "ordered-list-of-string",
            TargetKind::Set => "unique-set-of-string",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares how one query parameter is read and converted.
///
/// Parameters are required unless declared otherwise. A parameter with a
/// default value is never required, whatever `required` says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub source_name: String,
    pub target_kind: TargetKind,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_as: Option<String>,
}

fn default_required() -> bool {
    true
}

impl ParameterSpec {
    pub fn new(source_name: impl Into<String>, target_kind: TargetKind) -> Self {
        Self {
            source_name: source_name.into(),
            target_kind,
            required: true,
            default_value: None,
            bind_as: None,
        }
    }

    pub fn required(source_name: impl Into<String>, target_kind: TargetKind) -> Self {
        Self::new(source_name, target_kind)
    }

    pub fn optional(source_name: impl Into<String>, target_kind: TargetKind) -> Self {
        Self::new(source_name, target_kind).with_required(false)
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Stores the bound value under `name` instead of the query key.
    pub fn bind_as(mut self, name: impl Into<String>) -> Self {
        self.bind_as = Some(name.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.required && self.default_value.is_none()
    }

    /// Key of this parameter in the bound result.
    pub fn target_name(&self) -> &str {
        self.bind_as.as_deref().unwrap_or(&self.source_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_overrides_required() {
        let spec = ParameterSpec::required("sno", TargetKind::Int).with_default("0");

        assert!(spec.required);
        assert!(!spec.is_required());
    }

    #[test]
    fn test_target_name_falls_back_to_source_name() {
        let implicit = ParameterSpec::required("sname", TargetKind::Str);
        let renamed = ParameterSpec::required("sname", TargetKind::Str).bind_as("name");

        assert_eq!(implicit.target_name(), "sname");
        assert_eq!(renamed.target_name(), "name");
    }

    #[test]
    fn test_deserialize_declarative_specs() {
        let specs: Vec<ParameterSpec> = serde_json::from_value(serde_json::json!([
            { "source_name": "sno", "target_kind": "scalar-int", "default_value": "0" },
            { "source_name": "sname", "target_kind": "scalar-string" },
            { "source_name": "age", "target_kind": "scalar-integer-nullable", "required": false },
            { "source_name": "city", "target_kind": "unique-set-of-string", "bind_as": "citySet" }
        ]))
        .unwrap();

        assert_eq!(
            specs,
            vec![
                ParameterSpec::required("sno", TargetKind::Int).with_default("0"),
                ParameterSpec::required("sname", TargetKind::Str),
                ParameterSpec::optional("age", TargetKind::NullableInt),
                ParameterSpec::required("city", TargetKind::Set).bind_as("citySet"),
            ]
        );
    }

    #[test]
    fn test_numeric_kinds() {
        assert!(TargetKind::Int.is_numeric());
        assert!(TargetKind::NullableInt.is_numeric());
        assert!(!TargetKind::Str.is_numeric());
        assert!(!TargetKind::List.is_numeric());
        assert_eq!(TargetKind::NullableInt.to_string(), "scalar-integer-nullable");
    }
}
