use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use super::spec::TargetKind;

/// A query parameter after conversion to its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BoundValue {
    Int(i32),
    NullableInt(Option<i32>),
    Str(Option<String>),
    Array(Vec<String>),
    List(Vec<String>),
    /// Iteration order is unspecified.
    Set(HashSet<String>),
}

impl BoundValue {
    /// The value an optional parameter takes when it is absent and has no
    /// default. Non-nullable integers become `0`, not null.
    pub fn absent(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Int => BoundValue::Int(0),
            TargetKind::NullableInt => BoundValue::NullableInt(None),
            TargetKind::Str => BoundValue::Str(None),
            TargetKind::Array => BoundValue::Array(Vec::new()),
            TargetKind::List => BoundValue::List(Vec::new()),
            TargetKind::Set => BoundValue::Set(HashSet::new()),
        }
    }
}

fn write_list<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a String>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(item)?;
    }
    f.write_str("]")
}

impl fmt::Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundValue::Int(n) | BoundValue::NullableInt(Some(n)) => write!(f, "{n}"),
            BoundValue::Str(Some(s)) => f.write_str(s),
            BoundValue::NullableInt(None) | BoundValue::Str(None) => f.write_str("null"),
            BoundValue::Array(items) | BoundValue::List(items) => write_list(f, items.iter()),
            BoundValue::Set(items) => write_list(f, items.iter()),
        }
    }
}

/// Result of one binding call, keyed by each spec's target name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bindings {
    values: BTreeMap<String, BoundValue>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: BoundValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&BoundValue> {
        self.values.get(name)
    }

    /// Integer value of an `Int` or non-null `NullableInt` binding.
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.get(name)? {
            BoundValue::Int(n) => Some(*n),
            BoundValue::NullableInt(n) => *n,
            _ => None,
        }
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            BoundValue::Str(s) => s.as_deref(),
            _ => None,
        }
    }

    /// Values of an `Array` or `List` binding, in occurrence order.
    pub fn strings(&self, name: &str) -> Option<&[String]> {
        match self.get(name)? {
            BoundValue::Array(items) | BoundValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn set(&self, name: &str) -> Option<&HashSet<String>> {
        match self.get(name)? {
            BoundValue::Set(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_values() {
        assert_eq!(BoundValue::absent(TargetKind::Int), BoundValue::Int(0));
        assert_eq!(
            BoundValue::absent(TargetKind::NullableInt),
            BoundValue::NullableInt(None)
        );
        assert_eq!(BoundValue::absent(TargetKind::Str), BoundValue::Str(None));
        assert_eq!(BoundValue::absent(TargetKind::List), BoundValue::List(vec![]));
        assert_eq!(
            BoundValue::absent(TargetKind::Set),
            BoundValue::Set(HashSet::new())
        );
    }

    #[test]
    fn test_display_matches_log_format() {
        let cities = BoundValue::List(vec!["Hyd".into(), "Pune".into(), "Delhi".into()]);

        assert_eq!(cities.to_string(), "[Hyd, Pune, Delhi]");
        assert_eq!(BoundValue::NullableInt(None).to_string(), "null");
        assert_eq!(BoundValue::Int(101).to_string(), "101");
    }

    #[test]
    fn test_serialize_bindings() {
        let mut bindings = Bindings::new();
        bindings.insert("sno", BoundValue::Int(0));
        bindings.insert("sname", BoundValue::Str(Some("John".into())));
        bindings.insert("age", BoundValue::NullableInt(None));

        assert_eq!(
            serde_json::to_value(&bindings).unwrap(),
            json!({ "sno": 0, "sname": "John", "age": null })
        );
    }

    #[test]
    fn test_typed_accessors() {
        let mut bindings = Bindings::new();
        bindings.insert("age", BoundValue::NullableInt(Some(30)));
        bindings.insert("city", BoundValue::Array(vec!["Hyd".into()]));

        assert_eq!(bindings.int("age"), Some(30));
        assert_eq!(bindings.strings("city"), Some(&["Hyd".to_string()][..]));
        assert_eq!(bindings.string("age"), None);
        assert!(bindings.set("city").is_none());
        assert!(bindings.get("missing").is_none());
    }
}
