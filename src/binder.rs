//! Binds raw request parameters to typed values according to declarative
//! [`ParameterSpec`]s.
//!
//! Resolution for each spec:
//!
//! * a key that is absent, or present only with empty values, counts as
//!   absent. So does an integer parameter whose first value is empty. An
//!   absent parameter takes its default value if one is declared, binds to
//!   [`BoundValue::absent`] if it is optional, and is an error otherwise;
//! * collections keep every value (sets drop duplicates);
//! * a plain string given several values binds to the values joined with `,`;
//! * integers parse the first value only. Malformed input is always an
//!   error, never `0`.
//!
//! An optional `scalar-int` that is absent binds to `0`. Use
//! [`TargetKind::NullableInt`] when absence has to be observable.

use tracing::debug;

use crate::error::{BindError, Result};
use crate::models::{Bindings, BoundValue, ParameterSpec, TargetKind};
use crate::query::ParamSource;

/// Binds every spec against `source`.
///
/// Either all specs bind or the first failing spec, in declaration order,
/// is returned as the error.
pub fn bind<S>(source: &S, specs: &[ParameterSpec]) -> Result<Bindings>
where
    S: ParamSource + ?Sized,
{
    specs.iter().try_fold(Bindings::new(), |mut bindings, spec| {
        let value = bind_one(source, spec)?;
        bindings.insert(spec.target_name(), value);
        Ok(bindings)
    })
}

/// Binds a single spec against `source`.
pub fn bind_one<S>(source: &S, spec: &ParameterSpec) -> Result<BoundValue>
where
    S: ParamSource + ?Sized,
{
    let mut occurrences = source.values(&spec.source_name);

    let absent = if spec.target_kind.is_numeric() {
        occurrences.first().map_or(true, String::is_empty)
    } else {
        occurrences.iter().all(String::is_empty)
    };

    if absent {
        occurrences.clear();
        match spec.default_value.as_deref() {
            Some(default) => {
                debug!(parameter = %spec.source_name, default, "Using default value");
                occurrences.push(default.to_owned());
            }
            None if !spec.is_required() => {
                debug!(parameter = %spec.source_name, "Optional parameter absent");
                return Ok(BoundValue::absent(spec.target_kind));
            }
            None => {
                return Err(BindError::MissingParameter {
                    name: spec.source_name.clone(),
                })
            }
        }
    }

    convert(spec, occurrences)
}

fn convert(spec: &ParameterSpec, occurrences: Vec<String>) -> Result<BoundValue> {
    let value = match spec.target_kind {
        TargetKind::Array => BoundValue::Array(occurrences),
        TargetKind::List => BoundValue::List(occurrences),
        TargetKind::Set => BoundValue::Set(occurrences.into_iter().collect()),
        TargetKind::Str => BoundValue::Str(Some(occurrences.join(","))),
        TargetKind::Int => BoundValue::Int(parse_int(spec, &occurrences[0])?),
        TargetKind::NullableInt => BoundValue::NullableInt(Some(parse_int(spec, &occurrences[0])?)),
    };

    Ok(value)
}

fn parse_int(spec: &ParameterSpec, raw_value: &str) -> Result<i32> {
    raw_value
        .trim()
        .parse::<i32>()
        .map_err(|_| BindError::TypeConversion {
            name: spec.source_name.clone(),
            raw_value: raw_value.to_string(),
            kind: spec.target_kind,
        })
}
