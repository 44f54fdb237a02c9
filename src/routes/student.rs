use std::fmt;

use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::binder::bind;
use crate::error::BindError;
use crate::models::{Bindings, ParameterSpec, TargetKind};
use crate::query::RawQuery;

/// View name every student operation answers with.
pub const RESULT_VIEW: &str = "result";

type StudentResponse = Result<Json<Value>, BindError>;

fn result_view(params: &Bindings) -> Json<Value> {
    Json(json!({ "view": RESULT_VIEW, "params": params }))
}

fn shown<'a>(params: &'a Bindings, name: &str) -> &'a dyn fmt::Display {
    match params.get(name) {
        Some(value) => value,
        None => &"null",
    }
}

/// `/basic?sno=101&sname=John`: both parameters required and renamed.
pub async fn basic(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::required("sno", TargetKind::Int).bind_as("no"),
            ParameterSpec::required("sname", TargetKind::Str).bind_as("name"),
        ],
    )?;

    info!("CASE 1: BASIC BINDING");
    info!("{} {}", shown(&params, "no"), shown(&params, "name"));
    Ok(result_view(&params))
}

/// `/implicit?sno=101&sname=John`: bound under the query keys themselves.
pub async fn implicit(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::required("sno", TargetKind::Int),
            ParameterSpec::required("sname", TargetKind::Str),
        ],
    )?;

    info!("CASE 2: IMPLICIT NAMES");
    info!("{} {}", shown(&params, "sno"), shown(&params, "sname"));
    Ok(result_view(&params))
}

pub async fn optional(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::required("sno", TargetKind::NullableInt),
            ParameterSpec::optional("sname", TargetKind::Str),
        ],
    )?;

    info!("CASE 3: OPTIONAL PARAM");
    info!("{} {}", shown(&params, "sno"), shown(&params, "sname"));
    Ok(result_view(&params))
}

pub async fn wrapper(raw: RawQuery) -> StudentResponse {
    let params = bind(&raw, &[ParameterSpec::optional("age", TargetKind::NullableInt)])?;

    info!("CASE 4: WRAPPER TYPE");
    info!("AGE: {}", shown(&params, "age"));
    Ok(result_view(&params))
}

pub async fn defaults(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::required("sno", TargetKind::Int).with_default("0"),
            ParameterSpec::required("sname", TargetKind::Str).with_default("Guest"),
        ],
    )?;

    info!("CASE 5: DEFAULT VALUES");
    info!("{} {}", shown(&params, "sno"), shown(&params, "sname"));
    Ok(result_view(&params))
}

/// `/multi?city=Hyd&city=Pune&city=Delhi`: one key bound three ways.
pub async fn multi(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::required("city", TargetKind::Array).bind_as("cityArray"),
            ParameterSpec::required("city", TargetKind::List).bind_as("cityList"),
            ParameterSpec::required("city", TargetKind::Set).bind_as("citySet"),
        ],
    )?;

    info!("CASE 6: MULTIPLE VALUES");
    info!("Array : {}", shown(&params, "cityArray"));
    info!("List  : {}", shown(&params, "cityList"));
    info!("Set   : {}", shown(&params, "citySet"));
    Ok(result_view(&params))
}

pub async fn duplicate(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::required("city", TargetKind::List).bind_as("list"),
            ParameterSpec::required("city", TargetKind::Set).bind_as("set"),
        ],
    )?;

    info!("CASE 7: DUPLICATES");
    info!("List: {}", shown(&params, "list"));
    info!("Set : {}", shown(&params, "set"));
    Ok(result_view(&params))
}

/// `/csv?sname=John&city=Hyd&city=Pune`: repeated `city` values arrive as
/// one comma separated string, split again here.
pub async fn csv(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::optional("sno", TargetKind::NullableInt),
            ParameterSpec::required("sname", TargetKind::Str),
            ParameterSpec::optional("city", TargetKind::Str),
        ],
    )?;

    info!("CASE 8: CSV VALUES");
    info!(
        "{} {} {}",
        shown(&params, "sno"),
        shown(&params, "sname"),
        shown(&params, "city")
    );

    let cities: Vec<&str> = params
        .string("city")
        .map(|city| city.split(',').map(str::trim).collect())
        .unwrap_or_default();
    for city in &cities {
        info!("CITY: {}", city);
    }

    Ok(Json(json!({
        "view": RESULT_VIEW,
        "params": params,
        "cities": cities,
    })))
}

pub async fn mixed(raw: RawQuery) -> StudentResponse {
    let params = bind(
        &raw,
        &[
            ParameterSpec::required("sno", TargetKind::Int).with_default("0"),
            ParameterSpec::required("sname", TargetKind::Str),
            ParameterSpec::optional("age", TargetKind::NullableInt),
        ],
    )?;

    info!("CASE 9: MIXED");
    info!(
        "{} {} {}",
        shown(&params, "sno"),
        shown(&params, "sname"),
        shown(&params, "age")
    );
    Ok(result_view(&params))
}
