use std::collections::HashMap;
use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use url::form_urlencoded;

#[cfg(test)]
use mockall::automock;

/// Anything that can hand out the raw values of a multi-valued parameter.
#[cfg_attr(test, automock)]
pub trait ParamSource {
    /// All raw values for `name`, in the order they were supplied.
    /// Empty when the parameter is absent.
    fn values(&self, name: &str) -> Vec<String>;
}

/// Query string parameters, each key holding every value it appeared with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    params: HashMap<String, Vec<String>>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` query string, without
    /// the leading `?`.
    pub fn parse(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes()).fold(Self::new(), |mut raw, (key, value)| {
            raw.push(key, value);
            raw
        })
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    pub fn with(mut self, name: &str, values: &[&str]) -> Self {
        for value in values {
            self.push(name, *value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl ParamSource for RawQuery {
    fn values(&self, name: &str) -> Vec<String> {
        self.get(name).map(<[String]>::to_vec).unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RawQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.uri.query().map(RawQuery::parse).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_parse_keeps_occurrence_order() {
        let raw = RawQuery::parse("city=Hyd&sno=101&city=Pune&city=Hyd");

        assert_eq!(raw.values("city"), vec!["Hyd", "Pune", "Hyd"]);
        assert_eq!(raw.values("sno"), vec!["101"]);
    }

    #[test]
    fn test_parse_decodes_values() {
        let raw = RawQuery::parse("sname=John+Doe&city=New%20Delhi&note=a%2Cb");

        assert_eq!(raw.values("sname"), vec!["John Doe"]);
        assert_eq!(raw.values("city"), vec!["New Delhi"]);
        assert_eq!(raw.values("note"), vec!["a,b"]);
    }

    #[test]
    fn test_parse_keeps_empty_values() {
        let raw = RawQuery::parse("sname=&age");

        assert_eq!(raw.get("sname"), Some(&[String::new()][..]));
        assert_eq!(raw.get("age"), Some(&[String::new()][..]));
    }

    #[test]
    fn test_missing_key_has_no_values() {
        let raw = RawQuery::parse("");

        assert!(raw.is_empty());
        assert!(raw.values("sno").is_empty());
    }

    #[tokio::test]
    async fn test_extract_from_request() {
        let (mut parts, _) = Request::builder()
            .uri("/multi?city=Hyd&city=Pune")
            .body(())
            .unwrap()
            .into_parts();

        let raw = RawQuery::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(raw, RawQuery::new().with("city", &["Hyd", "Pune"]));
    }

    #[tokio::test]
    async fn test_extract_without_query() {
        let (mut parts, _) = Request::builder()
            .uri("/wrapper")
            .body(())
            .unwrap()
            .into_parts();

        let raw = RawQuery::from_request_parts(&mut parts, &()).await.unwrap();

        assert!(raw.is_empty());
    }
}
