use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::models::TargetKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Required request parameter '{name}' is not present")]
    MissingParameter { name: String },

    #[error("Failed to convert value '{raw_value}' of parameter '{name}' to {kind}")]
    TypeConversion {
        name: String,
        raw_value: String,
        kind: TargetKind,
    },
}

impl BindError {
    pub fn parameter(&self) -> &str {
        match self {
            BindError::MissingParameter { name } | BindError::TypeConversion { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, BindError>;

impl IntoResponse for BindError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": self.to_string(),
                "parameter": self.parameter(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let missing = BindError::MissingParameter {
            name: "sname".to_string(),
        };
        let conversion = BindError::TypeConversion {
            name: "sno".to_string(),
            raw_value: "abc".to_string(),
            kind: TargetKind::Int,
        };

        assert_eq!(
            missing.to_string(),
            "Required request parameter 'sname' is not present"
        );
        assert_eq!(
            conversion.to_string(),
            "Failed to convert value 'abc' of parameter 'sno' to scalar-int"
        );
        assert_eq!(conversion.parameter(), "sno");
    }

    #[test]
    fn test_into_response_is_bad_request() {
        let response = BindError::MissingParameter {
            name: "sno".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
