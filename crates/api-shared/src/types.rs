//! Request and response bodies for the outline API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of `GET /api/outline`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OutlineQuery {
    /// Country name, e.g. `France` or `United Kingdom`.
    pub country: String,
}

/// Successful outline response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OutlineRes {
    pub country: String,
    pub markdown_outline: String,
}

/// Error body returned with every non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_res_uses_expected_field_names() {
        let res = OutlineRes {
            country: "France".into(),
            markdown_outline: "## Contents\n\n# France\n".into(),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["country"], "France");
        assert_eq!(json["markdown_outline"], "## Contents\n\n# France\n");
    }

    #[test]
    fn error_res_serialises_detail() {
        let json = serde_json::to_string(&ErrorRes {
            detail: "Wikipedia page content not found".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"detail":"Wikipedia page content not found"}"#);
    }
}
