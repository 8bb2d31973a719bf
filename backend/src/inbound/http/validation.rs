//! Shared request parsing helpers for inbound HTTP adapters.

use actix_web::http::header;
use actix_web::{HttpResponse, error::JsonPayloadError, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    Age, CatId, CatValidationError, Error, InvalidRecordId, ToyId, invalid_field,
};

/// Prefix of every session-protected route.
pub const API_PREFIX: &str = "/api/v1";

fn unknown_record(err: InvalidRecordId, raw: i32) -> Error {
    Error::not_found(format!("{} {raw} not found", err.kind))
}

/// Path ids that are not positive integers never resolve.
pub(crate) fn cat_id_from_path(raw: i32) -> Result<CatId, Error> {
    CatId::new(raw).map_err(|err| unknown_record(err, raw))
}

pub(crate) fn toy_id_from_path(raw: i32) -> Result<ToyId, Error> {
    ToyId::new(raw).map_err(|err| unknown_record(err, raw))
}

/// Location of a cat's detail resource.
pub fn cat_location(cat_id: CatId) -> String {
    format!("{API_PREFIX}/cats/{cat_id}")
}

/// `303 See Other` back to the cat detail resource.
pub(crate) fn redirect_to_cat(cat_id: CatId) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, cat_location(cat_id)))
        .finish()
}

/// Age as submitted: clients send either a JSON number or a string.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

impl AgeInput {
    pub(crate) fn parse(&self) -> Result<Age, Error> {
        match self {
            Self::Number(raw) => Age::new(*raw),
            Self::Text(raw) => Age::parse(raw),
        }
        .map_err(|err: CatValidationError| invalid_field(&err))
    }
}

/// JSON extractor config reporting malformed bodies as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let details = match &err {
            JsonPayloadError::Deserialize(inner) => json!({
                "code": "malformed_body",
                "reason": inner.to_string(),
            }),
            JsonPayloadError::ContentType => json!({ "code": "unsupported_content_type" }),
            _ => json!({ "code": "malformed_body" }),
        };
        Error::invalid_request("request body is not valid JSON for this endpoint")
            .with_details(details)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn non_positive_ids_are_not_found(#[case] raw: i32) {
        let err = cat_id_from_path(raw).expect_err("never resolves");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), format!("cat {raw} not found"));
    }

    #[rstest]
    fn redirects_point_at_the_cat() {
        let res = redirect_to_cat(CatId::new(7).expect("id"));
        assert_eq!(res.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/api/v1/cats/7")
        );
    }

    #[rstest]
    #[case(json!(3), Some(3))]
    #[case(json!("3"), Some(3))]
    #[case(json!(-1), None)]
    #[case(json!("three"), None)]
    fn age_accepts_numbers_and_numeric_strings(
        #[case] raw: serde_json::Value,
        #[case] expected: Option<i32>,
    ) {
        let input: AgeInput = serde_json::from_value(raw).expect("number or string");
        match expected {
            Some(age) => assert_eq!(input.parse().expect("valid age").get(), age),
            None => {
                let err = input.parse().expect_err("invalid age");
                assert_eq!(err.details().and_then(|d| d.get("field")), Some(&json!("age")));
            }
        }
    }
}
