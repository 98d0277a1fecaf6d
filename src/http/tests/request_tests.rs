//! Unit tests for request parsing and response rendering.

use crate::http::error::ApiError;
use crate::http::request::{ApiMethod, ApiRequest, ApiResponse};
use crate::http::server::into_tiny_response;
use crate::nft::{domain::ValidationError, services::NftServiceError};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("GET", ApiMethod::Get)]
#[case("get", ApiMethod::Get)]
#[case("OPTIONS", ApiMethod::Options)]
#[case("delete", ApiMethod::Other("DELETE".to_owned()))]
fn methods_are_classified(#[case] name: &str, #[case] expected: ApiMethod) {
    assert_eq!(ApiMethod::parse(name), expected);
}

#[rstest]
fn query_pairs_are_decoded() {
    let request = ApiRequest::get("/nft-holdings?walletAddress=0xAb%43&note=deep+work&flag");

    assert_eq!(request.path(), "/nft-holdings");
    assert_eq!(request.query("walletAddress"), Some("0xAbC"));
    assert_eq!(request.query("note"), Some("deep work"));
    assert_eq!(request.query("flag"), Some(""));
    assert_eq!(request.query("missing"), None);
}

#[rstest]
fn first_repeated_parameter_wins() {
    let request = ApiRequest::get("/nft-holdings?walletAddress=first&walletAddress=second");

    assert_eq!(request.query("walletAddress"), Some("first"));
}

#[rstest]
fn undecodable_pairs_are_dropped() {
    let request = ApiRequest::get("/x?bad=%FF&good=1");

    assert_eq!(request.query("bad"), None);
    assert_eq!(request.query("good"), Some("1"));
}

#[rstest]
#[case(ApiError::NotFound, 404)]
#[case(
    ApiError::Holdings(NftServiceError::Validation(ValidationError::MissingWalletAddress)),
    500
)]
fn errors_map_to_status(#[case] error: ApiError, #[case] status: u16) {
    let response = error.to_response();

    assert_eq!(response.status(), status);
    assert_eq!(response.body(), Some(&json!({ "error": error.to_string() })));
}

fn header_value(
    response: &tiny_http::Response<std::io::Cursor<Vec<u8>>>,
    name: &'static str,
) -> Option<String> {
    response
        .headers()
        .iter()
        .find(|header| header.field.equiv(name))
        .map(|header| header.value.as_str().to_owned())
}

#[rstest]
fn json_responses_carry_cors_and_content_type() {
    let tiny = into_tiny_response(&ApiResponse::json(200, json!({"status": "ok"})));

    assert_eq!(tiny.status_code().0, 200);
    assert_eq!(header_value(&tiny, "Access-Control-Allow-Origin").as_deref(), Some("*"));
    assert_eq!(
        header_value(&tiny, "Content-Type").as_deref(),
        Some("application/json; charset=utf-8")
    );
}

#[rstest]
fn preflight_responses_list_allowed_methods() {
    let tiny = into_tiny_response(&ApiResponse::no_content());

    assert_eq!(tiny.status_code().0, 204);
    assert_eq!(header_value(&tiny, "Access-Control-Allow-Origin").as_deref(), Some("*"));
    assert!(header_value(&tiny, "Access-Control-Allow-Methods").is_some());
    assert_eq!(header_value(&tiny, "Content-Type"), None);
}
