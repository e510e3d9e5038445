use super::*;

// =============================================================
// error_from_parts
// =============================================================

#[test]
fn error_body_with_error_field_becomes_api_error() {
    let err = error_from_parts(400, r#"{"error":"name too long"}"#);
    assert_eq!(err, ApiError::Api("name too long".to_owned()));
}

#[test]
fn error_body_without_error_field_falls_back_to_http() {
    let err = error_from_parts(500, r#"{"detail":"oops"}"#);
    assert_eq!(err, ApiError::Http(500));
}

#[test]
fn non_json_body_falls_back_to_http() {
    let err = error_from_parts(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Http(502));
}

#[test]
fn non_string_error_field_falls_back_to_http() {
    let err = error_from_parts(400, r#"{"error":42}"#);
    assert_eq!(err, ApiError::Http(400));
}

// =============================================================
// Display
// =============================================================

#[test]
fn api_error_display_is_the_server_message() {
    let err = ApiError::Api("Board name cannot be empty".to_owned());
    assert_eq!(err.to_string(), "Board name cannot be empty");
}

#[test]
fn http_error_display_names_the_status() {
    assert_eq!(ApiError::Http(503).to_string(), "HTTP status 503");
}

#[test]
fn not_found_display() {
    assert_eq!(ApiError::NotFound.to_string(), "board not found");
}
