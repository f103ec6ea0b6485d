use axum::{
    body::Body,
    http::{Response, StatusCode},
};

pub(crate) async fn parse_json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("could not read response body");

    serde_json::from_slice(&body).unwrap_or_else(|error| {
        panic!(
            "response body {:?} is not JSON: {error}",
            String::from_utf8_lossy(&body)
        )
    })
}

#[track_caller]
pub(crate) fn assert_status(response: &Response<Body>, status_code: StatusCode) {
    assert_eq!(
        response.status(),
        status_code,
        "got status {}, want {status_code}",
        response.status()
    );
}

#[track_caller]
pub(crate) fn assert_error_message(body: &serde_json::Value, needle: &str) {
    let message = body["error"]
        .as_str()
        .unwrap_or_else(|| panic!("want an error message in {body}"));

    assert!(
        message.contains(needle),
        "'{message}' does not contain the text '{needle}'"
    );
}
