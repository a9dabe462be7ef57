//! Request ID generation and response header helpers.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id that is propagated as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuse the caller's request id when it is short, non-blank, visible ASCII; otherwise mint
/// a fresh one.
pub(super) fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .map(|value| value.trim().to_owned())
        .filter(|value| is_acceptable(value))
        .unwrap_or_else(generate_request_id)
}

fn is_acceptable(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value.bytes().all(|byte| byte.is_ascii_graphic())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "could not encode request id header: {source}");
        }
    }
}

pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

fn generate_request_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_a_well_formed_caller_id() {
        assert_eq!(
            resolve_request_id(Some("  req-42  ".to_string())),
            "req-42"
        );
    }

    #[test]
    fn replaces_blank_oversized_or_spaced_ids() {
        for rejected in [
            String::new(),
            "   ".to_string(),
            "a".repeat(MAX_REQUEST_ID_LEN + 1),
            "two words".to_string(),
        ] {
            let resolved = resolve_request_id(Some(rejected.clone()));

            assert_ne!(resolved, rejected);
            assert!(Uuid::parse_str(&resolved).is_ok(), "expected a generated uuid");
        }
    }

    #[test]
    fn missing_status_is_ok() {
        assert_eq!(response_status_or_ok(None), StatusCode::OK);
        assert_eq!(
            response_status_or_ok(Some(StatusCode::NOT_FOUND)),
            StatusCode::NOT_FOUND
        );
    }
}
