//! Content negotiation for request bodies.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;

/// Whether the request declares a JSON body.
///
/// Accepts `application/json` and any `application/*+json` type, ignoring
/// parameters such as `charset` and letter case. A missing or non-UTF-8
/// header is not JSON.
pub fn declares_json(headers: &HeaderMap) -> bool {
    let Some(raw) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = raw.split(';').next().unwrap_or("").trim().to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_json_media_types() {
        assert!(declares_json(&with_content_type("application/json")));
        assert!(declares_json(&with_content_type("application/json; charset=utf-8")));
        assert!(declares_json(&with_content_type("Application/JSON")));
        assert!(declares_json(&with_content_type("application/merge-patch+json")));
    }

    #[test]
    fn test_other_media_types() {
        assert!(!declares_json(&HeaderMap::new()));
        assert!(!declares_json(&with_content_type("text/plain")));
        assert!(!declares_json(&with_content_type("text/json")));
        assert!(!declares_json(&with_content_type("application/x-www-form-urlencoded")));
        assert!(!declares_json(&with_content_type("application/jsonp")));
    }
}
