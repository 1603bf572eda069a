//! Translate classified HTTP failures into the retry executor's vocabulary.

use crate::retry::Outcome;

use super::error::HttpError;

/// Wrap a per-attempt failure for the retry loop. The retryable tag is
/// decided here, once, from the error itself; the executor never looks
/// inside the error again.
pub(crate) fn classify<T>(err: HttpError) -> Outcome<T, HttpError> {
    if err.is_retryable() {
        Outcome::Retry(err)
    } else {
        Outcome::Fatal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::DecodeError;
    use url::Url;

    fn target() -> Url {
        Url::parse("http://localhost/accounts").unwrap()
    }

    fn status_error(status: u16) -> HttpError {
        HttpError::Status {
            url: target(),
            status,
            body: Vec::new(),
        }
    }

    #[test]
    fn client_errors_are_terminal() {
        for status in [400, 403, 404, 409] {
            let outcome: Outcome<(), _> = classify(status_error(status));
            assert!(matches!(outcome, Outcome::Fatal(_)), "HTTP {}", status);
        }
    }

    #[test]
    fn server_errors_are_retryable() {
        for status in [500, 502, 503, 504] {
            let outcome: Outcome<(), _> = classify(status_error(status));
            assert!(matches!(outcome, Outcome::Retry(_)), "HTTP {}", status);
        }
    }

    #[test]
    fn decode_failures_are_terminal() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = HttpError::Decode {
            url: target(),
            source: DecodeError::Json(json_err),
        };
        assert!(!err.is_retryable());
        let outcome: Outcome<(), _> = classify(err);
        assert!(matches!(outcome, Outcome::Fatal(_)));
    }

    #[test]
    fn cancellation_is_terminal() {
        assert!(!HttpError::Cancelled.is_retryable());
    }

    #[test]
    fn status_accessor_reports_code() {
        assert_eq!(status_error(404).status(), Some(404));
        assert_eq!(HttpError::Cancelled.status(), None);
    }
}
