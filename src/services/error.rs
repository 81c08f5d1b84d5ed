use serde::Deserialize;
use thiserror::Error;

/// Classified request failures. Classification happens once, at the service
/// boundary; pages branch on the variant and render the `Display` message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("authentication required, please log in again")]
    Unauthenticated,
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Validation { message: String },
    #[error("server error (HTTP {status})")]
    Server { status: u16 },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {message}")]
    Network { message: String },
    #[error("unexpected response: {message}")]
    Unknown { message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-2xx response to an `ApiError`. The backend answers with a JSON
/// `{"message": ...}` body; anything else falls back to the raw text.
pub fn classify(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        401 | 403 => ApiError::Unauthenticated,
        404 => ApiError::NotFound {
            message: non_empty(message, "resource not found"),
        },
        400 => ApiError::Validation {
            message: non_empty(message, "invalid request"),
        },
        500..=599 => ApiError::Server { status },
        _ => ApiError::Unknown {
            message: non_empty(message, &format!("HTTP {status}")),
        },
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_and_forbidden_map_to_unauthenticated() {
        assert_eq!(classify(401, ""), ApiError::Unauthenticated);
        assert_eq!(classify(403, r#"{"message":"nope"}"#), ApiError::Unauthenticated);
    }

    #[test]
    fn not_found_keeps_the_backend_message() {
        let err = classify(404, r#"{"message":"Room does not exist"}"#);
        assert_eq!(
            err,
            ApiError::NotFound {
                message: "Room does not exist".to_string()
            }
        );
    }

    #[test]
    fn bad_request_is_a_validation_error() {
        let err = classify(400, r#"{"message":"email is required"}"#);
        assert_eq!(
            err,
            ApiError::Validation {
                message: "email is required".to_string()
            }
        );
    }

    #[test]
    fn five_hundreds_carry_the_status() {
        assert_eq!(classify(500, "boom"), ApiError::Server { status: 500 });
        assert_eq!(classify(503, ""), ApiError::Server { status: 503 });
    }

    #[test]
    fn unparseable_bodies_fall_back_to_raw_text() {
        let err = classify(404, "plain text error");
        assert_eq!(
            err,
            ApiError::NotFound {
                message: "plain text error".to_string()
            }
        );
    }

    #[test]
    fn empty_bodies_get_a_fallback_message() {
        let err = classify(404, "");
        assert_eq!(
            err,
            ApiError::NotFound {
                message: "resource not found".to_string()
            }
        );
    }

    #[test]
    fn unexpected_statuses_are_unknown() {
        assert_eq!(
            classify(418, ""),
            ApiError::Unknown {
                message: "HTTP 418".to_string()
            }
        );
    }
}
