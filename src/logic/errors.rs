use anyhow::Error;

use crate::api::ApiStatusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401 / 403
    NotFound,     // HTTP 404
    RateLimited,  // HTTP 429
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Decode,       // Body was not the JSON we expected
    Other,
}

impl ErrorType {
    /// Short label for the error panel
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "Connection refused",
            ErrorType::Timeout => "Request timed out",
            ErrorType::Unauthorized => "Access denied (check the delivery token)",
            ErrorType::NotFound => "Not found (check the space id)",
            ErrorType::RateLimited => "Rate limited",
            ErrorType::ServerError => "Server error",
            ErrorType::NetworkError => "Network error",
            ErrorType::Decode => "Unexpected response",
            ErrorType::Other => "Request failed",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // HTTP status from the delivery API wins over message sniffing
    for cause in error.chain() {
        if let Some(api_err) = cause.downcast_ref::<ApiStatusError>() {
            return match api_err.status {
                401 | 403 => ErrorType::Unauthorized,
                404 => ErrorType::NotFound,
                429 => ErrorType::RateLimited,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::Decode;
        }
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::Decode;
            }
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message - show the root cause, not the context wrappers
pub fn format_error_message(error: &Error) -> String {
    // reqwest errors are the most informative for network failures
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    error.root_cause().to_string()
}
