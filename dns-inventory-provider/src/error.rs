use serde::Deserialize;
use thiserror::Error;

/// A single entry of the `errors` array in a Cloudflare response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric Cloudflare error code, when the API supplies one.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

impl ApiErrorDetail {
    /// The message, or `Unknown error` when the API left it blank.
    pub fn message_or_unknown(&self) -> &str {
        if self.message.trim().is_empty() {
            UNKNOWN_ERROR
        } else {
            &self.message
        }
    }
}

/// Unified error type for all zone and record listing operations.
///
/// Transport failures and unreadable bodies are kept apart from API-level
/// failures so they can be logged differently, but [`report_lines`](Self::report_lines)
/// renders both without a structured error list as a generic
/// `API request failed` message.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The response body was not a parseable API envelope.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The API answered with `success: false` (or omitted the flag).
    #[error("API error: {}", join_messages(errors))]
    Api {
        /// Error entries reported by the API. May be empty.
        errors: Vec<ApiErrorDetail>,
    },

    /// Zone discovery returned no zone with the requested name.
    #[error("Zone '{domain}' not found")]
    ZoneNotFound {
        /// Domain name that was searched for.
        domain: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client initialization failed: {detail}")]
    ClientInit {
        /// Error details.
        detail: String,
    },
}

/// Fallback message when the API reports failure without any error entries.
pub const UNKNOWN_ERROR: &str = "Unknown error";

fn join_messages(errors: &[ApiErrorDetail]) -> String {
    if errors.is_empty() {
        return UNKNOWN_ERROR.to_string();
    }
    errors
        .iter()
        .map(ApiErrorDetail::message_or_unknown)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ProviderError {
    /// 是否为预期行为（凭证错误、资源不存在等），用于日志分级。
    ///
    /// Expected failures are logged at `debug`, the rest at `info`. Both stay
    /// below the CLI's default filter since the caller reports them.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::ZoneNotFound { .. })
    }

    /// Lines shown to the user for this failure, one per API error message.
    ///
    /// An API failure without entries yields a single `Unknown error` line,
    /// and so does an entry with a blank message.
    /// Failures that carry no structured list at all are reported as
    /// `API request failed: <detail>`.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Self::Api { errors } if errors.is_empty() => vec![UNKNOWN_ERROR.to_string()],
            Self::Api { errors } => errors
                .iter()
                .map(|e| match e.code {
                    Some(code) => format!("{} (code {code})", e.message_or_unknown()),
                    None => e.message_or_unknown().to_string(),
                })
                .collect(),
            Self::NetworkError { detail } | Self::ParseError { detail } => {
                vec![format!("API request failed: {detail}")]
            }
            Self::ZoneNotFound { domain } => vec![format!("Zone '{domain}' not found")],
            Self::ClientInit { detail } => {
                vec![format!("HTTP client initialization failed: {detail}")]
            }
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
