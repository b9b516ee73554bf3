use std::fmt;

use thiserror::Error;

/// Failure modes at the submission boundary. Everything here is rendered
/// once for the user, logged, and never retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced an HTTP response.
    Transport(String),

    /// The scoring endpoint answered with a non-success status. The detail
    /// string is surfaced verbatim when the endpoint provided one.
    Rejected { status: u16, detail: Option<String> },

    /// A success status whose body did not decode to a numeric score.
    MalformedScore(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Transport(message) => f.write_str(message),
            SubmitError::Rejected { status, detail } => match detail {
                Some(detail) => f.write_str(detail),
                None => write!(f, "Server error: {status}"),
            },
            SubmitError::MalformedScore(message) => {
                write!(f, "scoring response did not carry a numeric score: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_with_detail_displays_detail_verbatim() {
        let err = SubmitError::Rejected {
            status: 400,
            detail: Some("bad request".to_string()),
        };
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn rejection_without_detail_falls_back_to_status() {
        let err = SubmitError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[test]
    fn transport_failure_preserves_underlying_message() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
