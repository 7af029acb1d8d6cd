use thiserror::Error;

/// Failure of a single backend round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("backend responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("entity has no identity assigned")]
    MissingId,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<gloo::net::Error> for ApiError {
    fn from(err: gloo::net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_404_counts_as_not_found() {
        let not_found = ApiError::Status {
            status: 404,
            body: String::new(),
        };
        let rejected = ApiError::Status {
            status: 400,
            body: "status must not be null".to_string(),
        };
        assert!(not_found.is_not_found());
        assert!(!rejected.is_not_found());
        assert!(!ApiError::Transport("offline".to_string()).is_not_found());
        assert_eq!(
            rejected.to_string(),
            "backend responded with 400: status must not be null"
        );
    }
}
