//! Client error types.

/// Errors from the TRIAS client.
///
/// Every failure surfaces as a distinct variant; nothing is retried or
/// logged-and-swallowed internally. TRIAS service-level errors are not
/// represented here: they parse into
/// [`StopEventResponse::error`](crate::schema::StopEventResponse) as data.
#[derive(Debug, thiserror::Error)]
pub enum TriasError {
    /// Response bytes are not well-formed XML or do not match the expected
    /// document structure
    #[error("malformed TRIAS document: {0}")]
    MalformedDocument(String),

    /// HTTP client could not be built
    #[error("failed to construct HTTP request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    /// Connection-level failure during send (network error, TLS error,
    /// timeout)
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body could not be fully read
    #[error("failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// The API rejected the key (HTTP 401/403)
    #[error("unauthorized: the API key was rejected")]
    Unauthorized,

    /// The API returned a non-success HTTP status
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },
}

impl TriasError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        TriasError::MalformedDocument(message.into())
    }
}

impl From<minidom::Error> for TriasError {
    fn from(err: minidom::Error) -> Self {
        TriasError::MalformedDocument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TriasError::MalformedDocument("unexpected root element 'Siri'".into());
        assert_eq!(
            err.to_string(),
            "malformed TRIAS document: unexpected root element 'Siri'"
        );

        let err = TriasError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: the API key was rejected");

        let err = TriasError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "API returned status 500: Internal Server Error"
        );
    }
}
