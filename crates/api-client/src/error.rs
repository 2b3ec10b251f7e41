use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("The request to '{endpoint}' timed out")]
    Timeout { endpoint: String },

    #[error("'{endpoint}' returned HTTP status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Failed to deserialize the response from '{endpoint}': {message}")]
    Deserialization { endpoint: String, message: String },
}

impl ApiError {
    /// Classifies a transport failure from `reqwest`, keeping timeouts as
    /// their own kind so the caller can tell a slow service from a broken one.
    pub(crate) fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            ApiError::Request {
                endpoint: endpoint.to_string(),
                source,
            }
        }
    }
}
