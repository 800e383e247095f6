/// Errors from the generation endpoint layer.
///
/// Provider failures are never retried; they propagate to the caller, which
/// surfaces them as a non-fatal notice.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider's output could not be parsed into the flow's output shape.
    #[error("Malformed generation output: {0}")]
    MalformedOutput(String),

    /// An attached image was not a valid base64 data URI.
    #[error("Invalid image data: {0}")]
    InvalidImage(String),
}
