use crate::shared::Result;
use async_trait::async_trait;

/// HttpTransport port for sending prepared HTTP requests
///
/// The SBOM client builds complete `reqwest::Request` values and hands
/// them to this port, so tests can answer with canned responses.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the response, whatever its status
    ///
    /// # Errors
    /// Returns an error only when no response was received
    /// (DNS failure, refused connection, timeout).
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response>;
}
