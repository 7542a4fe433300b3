use crate::ports::outbound::HttpTransport;
use crate::shared::Result;
use async_trait::async_trait;

/// Builds the HTTP client used for the SBOM conversion call
///
/// No request timeout is set; a caller that needs a deadline drops the
/// workflow future.
pub fn build_http_client() -> Result<reqwest::Client> {
    let user_agent = format!("container-cli/{}", env!("CARGO_PKG_VERSION"));
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    Ok(client)
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        Ok(self.execute(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }
}
