use crate::application::dto::{SbomConversionRequest, SbomConversionResult};
use crate::application::factories::ErrorFactory;
use crate::ports::outbound::{HttpTransport, SbomClient};
use crate::shared::constants::{CONTENT_TYPE_JSON, SBOM_API_VERSION};
use crate::shared::error::ContainerExtensionError;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use std::sync::Arc;

/// HttpSbomClient adapter for the remote depgraph to SBOM conversion API
///
/// Issues a single POST per call. No retries: every failure is classified
/// once and returned.
pub struct HttpSbomClient {
    api_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl HttpSbomClient {
    pub fn new(api_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api_url: api_url.into(),
            transport,
        }
    }

    fn conversion_url(&self, org_id: &str, format: &str, platform: Option<&str>) -> String {
        let mut url = format!(
            "{}/hidden/orgs/{}/sbom?version={}&format={}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(org_id),
            SBOM_API_VERSION,
            urlencoding::encode(format)
        );
        if let Some(platform) = platform {
            url.push_str("&platform=");
            url.push_str(&urlencoding::encode(platform));
        }
        url
    }

    fn build_request(
        &self,
        org_id: &str,
        format: &str,
        platform: Option<&str>,
        body: Vec<u8>,
    ) -> crate::shared::Result<reqwest::Request> {
        let url = self.conversion_url(org_id, format, platform);
        let url = reqwest::Url::parse(&url).with_context(|| format!("invalid request URL: {url}"))?;

        let mut request = reqwest::Request::new(Method::POST, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        *request.body_mut() = Some(body.into());
        Ok(request)
    }
}

#[async_trait]
impl SbomClient for HttpSbomClient {
    async fn get_sbom_for_depgraph(
        &self,
        org_id: &str,
        format: &str,
        platform: Option<&str>,
        request: &SbomConversionRequest,
    ) -> Result<SbomConversionResult, ContainerExtensionError> {
        let body = request
            .to_json()
            .context("error while marshalling request body")
            .map_err(ErrorFactory::internal)?;

        let http_request = self
            .build_request(org_id, format, platform, body)
            .map_err(ErrorFactory::internal)?;

        tracing::debug!(url = %http_request.url(), "requesting SBOM conversion");

        let response = self
            .transport
            .send(http_request)
            .await
            .context("error while making request")
            .map_err(ErrorFactory::internal)?;

        let status = response.status();
        if status != StatusCode::OK {
            // body is not part of the error contract
            if let Err(e) = response.bytes().await {
                tracing::debug!(error = %e, "could not drain error response body");
            }

            let error = anyhow!("could not convert to SBOM (status: {})", status);
            return Err(match status {
                StatusCode::BAD_REQUEST => ErrorFactory::bad_request(error),
                StatusCode::UNAUTHORIZED => ErrorFactory::unauthorized(error),
                StatusCode::FORBIDDEN => ErrorFactory::forbidden(error, org_id),
                _ => ErrorFactory::remote(error),
            });
        }

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let doc = response
            .bytes()
            .await
            .context("could not read response body")
            .map_err(ErrorFactory::internal)?;

        tracing::debug!(bytes = doc.len(), mime_type = %mime_type, "received SBOM document");

        Ok(SbomConversionResult::new(doc.to_vec(), mime_type))
    }
}
