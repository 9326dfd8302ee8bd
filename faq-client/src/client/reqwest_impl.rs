use async_trait::async_trait;

use crate::config::ClientOptions;
use crate::error::{Error, HttpResponse, Result, TransportError};

use super::http_trait::HttpClient;

/// Async HTTP client implementation using reqwest.
///
/// Needs a tokio runtime in the caller.
///
/// # Example
///
/// ```ignore
/// use faq_client::FaqClient;
///
/// #[tokio::main]
/// async fn main() -> faq_client::Result<()> {
///     let client = FaqClient::new("mymodule", "1.7.8", "en", None)?;
///     if let Some(faq) = client.get_faq().await {
///         println!("{} categories", faq.categories().len());
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a reqwest client configured from resolved options.
    pub fn from_options(options: &ClientOptions) -> Result<Self> {
        let defaults = &options.defaults;
        let mut builder = reqwest::Client::builder()
            .gzip(true)
            .timeout(defaults.timeout());

        if let Some(connect_timeout) = defaults.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &defaults.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder.build().map_err(|e| Error::Build(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        let response = HttpResponse::new(status.as_u16(), body);

        // only 4xx and 5xx are failures, other final statuses pass through
        if status.is_client_error() || status.is_server_error() {
            Err(TransportError::Status(response))
        } else {
            Ok(response)
        }
    }
}
