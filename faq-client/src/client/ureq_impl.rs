use async_trait::async_trait;

use crate::config::ClientOptions;
use crate::error::{HttpResponse, TransportError};

use super::http_trait::HttpClient;

/// Blocking HTTP client implementation using ureq.
///
/// The request runs on the calling thread, so `get_faq` can be driven with
/// `futures::executor::block_on` without an async runtime.
///
/// # Example
///
/// ```ignore
/// use faq_client::FaqClient;
/// use futures::executor::block_on;
///
/// let client = FaqClient::new_blocking("mymodule", "1.7.8", "en", None)?;
/// let faq = block_on(client.get_faq());
/// ```
#[derive(Clone, Debug)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a ureq agent configured from resolved options.
    pub fn from_options(options: &ClientOptions) -> Self {
        let defaults = &options.defaults;
        let mut builder = ureq::AgentBuilder::new().timeout(defaults.timeout());

        if let Some(connect_timeout) = defaults.connect_timeout() {
            builder = builder.timeout_connect(connect_timeout);
        }
        if let Some(user_agent) = &defaults.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Self::with_agent(builder.build())
    }

    /// Wrap an already configured agent.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::from_options(&ClientOptions::default())
    }
}

#[async_trait]
impl HttpClient for UreqClient {
    async fn post(&self, url: &str) -> Result<HttpResponse, TransportError> {
        // Blocking call, wrapped in async for trait compatibility
        match self.agent.post(url).call() {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|e| TransportError::Body(e.to_string()))?;
                Ok(HttpResponse::new(status, body))
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response
                    .into_string()
                    .map_err(|e| TransportError::Body(e.to_string()))?;
                Err(TransportError::Status(HttpResponse::new(status, body)))
            }
            Err(ureq::Error::Transport(e)) => Err(TransportError::Request(e.to_string())),
        }
    }
}
