use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use url::Url;

use crate::config::ClientOptions;
#[cfg(any(feature = "reqwest-client", feature = "ureq-client"))]
use crate::config::PartialClientOptions;
use crate::error::{Result, TransportError};
use crate::faq::Faq;
use crate::parameters::Parameters;

use super::http_trait::HttpClient;

/// Observer invoked with every transport failure before it is absorbed.
pub type ErrorCallback = Arc<dyn Fn(&TransportError) + Send + Sync>;

/// Client for the FAQ service.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
#[derive(Clone)]
pub struct FaqClient<H: HttpClient> {
    http_client: H,
    parameters: Parameters,
    options: ClientOptions,
    faq_url: Url,
    error_callback: Option<ErrorCallback>,
}

#[cfg(feature = "reqwest-client")]
impl FaqClient<super::ReqwestClient> {
    /// Create a client backed by reqwest.
    ///
    /// `options` are merged over [`ClientOptions::default`].
    pub fn new(
        module_key: impl Into<String>,
        ps_version: impl Into<String>,
        iso_code: impl Into<String>,
        options: Option<PartialClientOptions>,
    ) -> Result<Self> {
        let options = ClientOptions::default().merge(options.unwrap_or_default());
        let http_client = super::ReqwestClient::from_options(&options)?;
        Self::with_http_client(
            Parameters::new(module_key, ps_version, iso_code),
            options,
            http_client,
        )
    }
}

#[cfg(feature = "ureq-client")]
impl FaqClient<super::UreqClient> {
    /// Create a client backed by a blocking ureq agent.
    pub fn new_blocking(
        module_key: impl Into<String>,
        ps_version: impl Into<String>,
        iso_code: impl Into<String>,
        options: Option<PartialClientOptions>,
    ) -> Result<Self> {
        let options = ClientOptions::default().merge(options.unwrap_or_default());
        let http_client = super::UreqClient::from_options(&options);
        Self::with_http_client(
            Parameters::new(module_key, ps_version, iso_code),
            options,
            http_client,
        )
    }
}

impl<H: HttpClient> FaqClient<H> {
    /// Create a FAQ client with a custom HTTP client implementation.
    ///
    /// # Arguments
    /// * `parameters` - Module key, platform version and locale
    /// * `options` - Resolved options, `base_url` must parse as a URL
    /// * `http_client` - HTTP client implementation
    pub fn with_http_client(
        parameters: Parameters,
        options: ClientOptions,
        http_client: H,
    ) -> Result<Self> {
        let faq_url = build_faq_url(&options, &parameters)?;

        Ok(FaqClient {
            http_client,
            parameters,
            options,
            faq_url,
            error_callback: None,
        })
    }

    /// Fetch the FAQ.
    ///
    /// Issues exactly one POST. Returns `None` when the transport failed
    /// without a response or when the payload has no categories. A failure
    /// that carries a response (e.g. a 5xx with a body) is reported to the
    /// error callback and its body is then parsed like a successful one.
    pub async fn get_faq(&self) -> Option<Faq> {
        debug!("requesting FAQ from {}", self.faq_url);

        let response = match self.http_client.post(self.faq_url.as_str()).await {
            Ok(response) => response,
            Err(e) => {
                warn!("FAQ request to {} failed: {}", self.faq_url, e);
                if let Some(callback) = &self.error_callback {
                    callback(&e);
                }
                e.into_response()?
            }
        };

        let faq = Faq::from_body(&response.body);
        if faq.is_none() {
            debug!(
                "FAQ response from {} (status {}) has no categories",
                self.faq_url, response.status
            );
        }
        faq
    }

    pub fn http_client(&self) -> &H {
        &self.http_client
    }

    pub fn http_client_mut(&mut self) -> &mut H {
        &mut self.http_client
    }

    /// Replace the HTTP client.
    ///
    /// The request URL and [`options`](Self::options) are kept; use
    /// [`set_options`](Self::set_options) when the new transport was built
    /// from different options.
    pub fn set_http_client(&mut self, http_client: H) -> &mut Self {
        self.http_client = http_client;
        self
    }

    /// Replace the recorded options and re-derive the request URL from them.
    ///
    /// The HTTP client is left untouched. On error nothing changes.
    pub fn set_options(&mut self, options: ClientOptions) -> Result<&mut Self> {
        self.faq_url = build_faq_url(&options, &self.parameters)?;
        self.options = options;
        Ok(self)
    }

    /// Register the observer for transport failures, replacing any previous one.
    pub fn set_error_callback<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&TransportError) + Send + Sync + 'static,
    {
        self.error_callback = Some(Arc::new(callback));
        self
    }

    pub fn clear_error_callback(&mut self) -> &mut Self {
        self.error_callback = None;
        self
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Options describing the base URL and the transport settings in use.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Full URL the FAQ is requested from.
    pub fn faq_url(&self) -> &Url {
        &self.faq_url
    }
}

fn build_faq_url(options: &ClientOptions, parameters: &Parameters) -> Result<Url> {
    let mut base_url = Url::parse(&options.base_url)?;

    // we need a trailing slash, if not present we append it
    if !base_url.path().ends_with('/') {
        base_url.set_path(&format!("{}/", base_url.path()));
    }
    Ok(base_url.join(&parameters.faq_uri())?)
}

impl<H: HttpClient + fmt::Debug> fmt::Debug for FaqClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaqClient")
            .field("http_client", &self.http_client)
            .field("parameters", &self.parameters)
            .field("faq_url", &self.faq_url.as_str())
            .field("error_callback", &self.error_callback.is_some())
            .finish()
    }
}
