use async_trait::async_trait;

use crate::error::{HttpResponse, TransportError};

/// Minimal async HTTP client trait that can be implemented with any HTTP library.
///
/// The FAQ client only ever issues a body-less POST, so that is all a
/// transport has to provide. Bundled implementations live behind the
/// `reqwest-client` and `ureq-client` features; tests use their own doubles.
///
/// # Implementing the trait
///
/// ```ignore
/// use async_trait::async_trait;
/// use faq_client::{HttpClient, HttpResponse, TransportError};
///
/// #[derive(Clone)]
/// struct MyHttpClient;
///
/// #[async_trait]
/// impl HttpClient for MyHttpClient {
///     async fn post(&self, url: &str) -> Result<HttpResponse, TransportError> {
///         // Send the request and map a 4xx/5xx answer to TransportError::Status
///         Ok(HttpResponse::new(200, r#"{"categories": []}"#))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a POST request without a body.
    ///
    /// # Returns
    /// The response for any status below 400. A 4xx or 5xx answer is
    /// reported as [`TransportError::Status`] with the response attached;
    /// failures without any response use the other variants.
    async fn post(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
