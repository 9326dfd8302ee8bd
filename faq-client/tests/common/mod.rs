#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use faq_client::{HttpClient, HttpResponse, TransportError};

/// What the mock transport answers with.
#[derive(Clone, Debug)]
pub enum Reply {
    Success(HttpResponse),
    Status(HttpResponse),
    NoResponse(String),
    Unreadable(String),
}

/// Test double recording every URL it is asked to POST.
#[derive(Clone, Debug)]
pub struct MockHttpClient {
    reply: Reply,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(Reply::Success(HttpResponse::new(200, body)))
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::new(Reply::Status(HttpResponse::new(status, body)))
    }

    pub fn unreachable() -> Self {
        Self::new(Reply::NoResponse("connection refused".to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        match &self.reply {
            Reply::Success(response) => Ok(response.clone()),
            Reply::Status(response) => Err(TransportError::Status(response.clone())),
            Reply::NoResponse(reason) => Err(TransportError::Request(reason.clone())),
            Reply::Unreadable(reason) => Err(TransportError::Body(reason.clone())),
        }
    }
}

/// Base url of a local port nothing listens on.
pub const REFUSED_BASE_URL: &str = "http://127.0.0.1:1/request/faq/";

/// Path the client posts to for `mymodule` / `1.7.8` / `en`.
pub const FAQ_PATH: &str = "/request/faq/mymodule/1.7.8/en";

/// Base url pointing at a mock server's FAQ root.
pub fn faq_base_url(server_uri: &str) -> String {
    format!("{}/request/faq/", server_uri)
}
