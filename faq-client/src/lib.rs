#![allow(clippy::module_inception)]
//! Client for the PrestaShop Addons FAQ service.
//!
//! [`FaqClient::get_faq`] posts to `{base_url}{module_key}/{ps_version}/{iso_code}`
//! and returns the decoded FAQ, or `None` when no usable data came back.
//! Transport failures never surface as errors; register an observer with
//! [`FaqClient::set_error_callback`] to see them.

mod client;
pub mod config;
mod error;
mod faq;
mod parameters;

pub use client::{ErrorCallback, FaqClient, HttpClient};
#[cfg(feature = "reqwest-client")]
pub use client::ReqwestClient;
#[cfg(feature = "ureq-client")]
pub use client::UreqClient;

pub use config::{ClientOptions, PartialClientOptions, BASE_URL};
pub use error::{Error, HttpResponse, Result, TransportError};
pub use faq::{Faq, CATEGORIES_KEY};
pub use parameters::Parameters;
