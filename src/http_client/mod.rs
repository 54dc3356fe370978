pub mod config;
pub mod error;
pub mod headers;
#[allow(clippy::module_inception)]
pub mod http_client;
pub mod reqwest_http_client;
pub mod response;
