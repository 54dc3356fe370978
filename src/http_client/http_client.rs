use async_trait::async_trait;

use crate::http_client::{error::Error, response::Response};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues one GET request for `path`, resolved against the configured base URL.
    async fn get(&self, path: &str) -> Result<Response, Error>;
}
