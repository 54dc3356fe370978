use std::time::Duration;

use crate::http_client::{
    headers::{APPLICATION_JSON, CONTENT_TYPE, Headers},
    response::ResponseType,
};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com/";

#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub response_type: ResponseType,
    pub headers: Headers,
    pub timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            response_type: ResponseType::Json,
            headers: Headers::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]),
            timeout: None,
        }
    }
}

impl HttpClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves `path` against the base URL. Absolute URLs are returned as-is.
    pub fn url_for(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }

        combine_urls(&self.base_url, path)
    }
}

fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }

    match url.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

fn combine_urls(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return base_url.to_string();
    }

    // At most two trailing slashes are dropped from the base.
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);

    format!("{}/{}", base_url, path.trim_start_matches('/'))
}
