use async_trait::async_trait;
use http::HeaderMap;
use tracing::{debug, info, warn};

use crate::http_client::{
    config::HttpClientConfig,
    error::{Error, HttpClientErrorChecker},
    headers::Headers,
    http_client::HttpClient,
    response::Response,
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    config: HttpClientConfig,
}

impl ReqwestHttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(Error::from)?;

        Ok(Self { client, config })
    }

    pub fn with_client(client: reqwest::Client, config: HttpClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(HttpClientConfig::default()).expect("Failed to build reqwest client")
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, path: &str) -> Result<Response, Error> {
        let url = self.config.url_for(path);
        info!("GET {}", url);

        let reqwest_response = self
            .client
            .get(&url)
            .headers(HeaderMap::from(&self.config.headers))
            .send()
            .await
            .map_err(Error::from)?;

        let status = reqwest_response.status().as_u16();
        debug!("GET {} responded with {}", url, status);

        let headers: Headers = reqwest_response.headers().into();

        let body = reqwest_response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = Response {
            status,
            headers,
            data: self.config.response_type.decode(body),
        };

        if !response.is_success() {
            warn!("GET {} failed with status {}", url, status);
            return Err(Error::Status(response));
        }

        Ok(response)
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::http_client::{
        config::HttpClientConfig, error::Error, reqwest_http_client::ReqwestHttpClient,
        response::ResponseType,
    };

    #[test]
    fn default_client_carries_default_config() {
        let client = ReqwestHttpClient::default();

        assert_eq!(client.config(), &HttpClientConfig::default());
    }

    #[test]
    fn new_client_keeps_the_given_config() {
        let config = HttpClientConfig::default()
            .with_base_url("http://localhost:9000/")
            .with_response_type(ResponseType::Bytes)
            .with_timeout(Duration::from_millis(250));

        let client = ReqwestHttpClient::new(config.clone()).unwrap();

        assert_eq!(client.config(), &config);
    }

    #[test]
    fn classifies_an_unparsable_url_as_an_invalid_request() {
        let reqwest_error = reqwest::Client::new()
            .get("dummyjson products")
            .build()
            .unwrap_err();

        let error = Error::from(reqwest_error);

        assert!(matches!(error, Error::InvalidRequest(ref m) if !m.is_empty()));
    }
}
