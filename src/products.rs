//! Product catalogue access over the shared client.

use std::sync::LazyLock;

use crate::http_client::{
    error::Error, http_client::HttpClient, reqwest_http_client::ReqwestHttpClient,
    response::Response,
};

pub const PRODUCTS_PATH: &str = "products?limit=100";

static API: LazyLock<ReqwestHttpClient> = LazyLock::new(ReqwestHttpClient::default);

/// The process-wide client, built on first use from the default configuration.
pub fn api() -> &'static ReqwestHttpClient {
    &API
}

pub async fn get_products() -> Result<Response, Error> {
    fetch_products(api()).await
}

pub async fn fetch_products<C: HttpClient + ?Sized>(client: &C) -> Result<Response, Error> {
    client.get(PRODUCTS_PATH).await
}
