mod cli_arguments;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use products_api::http_client::config::HttpClientConfig;
use products_api::http_client::reqwest_http_client::ReqwestHttpClient;
use products_api::http_client::response::ResponseData;
use products_api::products::fetch_products;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::CliArguments;

async fn run(args: CliArguments) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = HttpClientConfig::default().with_base_url(args.base_url);
    if let Some(timeout_ms) = args.timeout_ms {
        config = config.with_timeout(Duration::from_millis(timeout_ms));
    }

    let client = ReqwestHttpClient::new(config)?;
    let response = fetch_products(&client).await?;

    info!("Fetched products with status {}", response.status);

    match response.data {
        ResponseData::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        ResponseData::Text(text) => println!("{}", text),
        ResponseData::Bytes(bytes) => println!("<{} bytes>", bytes.len()),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: CliArguments = CliArguments::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Fetching products failed: {err}");
            ExitCode::FAILURE
        }
    }
}
