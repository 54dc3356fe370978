use clap::Parser;
use products_api::http_client::config::DEFAULT_BASE_URL;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Fetch the product catalogue", long_about = None)]
pub(crate) struct CliArguments {
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(short, long)]
    pub timeout_ms: Option<u64>,
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::cli_arguments::CliArguments;

    #[test]
    fn test_cli_arguments_defaults() {
        let args = CliArguments::parse_from(["products"]);

        assert_eq!(args.base_url, "https://dummyjson.com/");
        assert_eq!(args.timeout_ms, None);
    }

    #[test]
    fn test_cli_arguments_long_flags() {
        let args = CliArguments::parse_from([
            "products",
            "--base-url",
            "http://localhost:9000/",
            "--timeout-ms",
            "1500",
        ]);

        assert_eq!(args.base_url, "http://localhost:9000/");
        assert_eq!(args.timeout_ms, Some(1500));
    }

    #[test]
    fn test_cli_arguments_short_flags() {
        let args = CliArguments::parse_from(["products", "-b", "https://example.com/", "-t", "10"]);

        assert_eq!(args.base_url, "https://example.com/");
        assert_eq!(args.timeout_ms, Some(10));
    }
}
