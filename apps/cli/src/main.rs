mod app;
mod cli;
mod render;

use clap::Parser;
use storefront_core::StorefrontConfig;

use app::{init_tracing, run};
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = StorefrontConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }
    if cli.token.is_some() {
        config.access_token = cli.token.clone();
    }

    run(cli, config).await
}
