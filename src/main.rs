use anyhow::Context;
use clap::Parser;
use news_aggregator::server::{create_app, AppState};
use news_aggregator::{config, FetchConfig, NewsAggregator};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "news-aggregator", about = "Serves aggregated PH news feeds as JSON")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: String,

    /// Per-feed fetch timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let fetch_config = FetchConfig {
        timeout_seconds: args.timeout,
        ..FetchConfig::default()
    };
    let aggregator = NewsAggregator::new(config::default_sources(), fetch_config);
    let app = create_app(AppState { aggregator });

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!("Serving articles on http://{}/api/articles", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
