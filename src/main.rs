//! Customer Review Sentiment Analysis Service
//!
//! Uploads a spreadsheet of reviews, scores them through a hosted
//! completion API, and reports the aggregate sentiment distribution.

use clap::{Parser, Subcommand};
use review_sentiment::{
    client::GroqClient,
    config::Config,
    loader,
    model::SentimentModel,
    server::{self, AppState},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "review-sentiment")]
#[command(about = "Sentiment analysis over uploaded customer review spreadsheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyze a local spreadsheet and print the distribution
    Analyze {
        /// Path to a CSV/XLSX/XLS file with a "Review" column
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Serve { bind } => serve(config, bind).await,
        Commands::Analyze { file } => analyze_file(config, &file).await,
    }
}

fn build_model(config: &Config) -> Arc<SentimentModel> {
    let client = GroqClient::new(config.llm.clone());
    Arc::new(SentimentModel::new(Arc::new(client)))
}

async fn serve(config: Config, bind: Option<String>) -> anyhow::Result<()> {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());

    if config.llm.api_key.is_empty() {
        tracing::warn!("GROQ_API_KEY is not set; completion calls will fail with an auth error");
    }

    let state = AppState {
        model: build_model(&config),
    };

    tracing::info!("Listening on http://{}", bind);
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, server::router(state)).await?;

    Ok(())
}

async fn analyze_file(config: Config, path: &PathBuf) -> anyhow::Result<()> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let data = std::fs::read(path)?;

    let reviews = loader::load_reviews(&filename, &data)?;
    tracing::info!("Scoring {} reviews...", reviews.len());

    let model = build_model(&config);
    let scores = model.analyze(&reviews).await?;

    println!("\nSentiment distribution:\n");
    println!("  Positive: {:.3}", scores.positive);
    println!("  Negative: {:.3}", scores.negative);
    println!("  Neutral:  {:.3}", scores.neutral);
    println!("\nOverall: {}", scores.dominant_label());

    Ok(())
}
