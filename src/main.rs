//! Next-day direction signals CLI
//!
//! Fetches price history, trains a per-ticker model and prints a
//! BUY/HOLD/SELL line per ticker.

use clap::{Parser, Subcommand};
use trendcast::{
    config::Config,
    features::FeatureBuilder,
    provider::{PriceSeriesProvider, YahooProvider},
    service::PredictionService,
    types::LookbackPeriod,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "trendcast")]
#[command(about = "Next-day price direction signals for stock and crypto tickers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict next-day direction for tickers
    Predict {
        /// Tickers to evaluate (defaults to the configured watchlist)
        tickers: Vec<String>,
        /// Lookback window in days (90, 180, 400 or 800)
        #[arg(short, long)]
        period: Option<u32>,
    },
    /// Show recent daily bars for a ticker
    History {
        ticker: String,
        /// Lookback window in days (90, 180, 400 or 800)
        #[arg(short, long)]
        period: Option<u32>,
        /// Number of most recent bars to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
    /// Show the most recent computed feature rows for a ticker
    Features {
        ticker: String,
        /// Lookback window in days (90, 180, 400 or 800)
        #[arg(short, long)]
        period: Option<u32>,
        /// Number of most recent rows to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Predict { tickers, period } => predict(config, tickers, period).await,
        Commands::History {
            ticker,
            period,
            limit,
        } => history(config, &ticker, period, limit).await,
        Commands::Features {
            ticker,
            period,
            limit,
        } => features(config, &ticker, period, limit).await,
    }
}

fn resolve_period(config: &Config, period: Option<u32>) -> anyhow::Result<LookbackPeriod> {
    let days = period.unwrap_or(config.watchlist.period_days);
    LookbackPeriod::from_days(days).ok_or_else(|| {
        let supported: Vec<String> = LookbackPeriod::ALL.iter().map(|p| p.to_string()).collect();
        anyhow::anyhow!(
            "unsupported period {}d, expected one of {}",
            days,
            supported.join(", ")
        )
    })
}

async fn predict(config: Config, tickers: Vec<String>, period: Option<u32>) -> anyhow::Result<()> {
    let period = resolve_period(&config, period)?;
    let tickers = if tickers.is_empty() {
        config.watchlist.tickers.clone()
    } else {
        tickers
    };
    if tickers.is_empty() {
        anyhow::bail!("no tickers given and the configured watchlist is empty");
    }

    let provider = YahooProvider::new(&config.provider)?;
    tracing::info!(
        provider = provider.name(),
        tickers = tickers.len(),
        "running predictions"
    );
    let service = PredictionService::new(provider, config);

    println!(
        "{:<10} {:>8}  {:<6} {}",
        "TICKER", "PROB_UP", "ACTION", "AS OF"
    );
    for ticker in &tickers {
        // one bad ticker must not sink the rest of the batch
        match service.report(ticker, period).await {
            Ok(report) => println!(
                "{:<10} {:>7.1}%  {:<6} {}",
                report.ticker,
                report.probability_up * 100.0,
                report.recommendation,
                report.as_of
            ),
            Err(e) => {
                tracing::error!("{}: {}", ticker, e);
                println!("{:<10} {:>8}  {}", ticker, "-", e);
            }
        }
    }

    Ok(())
}

async fn history(
    config: Config,
    ticker: &str,
    period: Option<u32>,
    limit: usize,
) -> anyhow::Result<()> {
    let period = resolve_period(&config, period)?;
    let provider = YahooProvider::new(&config.provider)?;
    let series = provider.fetch(ticker, period).await?;

    println!("{} bars for {} over {}", series.len(), series.ticker, period);
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "DATE", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"
    );
    let start = series.bars.len().saturating_sub(limit);
    for bar in &series.bars[start..] {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
            bar.date.to_string(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        );
    }

    Ok(())
}

async fn features(
    config: Config,
    ticker: &str,
    period: Option<u32>,
    limit: usize,
) -> anyhow::Result<()> {
    let period = resolve_period(&config, period)?;
    let provider = YahooProvider::new(&config.provider)?;
    let series = provider.fetch(ticker, period).await?;
    let table = FeatureBuilder::build(&series)?;

    println!("{} feature rows for {}", table.len(), series.ticker);
    println!(
        "{:<12} {:>10} {:>8} {:>10} {:>10} {:>10} {:>8}",
        "DATE", "PRICE", "RET%", "SMA5", "SMA10", "SMA20", "VOL10"
    );
    let rows = table.rows();
    let start = rows.len().saturating_sub(limit);
    for row in &rows[start..] {
        println!(
            "{:<12} {:>10.2} {:>8.2} {:>10.2} {:>10.2} {:>10.2} {:>8.4}",
            row.date.to_string(),
            row.adj_close,
            row.ret * 100.0,
            row.sma_5,
            row.sma_10,
            row.sma_20,
            row.vol_10
        );
    }

    Ok(())
}
