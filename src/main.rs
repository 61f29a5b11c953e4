use std::process::ExitCode;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use coincast::models::{supported_coins, ChartOutcome, ForecastOutcome, NewsFeed};
use coincast::{build_dashboard, DashboardContext, Settings};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_COIN: &str = "bitcoin";

fn print_usage() {
    println!("Usage: coincast [coin] [--out <chart.png>]");
    println!("       coincast --list");
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coincast=debug,reqwest=warn")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut coin_id = DEFAULT_COIN.to_string();
    let mut out_path: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => {
                for coin in supported_coins() {
                    println!("{:<12} {}", coin.id, coin.symbol);
                }
                return ExitCode::SUCCESS;
            }
            "--out" => match iter.next() {
                Some(path) => out_path = Some(path.clone()),
                None => {
                    print_usage();
                    return ExitCode::FAILURE;
                }
            },
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => coin_id = other.to_string(),
        }
    }

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let ctx = DashboardContext::from_settings(&settings);

    info!("🚀 Starting coincast for {}", coin_id);
    let dashboard = match build_dashboard(&ctx, &coin_id).await {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{} ({})", dashboard.coin.display_name(), dashboard.coin.symbol);
    println!("History: {} daily points", dashboard.history.len());

    match &dashboard.forecast {
        ForecastOutcome::Ready(forecast) => {
            for point in &forecast.points {
                println!("  {}  {:>14.4}", point.date.format("%Y-%m-%d"), point.price);
            }
        }
        ForecastOutcome::Unavailable(reason) => println!("Forecast unavailable: {}", reason),
    }

    match &dashboard.chart {
        ChartOutcome::Rendered(artifact) => {
            println!(
                "Chart: {}x{} PNG, {} base64 chars",
                artifact.width,
                artifact.height,
                artifact.png_base64.len()
            );
            if let Some(path) = out_path {
                let written = BASE64
                    .decode(&artifact.png_base64)
                    .map_err(|e| e.to_string())
                    .and_then(|bytes| std::fs::write(&path, bytes).map_err(|e| e.to_string()));
                match written {
                    Ok(()) => info!("Chart written to {}", path),
                    Err(e) => error!("Failed to write chart to {}: {}", path, e),
                }
            }
        }
        ChartOutcome::Unavailable(reason) => println!("Chart unavailable: {}", reason),
    }

    let label = match &dashboard.news {
        NewsFeed::Live(_) => "Latest headlines",
        NewsFeed::Fallback(_) => "Headlines (offline)",
    };
    println!("{}:", label);
    for item in dashboard.news.items() {
        println!("  • {}", item.title);
    }

    ExitCode::SUCCESS
}
