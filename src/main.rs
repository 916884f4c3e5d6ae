use std::env;
use std::process::ExitCode;

use anyhow::Result;
use fishspot::config::AppConfig;
use fishspot::dashboard::{self, Dashboard, Section};
use fishspot::error::LookupError;
use fishspot::web;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fishspot=info")),
        )
        .init();

    // Fail fast on a missing credential instead of mid-render
    let config = AppConfig::from_env()?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("serve") => {
            web::run(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some("lookup") => {
            let city = args[1..].join(" ");
            run_lookup(&config, &city).await
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!("Usage: fishspot [serve | lookup <city>]");
            Ok(ExitCode::from(2))
        }
    }
}

async fn run_lookup(config: &AppConfig, city: &str) -> Result<ExitCode> {
    match dashboard::lookup(config, city).await {
        Ok(dashboard) => {
            print_dashboard(&dashboard);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ (LookupError::EmptyCity | LookupError::CityNotFound)) => {
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
        Err(e @ LookupError::Geocode(_)) => {
            tracing::error!("Lookup failed: {}", e);
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    println!(
        "{} ({})",
        dashboard.location.name,
        dashboard.location.format_coordinates()
    );

    println!("\nCurrent Weather");
    match &dashboard.weather {
        Section::Ready { data } => {
            println!("{}", data.format_description());
            println!("{}", data.format_temperature());
            println!("{}", data.format_wind());
            println!("{}", data.format_humidity());
        }
        Section::Unavailable { message } => println!("{message}"),
    }

    println!("\nNearby Lakes and Rivers");
    match &dashboard.water {
        Section::Ready { data } => {
            for feature in data {
                println!("  {}", feature.format_entry());
            }
        }
        Section::Unavailable { message } => println!("{message}"),
    }

    println!("\nStreamflow (USGS)");
    match &dashboard.streamflow {
        Section::Ready { data } => {
            for series in data {
                println!("  {}", series.format_summary());
            }
        }
        Section::Unavailable { message } => println!("{message}"),
    }
}
