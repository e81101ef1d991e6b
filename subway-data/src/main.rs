use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_data::dataset::{Dataset, DatasetError};
use subway_data::domain::{RouteTable, RouteTableError};
use subway_data::emit::{self, EmitError};
use subway_data::gtfs::{GtfsPaths, StaticGtfs};
use subway_data::realtime::{
    ApiKeyPlacement, FeedClient, FeedConfig, FeedError, FeedGroup, next_arrivals,
};

/// Subway route/stop dataset generator and live departure lookup.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the route/stop dataset from an unpacked static GTFS directory
    Generate {
        /// Directory holding stops.txt, trips.txt, stop_times.txt and transfers.txt
        #[arg(long)]
        gtfs_dir: PathBuf,
        /// Where the generated files are written
        #[arg(long, default_value = "generated")]
        out_dir: PathBuf,
        /// JSON object of line code → terminal labels, replacing the built-in table
        #[arg(long)]
        routes: Option<PathBuf>,
        /// Alternative stop-times file name inside the GTFS directory
        #[arg(long)]
        stop_times_file: Option<String>,
    },
    /// Print the next departures at one stop on one line
    Arrivals {
        /// Parent stop ID, e.g. 635
        #[arg(long)]
        stop: String,
        /// Line code, e.g. 6
        #[arg(long)]
        line: String,
        #[arg(long, env = "MTA_API_KEY", hide_env_values = true)]
        api_key: String,
        /// Feed group; derived from the line when omitted
        #[arg(long)]
        feed: Option<FeedGroup>,
        #[arg(long)]
        base_url: Option<String>,
        /// Send the key as a `key` query parameter instead of a header
        #[arg(long)]
        key_in_query: bool,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    RouteTable(#[from] RouteTableError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error("no feed group carries line {0:?}; pass --feed")]
    UnknownLine(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate {
            gtfs_dir,
            out_dir,
            routes,
            stop_times_file,
        } => generate(gtfs_dir, out_dir, routes, stop_times_file),
        Command::Arrivals {
            stop,
            line,
            api_key,
            feed,
            base_url,
            key_in_query,
            timeout,
        } => {
            let mut config = FeedConfig::new(api_key).with_timeout(timeout);
            if let Some(url) = base_url {
                config = config.with_base_url(url);
            }
            if key_in_query {
                config = config.with_key_placement(ApiKeyPlacement::Query);
            }
            arrivals(config, &stop, &line, feed).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn generate(
    gtfs_dir: PathBuf,
    out_dir: PathBuf,
    routes: Option<PathBuf>,
    stop_times_file: Option<String>,
) -> Result<(), CliError> {
    let table = match routes {
        Some(path) => RouteTable::from_json_file(path)?,
        None => RouteTable::nyc_subway(),
    };

    let mut paths = GtfsPaths::new(gtfs_dir);
    if let Some(name) = stop_times_file {
        paths = paths.with_stop_times_file_name(name);
    }
    let gtfs = StaticGtfs::new(paths);
    info!(
        gtfs_dir = %gtfs.paths().dir.display(),
        stop_times = %gtfs.paths().stop_times_file_name,
        lines = table.len(),
        "Building dataset"
    );

    let dataset = Dataset::load(&gtfs, &table)?;
    let artifacts = emit::render(&dataset)?;
    let written = emit::write_all(&out_dir, &artifacts)?;

    info!(
        files = written.len(),
        out_dir = %out_dir.display(),
        "Generation complete"
    );
    Ok(())
}

async fn arrivals(
    config: FeedConfig,
    stop: &str,
    line: &str,
    feed: Option<FeedGroup>,
) -> Result<(), CliError> {
    let group = match feed {
        Some(group) => group,
        None => FeedGroup::for_route(line).ok_or_else(|| CliError::UnknownLine(line.to_string()))?,
    };

    let client = FeedClient::new(config)?;
    let message = client.fetch(group).await?;
    let arrivals = next_arrivals(&message, stop, line, Utc::now());

    for alert in &arrivals.alerts {
        if let Some(header) = alert.header() {
            println!("! {header}");
        }
        if let Some(description) = alert.description() {
            println!("  {description}");
        }
    }
    for (label, times) in [
        ("Northbound", &arrivals.northbound),
        ("Southbound", &arrivals.southbound),
    ] {
        println!("{label}:");
        if times.is_empty() {
            println!("  no upcoming departures");
        }
        for time in times {
            println!("  {}", time.with_timezone(&Local).format("%H:%M:%S"));
        }
    }
    Ok(())
}
