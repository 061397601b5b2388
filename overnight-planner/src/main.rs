use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use overnight_planner::loader::load_route;
use overnight_planner::planner::{Planner, TripConfig};
use overnight_planner::report::ItineraryReport;
use overnight_planner::web::{AppState, create_router};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan overnight stops for a route file and print the itinerary
    Plan {
        /// Route file: hotel count, total length, then "<position> <rating>" lines
        file: PathBuf,

        #[command(flatten)]
        trip: TripArgs,
    },
    /// Serve the planner over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Directory with static assets
        #[arg(long, default_value = "static")]
        static_dir: String,

        #[command(flatten)]
        trip: TripArgs,
    },
}

#[derive(Args)]
struct TripArgs {
    /// Number of travel days
    #[arg(long, default_value_t = TripConfig::default().num_segments)]
    days: usize,

    /// Longest distance (or driving time) covered in one day
    #[arg(long, default_value_t = TripConfig::default().max_segment_length)]
    max_segment_length: u64,
}

impl From<TripArgs> for TripConfig {
    fn from(args: TripArgs) -> Self {
        TripConfig::new(args.days, args.max_segment_length)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Plan { file, trip } => plan(file, trip.into()),
        Commands::Serve {
            addr,
            static_dir,
            trip,
        } => serve(addr, &static_dir, trip.into()).await,
    }
}

fn plan(file: PathBuf, config: TripConfig) -> anyhow::Result<()> {
    let route = load_route(&file).with_context(|| format!("loading {}", file.display()))?;

    let outcome = Planner::new(&config).solve(&route.stops, route.total_length)?;

    println!("{}", ItineraryReport::new(&outcome, route.total_length));
    Ok(())
}

async fn serve(addr: SocketAddr, static_dir: &str, config: TripConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config), static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(
        %addr,
        num_segments = config.num_segments,
        max_segment_length = config.max_segment_length,
        "Overnight planner listening"
    );
    info!("  GET  /                     - Route form");
    info!("  GET  /health               - Health check");
    info!("  POST /itinerary/plan       - Plan from JSON");
    info!("  POST /itinerary/plan-file  - Plan from a route file");

    axum::serve(listener, app).await?;
    Ok(())
}
