use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dronehub_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "dronehub")]
#[command(author, version, about = "Tools for the Dronehub storefront front-end")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless scroll session and report what the engine did
    Simulate {
        /// Routes to navigate through, in order
        #[arg(short = 'r', long = "route", default_values = ["/", "/shop", "/"])]
        routes: Vec<String>,
        /// Wheel notches scrolled on each page
        #[arg(short = 'w', long, default_value_t = 3)]
        wheel: u32,
        /// Pixels per wheel notch
        #[arg(long, default_value_t = 120.0)]
        wheel_delta: f64,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 900.0)]
        viewport: f64,
        /// Page content height in pixels
        #[arg(long, default_value_t = 4800.0)]
        content: f64,
    },
    /// Fetch shop categories from the content API
    Categories,
    /// Fetch landing page hero slides from the content API
    Heros,
    /// Print the document head for a page
    Head {
        /// Page path, e.g. /shop/fpv-drones
        path: String,
        /// Page title (site name when omitted)
        #[arg(short = 't', long)]
        title: Option<String>,
        /// Page description (site description when omitted)
        #[arg(short = 'd', long)]
        description: Option<String>,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Simulate {
            routes,
            wheel,
            wheel_delta,
            viewport,
            content,
        } => {
            let session = commands::simulate::Session {
                routes,
                wheel_notches: wheel,
                wheel_delta,
                viewport,
                content,
            };
            commands::simulate::run(&config, session).await
        }
        Commands::Categories => commands::categories::run(&config).await,
        Commands::Heros => commands::heros::run(&config).await,
        Commands::Head {
            path,
            title,
            description,
        } => commands::head::run(&config, &path, title, description),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
