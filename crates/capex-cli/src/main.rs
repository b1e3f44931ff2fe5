//! CLI application for scraping investment figures from capital-plan reports.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, event, extract};

/// Capital plan scraper - Extract investment figures from strategic plan PDFs
#[derive(Parser)]
#[command(name = "capex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract gross investments by geography
    Geography(extract::ExtractArgs),

    /// Extract gross investments in renewable power & customers
    Renewables(extract::ExtractArgs),

    /// Process a storage event notification
    HandleEvent(event::EventArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so stdout stays clean for results
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Geography(args) => {
            extract::run(extract::Report::Geography, args, config_path).await
        }
        Commands::Renewables(args) => {
            extract::run(extract::Report::Renewables, args, config_path).await
        }
        Commands::HandleEvent(args) => event::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
