use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the amenity API server
#[derive(Parser, Debug, Clone)]
#[command(name = "amenity-api")]
#[command(about = "Station amenity compliance and works tracking API")]
pub struct Args {
    /// Host address to bind to
    #[arg(long, env = "AMENITY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:amenities.db?mode=rwc")]
    pub database_url: String,

    /// JSON seed file loaded when the stations table is empty
    #[arg(long, env = "AMENITY_SEED")]
    pub seed: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Default tracing directives when RUST_LOG is unset
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "amenity_api=debug,works_tracker=debug,tower_http=debug"
        } else {
            "amenity_api=info,works_tracker=info,tower_http=debug"
        }
    }
}
