//! Pharmacy Application CLI

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = Cli::parse().run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
