use clap::{Parser, Subcommand};

mod seed;

#[derive(Debug, Parser)]
#[command(name = "pharmacy-app", about = "Pharmacy CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replace the store contents with the demo catalog, user and coupons
    Seed(seed::SeedArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Seed(args) => seed::run(args).await,
        }
    }
}
