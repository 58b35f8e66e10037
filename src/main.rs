use betledger::cli::{Cli, Commands};
use betledger::config::Config;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = match Config::load(cli.command.config_path()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match &cli.command {
        Commands::Record(args) => betledger::cli::record::execute(&config, args).await,
        Commands::Grade(args) => betledger::cli::grade::execute(&config, args).await,
        Commands::Stats(_) => betledger::cli::stats::execute(&config).await,
        Commands::Pending(_) => betledger::cli::pending::execute(&config).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
