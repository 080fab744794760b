//! sadata CLI
//!
//! Runs list and get requests against JSON datasets and prints the response
//! envelope.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sadata_core::logging_facility::{self, Profile};

mod commands;
mod config;

use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "sadata")]
#[command(about = "sadata - query South African schools and hospitals", long_about = None)]
struct Cli {
    /// Config file (default: sadata.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Schools dataset (JSON array)
    #[arg(long, global = true)]
    schools: Option<PathBuf>,

    /// Hospitals dataset (JSON array)
    #[arg(long, global = true)]
    hospitals: Option<PathBuf>,

    /// Log profile: development, production or test
    #[arg(long, global = true, value_parser = config::parse_profile)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List records, optionally filtered and paginated
    List(commands::list::ListArgs),
    /// Get one record by id
    Get(commands::get::GetArgs),
}

impl Cli {
    /// Merge flags over the file config
    fn resolve_config(&self) -> Result<CliConfig, config::ConfigError> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        if let Some(profile) = self.log_profile {
            config.log_profile = profile;
        }
        if let Some(path) = &self.schools {
            config.schools_path = Some(path.clone());
        }
        if let Some(path) = &self.hospitals {
            config.hospitals_path = Some(path.clone());
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging_facility::init(config.log_profile);

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args, &config),
        Commands::Get(args) => commands::get::execute(args, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
