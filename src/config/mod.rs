pub mod file;

use crate::domain::ports::AppConfig;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-inn")]
#[command(about = "A small hotel booking service")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub bind_addr: String,

    #[arg(long, default_value = "sqlite:hotel.db?mode=rwc")]
    pub database_url: String,

    #[arg(long, help = "Load configuration from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Do not seed demo data into an empty catalog")]
    pub no_seed: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl AppConfig for CliConfig {
    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn database_url(&self) -> &str {
        &self.database_url
    }

    fn seed_demo_data(&self) -> bool {
        !self.no_seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_bind_addr("bind_addr", &self.bind_addr)?;
        validation::validate_url("database_url", &self.database_url, &["sqlite"])?;
        Ok(())
    }
}
