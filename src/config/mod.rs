pub mod toml_config;

pub use toml_config::RegistrarConfig;

#[cfg(feature = "cli")]
use crate::core::{ClientId, RegistrationRequest};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "user-registrar")]
#[command(about = "Validate and register a new user account")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "registrar-config.toml")]
    pub config: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    /// Birth date as YYYY-MM-DD
    #[arg(long)]
    pub birth_date: NaiveDate,

    #[arg(long)]
    pub client_id: i32,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Run every check but keep the user in memory instead of the user store
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn registration_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            birth_date: self.birth_date,
            client_id: ClientId(self.client_id),
        }
    }
}
