pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::RegistrarConfig;

pub use adapters::{
    HttpCreditScoringService, InMemoryClientDirectory, InMemoryUserStore, JsonLinesUserStore,
};
pub use crate::core::{
    registrar::UserRegistrar, rules::RegistrationRules, CandidateUser, Client, ClientId,
    ClientTier, Rejection, RegistrationOutcome, RegistrationRequest,
};
pub use utils::error::{RegistrarError, Result};
