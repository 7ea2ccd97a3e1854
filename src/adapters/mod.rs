// Adapters layer: concrete collaborators behind the domain ports.

pub mod client_directory;
pub mod credit_scoring;
pub mod user_store;

pub use client_directory::InMemoryClientDirectory;
pub use credit_scoring::{HttpCreditScoringService, HttpScoringSession};
pub use user_store::{InMemoryUserStore, JsonLinesUserStore};
