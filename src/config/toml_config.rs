use crate::adapters::credit_scoring::DEFAULT_TIMEOUT;
use crate::core::rules::RegistrationRules;
use crate::core::Client;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    #[serde(default)]
    pub rules: RegistrationRules,
    pub credit_scoring: CreditScoringConfig,
    pub user_store: UserStoreConfig,
    #[serde(default)]
    pub clients: Vec<Client>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScoringConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStoreConfig {
    pub path: String,
}

impl RegistrarConfig {
    /// Loads and parses a configuration file. Call `validate` before use.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RegistrarError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistrarError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable `VAR`.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistrarError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.rules.validate()?;

        validate_url("credit_scoring.endpoint", &self.credit_scoring.endpoint)?;
        if let Some(timeout) = self.credit_scoring.timeout_seconds {
            validate_positive_number("credit_scoring.timeout_seconds", timeout, 1)?;
        }

        validate_path("user_store.path", &self.user_store.path)?;

        let mut seen = HashSet::new();
        for client in &self.clients {
            validate_non_empty_string("clients.name", &client.name)?;
            if !seen.insert(client.id) {
                return Err(RegistrarError::InvalidConfigValueError {
                    field: "clients.id".to_string(),
                    value: client.id.to_string(),
                    reason: "Duplicate client id".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn scoring_endpoint(&self) -> Result<Url> {
        validate_url("credit_scoring.endpoint", &self.credit_scoring.endpoint)
    }

    pub fn scoring_timeout(&self) -> Duration {
        self.credit_scoring
            .timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn user_store_path(&self) -> &str {
        &self.user_store.path
    }
}

impl Validate for RegistrarConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
