use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const MINIMUM_AGE: i32 = 21;
pub const MINIMUM_CREDIT_LIMIT: i64 = 500;
pub const IMPORTANT_CLIENT_MULTIPLIER: i64 = 2;

/// Thresholds applied during registration. Defaults are the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRules {
    pub minimum_age: i32,
    pub minimum_credit_limit: i64,
    pub important_client_multiplier: i64,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            minimum_age: MINIMUM_AGE,
            minimum_credit_limit: MINIMUM_CREDIT_LIMIT,
            important_client_multiplier: IMPORTANT_CLIENT_MULTIPLIER,
        }
    }
}

impl Validate for RegistrationRules {
    fn validate(&self) -> Result<()> {
        validate_range("rules.minimum_age", self.minimum_age, 0, 150)?;

        if self.minimum_credit_limit < 0 {
            return Err(RegistrarError::InvalidConfigValueError {
                field: "rules.minimum_credit_limit".to_string(),
                value: self.minimum_credit_limit.to_string(),
                reason: "Credit limit floor cannot be negative".to_string(),
            });
        }

        validate_range(
            "rules.important_client_multiplier",
            self.important_client_multiplier,
            1,
            100,
        )
    }
}
