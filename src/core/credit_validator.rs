use crate::domain::model::CandidateUser;
use crate::domain::outcome::Rejection;

#[derive(Debug, Clone, Copy)]
pub struct CreditLimitValidator {
    minimum_credit_limit: i64,
}

impl CreditLimitValidator {
    pub fn new(minimum_credit_limit: i64) -> Self {
        Self {
            minimum_credit_limit,
        }
    }

    /// Users without a credit limit always pass.
    pub fn validate(&self, user: &CandidateUser) -> Result<(), Rejection> {
        match user.credit_limit {
            Some(limit) if limit < self.minimum_credit_limit => {
                Err(Rejection::CreditLimitBelowFloor {
                    limit,
                    minimum: self.minimum_credit_limit,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::MINIMUM_CREDIT_LIMIT;
    use crate::core::test_support::client;
    use crate::domain::model::ClientTier;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn user_with_limit(credit_limit: Option<i64>) -> CandidateUser {
        CandidateUser {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1994, 3, 10).unwrap(),
            client: Arc::new(client(1, ClientTier::Standard)),
            credit_limit,
        }
    }

    #[test]
    fn test_limit_at_floor_passes() {
        let validator = CreditLimitValidator::new(MINIMUM_CREDIT_LIMIT);
        assert!(validator.validate(&user_with_limit(Some(500))).is_ok());
    }

    #[test]
    fn test_limit_below_floor_fails() {
        let validator = CreditLimitValidator::new(MINIMUM_CREDIT_LIMIT);
        assert_eq!(
            validator.validate(&user_with_limit(Some(499))),
            Err(Rejection::CreditLimitBelowFloor {
                limit: 499,
                minimum: 500
            })
        );
    }

    #[test]
    fn test_no_limit_is_never_checked() {
        let validator = CreditLimitValidator::new(MINIMUM_CREDIT_LIMIT);
        assert!(validator.validate(&user_with_limit(None)).is_ok());
    }
}
