use crate::core::age::AgeCalculator;
use crate::domain::model::RegistrationRequest;
use crate::domain::outcome::Rejection;

/// Checks the raw registration inputs before any collaborator is involved.
#[derive(Debug, Clone)]
pub struct InputValidator {
    ages: AgeCalculator,
    minimum_age: i32,
}

impl InputValidator {
    pub fn new(ages: AgeCalculator, minimum_age: i32) -> Self {
        Self { ages, minimum_age }
    }

    pub fn validate(&self, request: &RegistrationRequest) -> Result<(), Rejection> {
        if request.first_name.is_empty() {
            return Err(Rejection::EmptyFirstName);
        }
        if request.last_name.is_empty() {
            return Err(Rejection::EmptyLastName);
        }

        // Shape check only.
        if !request.email.contains('@') || !request.email.contains('.') {
            return Err(Rejection::InvalidEmail {
                email: request.email.clone(),
            });
        }

        let age = self.ages.age(request.birth_date);
        if age < self.minimum_age {
            return Err(Rejection::Underage {
                age,
                minimum: self.minimum_age,
            });
        }

        Ok(())
    }
}
