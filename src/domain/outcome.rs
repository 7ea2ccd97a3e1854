use crate::domain::model::{CandidateUser, ClientId};
use thiserror::Error;

/// Business reason a registration was turned down.
///
/// These are expected outcomes, not failures of the registrar itself; collaborator
/// failures travel through [`crate::RegistrarError`] instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("first name must not be empty")]
    EmptyFirstName,

    #[error("last name must not be empty")]
    EmptyLastName,

    #[error("email address '{email}' must contain '@' and '.'")]
    InvalidEmail { email: String },

    #[error("user is {age} years old, minimum age is {minimum}")]
    Underage { age: i32, minimum: i32 },

    #[error("client {client_id} does not exist")]
    ClientNotFound { client_id: ClientId },

    #[error("credit limit {limit} is below the minimum of {minimum}")]
    CreditLimitBelowFloor { limit: i64, minimum: i64 },
}

impl Rejection {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyFirstName => "empty_first_name",
            Self::EmptyLastName => "empty_last_name",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::Underage { .. } => "underage",
            Self::ClientNotFound { .. } => "client_not_found",
            Self::CreditLimitBelowFloor { .. } => "credit_limit_below_floor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(CandidateUser),
    Rejected(Rejection),
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    pub fn user(&self) -> Option<&CandidateUser> {
        match self {
            Self::Registered(user) => Some(user),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Registered(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Rejection> for RegistrationOutcome {
    fn from(reason: Rejection) -> Self {
        Self::Rejected(reason)
    }
}
