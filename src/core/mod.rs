pub mod age;
pub mod credit_policy;
pub mod credit_validator;
pub mod input_validator;
pub mod registrar;
pub mod rules;
pub mod user_factory;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{CandidateUser, Client, ClientId, ClientTier, RegistrationRequest};
pub use crate::domain::outcome::{Rejection, RegistrationOutcome};
pub use crate::domain::ports::{ClientLookup, CreditScoringService, CreditScoringSession, UserStore};
pub use crate::utils::error::Result;
