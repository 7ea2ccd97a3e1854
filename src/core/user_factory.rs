use crate::domain::model::{CandidateUser, Client, RegistrationRequest};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct UserFactory;

impl UserFactory {
    /// Copies the request into a new user. The credit limit is left unset.
    pub fn create(&self, request: &RegistrationRequest, client: Arc<Client>) -> CandidateUser {
        CandidateUser {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            birth_date: request.birth_date,
            client,
            credit_limit: None,
        }
    }
}
