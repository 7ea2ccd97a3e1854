use crate::core::age::AgeCalculator;
use crate::core::credit_policy::CreditLimitPolicy;
use crate::core::credit_validator::CreditLimitValidator;
use crate::core::input_validator::InputValidator;
use crate::core::rules::RegistrationRules;
use crate::core::user_factory::UserFactory;
use crate::domain::model::{ClientId, RegistrationRequest};
use crate::domain::outcome::{Rejection, RegistrationOutcome};
use crate::domain::ports::{ClientLookup, CreditScoringService, UserStore};
use crate::utils::error::Result;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Runs one registration end to end: input checks, client lookup, credit limit
/// policy, credit limit floor, persistence. The first failed check wins.
pub struct UserRegistrar<L, U, S>
where
    L: ClientLookup,
    U: UserStore,
    S: CreditScoringService,
{
    clients: L,
    users: U,
    scoring: S,
    input_validator: InputValidator,
    factory: UserFactory,
    policy: CreditLimitPolicy,
    credit_validator: CreditLimitValidator,
}

impl<L, U, S> UserRegistrar<L, U, S>
where
    L: ClientLookup,
    U: UserStore,
    S: CreditScoringService,
{
    pub fn new(clients: L, users: U, scoring: S, clock: Arc<dyn Clock>) -> Self {
        Self::with_rules(clients, users, scoring, clock, RegistrationRules::default())
    }

    pub fn with_rules(
        clients: L,
        users: U,
        scoring: S,
        clock: Arc<dyn Clock>,
        rules: RegistrationRules,
    ) -> Self {
        Self {
            clients,
            users,
            scoring,
            input_validator: InputValidator::new(AgeCalculator::new(clock), rules.minimum_age),
            factory: UserFactory,
            policy: CreditLimitPolicy::new(rules.important_client_multiplier),
            credit_validator: CreditLimitValidator::new(rules.minimum_credit_limit),
        }
    }

    pub async fn register(&self, request: RegistrationRequest) -> Result<RegistrationOutcome> {
        tracing::info!("Registering user for client {}", request.client_id);
        tracing::debug!("Applicant: {} {}", request.first_name, request.last_name);

        if let Err(reason) = self.input_validator.validate(&request) {
            return Ok(reject(reason));
        }

        let client = match self.clients.get_by_id(request.client_id).await? {
            Some(client) => Arc::new(client),
            None => {
                return Ok(reject(Rejection::ClientNotFound {
                    client_id: request.client_id,
                }))
            }
        };
        tracing::debug!("Resolved client {} with tier {}", client.id, client.tier);

        let mut user = self.factory.create(&request, client);
        self.policy.apply(&mut user, &self.scoring).await?;

        if let Err(reason) = self.credit_validator.validate(&user) {
            return Ok(reject(reason));
        }

        self.users.add(&user).await?;
        let limit = user.credit_limit.map_or_else(|| "none".to_string(), |l| l.to_string());
        tracing::info!(
            "Registered user for client {} (credit limit: {})",
            user.client.id,
            limit
        );

        Ok(RegistrationOutcome::Registered(user))
    }

    /// `Ok(true)` when the user was stored, `Ok(false)` when a business rule
    /// rejected them. Collaborator failures are returned as errors.
    pub async fn register_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        birth_date: NaiveDate,
        client_id: impl Into<ClientId>,
    ) -> Result<bool> {
        let request = RegistrationRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            birth_date,
            client_id: client_id.into(),
        };
        let outcome = self.register(request).await?;
        Ok(outcome.is_registered())
    }
}

fn reject(reason: Rejection) -> RegistrationOutcome {
    tracing::warn!("Registration rejected ({}): {}", reason.code(), reason);
    RegistrationOutcome::Rejected(reason)
}
