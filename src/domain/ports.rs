use crate::domain::model::{CandidateUser, Client, ClientId};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait ClientLookup: Send + Sync {
    /// `Ok(None)` when no client has the given id.
    async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add(&self, user: &CandidateUser) -> Result<()>;
}

/// Entry point to the external credit scoring service.
///
/// Every lookup happens on a session obtained from [`open_session`]; the caller
/// owns the session and must [`release`] it once the single call is done.
/// [`crate::core::credit_policy::ScoringScope`] takes care of that.
///
/// [`open_session`]: CreditScoringService::open_session
/// [`release`]: CreditScoringSession::release
#[async_trait]
pub trait CreditScoringService: Send + Sync {
    type Session: CreditScoringSession;

    async fn open_session(&self) -> Result<Self::Session>;
}

#[async_trait]
pub trait CreditScoringSession: Send {
    /// Base credit limit for the given person, before any tier multiplier.
    async fn credit_limit(&mut self, last_name: &str, birth_date: NaiveDate) -> Result<i64>;

    fn release(&mut self);
}
