use crate::domain::model::{CandidateUser, ClientTier};
use crate::domain::ports::{CreditScoringService, CreditScoringSession};
use crate::utils::error::Result;

/// Owns one scoring session and releases it when dropped.
///
/// Release runs on every exit path, including early returns through `?` after a
/// failed lookup.
pub struct ScoringScope<S: CreditScoringSession> {
    session: S,
}

impl<S: CreditScoringSession> ScoringScope<S> {
    pub async fn acquire<P>(service: &P) -> Result<Self>
    where
        P: CreditScoringService<Session = S> + ?Sized,
    {
        let session = service.open_session().await?;
        tracing::debug!("Credit scoring session acquired");
        Ok(Self { session })
    }

    pub fn session(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S: CreditScoringSession> Drop for ScoringScope<S> {
    fn drop(&mut self) {
        self.session.release();
        tracing::debug!("Credit scoring session released");
    }
}

/// Decides whether a user gets a credit limit and how large it is.
#[derive(Debug, Clone, Copy)]
pub struct CreditLimitPolicy {
    important_client_multiplier: i64,
}

impl CreditLimitPolicy {
    pub fn new(important_client_multiplier: i64) -> Self {
        Self {
            important_client_multiplier,
        }
    }

    /// Fills in `user.credit_limit` according to the tier of `user.client`.
    ///
    /// Very important clients get no limit and the scoring service is not contacted.
    /// Everyone else gets the base limit from the scoring service, multiplied for
    /// important clients.
    pub async fn apply<P>(&self, user: &mut CandidateUser, scoring: &P) -> Result<()>
    where
        P: CreditScoringService + ?Sized,
    {
        let tier = user.client.tier;
        if tier == ClientTier::VeryImportant {
            user.credit_limit = None;
            return Ok(());
        }

        let base_limit = fetch_base_limit(scoring, user).await?;

        let credit_limit = match tier {
            ClientTier::Important => base_limit.saturating_mul(self.important_client_multiplier),
            _ => base_limit,
        };

        tracing::debug!(
            "Client tier {} -> base limit {}, final limit {}",
            tier,
            base_limit,
            credit_limit
        );
        user.credit_limit = Some(credit_limit);
        Ok(())
    }
}

async fn fetch_base_limit<P>(scoring: &P, user: &CandidateUser) -> Result<i64>
where
    P: CreditScoringService + ?Sized,
{
    let mut scope = ScoringScope::acquire(scoring).await?;
    let base_limit = scope
        .session()
        .credit_limit(&user.last_name, user.birth_date)
        .await?;
    Ok(base_limit)
}

impl Default for CreditLimitPolicy {
    fn default() -> Self {
        Self::new(crate::core::rules::IMPORTANT_CLIENT_MULTIPLIER)
    }
}
