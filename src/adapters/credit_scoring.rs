use crate::core::{CreditScoringService, CreditScoringSession, Result};
use crate::utils::error::RegistrarError;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreditLimitResponse {
    credit_limit: i64,
}

/// Credit scoring over HTTP.
///
/// Each session owns its own `reqwest` client, built on [`open_session`] and
/// dropped on release, so nothing is pooled across registrations.
///
/// [`open_session`]: CreditScoringService::open_session
#[derive(Debug, Clone)]
pub struct HttpCreditScoringService {
    endpoint: Url,
    timeout: Duration,
}

impl HttpCreditScoringService {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CreditScoringService for HttpCreditScoringService {
    type Session = HttpScoringSession;

    async fn open_session(&self) -> Result<HttpScoringSession> {
        let client = Client::builder().timeout(self.timeout).build()?;
        Ok(HttpScoringSession {
            client: Some(client),
            endpoint: self.endpoint.clone(),
        })
    }
}

#[derive(Debug)]
pub struct HttpScoringSession {
    client: Option<Client>,
    endpoint: Url,
}

impl HttpScoringSession {
    fn request_url(&self, last_name: &str, birth_date: NaiveDate) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("lastName", last_name)
            .append_pair("dateOfBirth", &birth_date.format("%Y-%m-%d").to_string());
        url
    }

    pub fn is_released(&self) -> bool {
        self.client.is_none()
    }
}

#[async_trait]
impl CreditScoringSession for HttpScoringSession {
    async fn credit_limit(&mut self, last_name: &str, birth_date: NaiveDate) -> Result<i64> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| RegistrarError::ScoringError {
                message: "scoring session already released".to_string(),
            })?;

        let url = self.request_url(last_name, birth_date);
        tracing::debug!("Requesting credit limit from: {}", url);

        let response = client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Credit scoring response status: {}", status);

        if !status.is_success() {
            return Err(RegistrarError::ScoringError {
                message: format!("credit scoring service returned {}", status),
            });
        }

        let body: CreditLimitResponse = response.json().await?;
        Ok(body.credit_limit)
    }

    fn release(&mut self) {
        self.client = None;
    }
}
