//! Test doubles shared by the core unit tests.

use crate::domain::model::{CandidateUser, Client, ClientId, ClientTier};
use crate::domain::ports::{ClientLookup, CreditScoringService, CreditScoringSession, UserStore};
use crate::utils::error::{RegistrarError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct FixedClock {
    now: DateTime<Local>,
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

/// A clock stopped at local noon on `today`, whatever the host time zone.
pub fn fixed_clock(today: NaiveDate) -> Arc<dyn Clock> {
    let now = Local
        .from_local_datetime(&today.and_hms_opt(12, 0, 0).unwrap())
        .earliest()
        .unwrap();
    Arc::new(FixedClock { now })
}

pub fn client(id: i32, tier: ClientTier) -> Client {
    Client {
        id: ClientId(id),
        name: format!("client-{id}"),
        tier,
    }
}

#[derive(Clone, Default)]
pub struct FakeClientLookup {
    clients: HashMap<ClientId, Client>,
}

impl FakeClientLookup {
    pub fn with(clients: Vec<Client>) -> Self {
        Self {
            clients: clients.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

#[async_trait]
impl ClientLookup for FakeClientLookup {
    async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>> {
        Ok(self.clients.get(&id).cloned())
    }
}

#[derive(Clone, Default)]
pub struct RecordingUserStore {
    users: Arc<Mutex<Vec<CandidateUser>>>,
}

impl RecordingUserStore {
    pub fn saved(&self) -> Vec<CandidateUser> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for RecordingUserStore {
    async fn add(&self, user: &CandidateUser) -> Result<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

/// Scoring double that returns a fixed base limit and counts session lifecycle calls.
#[derive(Clone)]
pub struct StubScoringService {
    base_limit: i64,
    fail_lookups: bool,
    pub opened: Arc<AtomicUsize>,
    pub released: Arc<AtomicUsize>,
    pub calls: Arc<Mutex<Vec<(String, NaiveDate)>>>,
}

impl StubScoringService {
    pub fn returning(base_limit: i64) -> Self {
        Self {
            base_limit,
            fail_lookups: false,
            opened: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_lookups: true,
            ..Self::returning(0)
        }
    }

    pub fn opened_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released_count(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

pub struct StubSession {
    service: StubScoringService,
}

#[async_trait]
impl CreditScoringService for StubScoringService {
    type Session = StubSession;

    async fn open_session(&self) -> Result<StubSession> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(StubSession {
            service: self.clone(),
        })
    }
}

#[async_trait]
impl CreditScoringSession for StubSession {
    async fn credit_limit(&mut self, last_name: &str, birth_date: NaiveDate) -> Result<i64> {
        self.service
            .calls
            .lock()
            .unwrap()
            .push((last_name.to_string(), birth_date));

        if self.service.fail_lookups {
            return Err(RegistrarError::ScoringError {
                message: "scoring backend unavailable".to_string(),
            });
        }
        Ok(self.service.base_limit)
    }

    fn release(&mut self) {
        self.service.released.fetch_add(1, Ordering::SeqCst);
    }
}
