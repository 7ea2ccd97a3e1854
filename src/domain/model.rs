use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i32);

impl From<i32> for ClientId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client classification driving the credit limit policy.
///
/// Parsing accepts the legacy type names (`VeryImportantClient`,
/// `ImportantClient`); every unrecognised name is treated as [`ClientTier::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientTier {
    #[default]
    Standard,
    Important,
    VeryImportant,
}

impl ClientTier {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "VeryImportant" | "VeryImportantClient" => Self::VeryImportant,
            "Important" | "ImportantClient" => Self::Important,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Important => "Important",
            Self::VeryImportant => "VeryImportant",
        }
    }
}

impl From<String> for ClientTier {
    fn from(value: String) -> Self {
        Self::from_type_name(&value)
    }
}

impl From<ClientTier> for String {
    fn from(value: ClientTier) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ClientTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub tier: ClientTier,
}

/// Raw registration inputs, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub client_id: ClientId,
}

/// A user assembled during one registration attempt.
///
/// `credit_limit` is `None` when the user has no limit at all; such users are
/// never checked against the credit limit floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub client: Arc<Client>,
    pub credit_limit: Option<i64>,
}

impl CandidateUser {
    pub fn has_credit_limit(&self) -> bool {
        self.credit_limit.is_some()
    }
}
