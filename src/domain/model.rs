use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Case data is an open key-value record owned by the case data store.
pub type CaseData = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseDetails {
    pub id: Option<i64>,
    pub jurisdiction: Option<String>,
    pub state: Option<String>,
    pub case_type_id: Option<String>,
    pub created_date: Option<NaiveDateTime>,
    pub last_modified: Option<NaiveDateTime>,
    #[serde(rename = "case_data", default)]
    pub data: CaseData,
}

impl CaseDetails {
    /// A draft handed back to the frontend as if it were a case: only the data is set.
    pub fn from_data(data: CaseData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn id_string(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.data.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn string_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub summary: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDataContent {
    pub event: Event,
    pub event_token: String,
    pub ignore_warning: bool,
    pub data: CaseData,
}

impl CaseDataContent {
    /// Build the submission body for an event that has just been started.
    pub fn for_event(
        start: &StartEventResponse,
        summary: &str,
        description: &str,
        data: CaseData,
    ) -> Self {
        Self {
            event: Event {
                id: start.event_id.clone(),
                summary: summary.to_string(),
                description: description.to_string(),
            },
            event_token: start.token.clone(),
            ignore_warning: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartEventResponse {
    pub token: String,
    pub event_id: String,
    #[serde(default)]
    pub case_details: Option<CaseDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total: i64,
    #[serde(default)]
    pub cases: Vec<CaseDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub forename: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// An authenticated identity together with the bearer token it was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub auth_token: String,
    pub details: UserDetails,
}

impl User {
    pub fn id(&self) -> &str {
        &self.details.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: String,
    #[serde(default)]
    pub document: CaseData,
    #[serde(rename = "type")]
    pub draft_type: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftPaging {
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftList {
    #[serde(default)]
    pub data: Vec<Draft>,
    #[serde(default)]
    pub paging: DraftPaging,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDraft {
    pub document: CaseData,
    #[serde(rename = "type")]
    pub draft_type: String,
    pub max_stale_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateDraft {
    pub document: CaseData,
    #[serde(rename = "type")]
    pub draft_type: String,
}

/// Who the case data store call is made as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Citizen,
    Caseworker,
}

impl Actor {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Actor::Citizen => "citizens",
            Actor::Caseworker => "caseworkers",
        }
    }
}

/// The party whose case is being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Petitioner,
    Respondent,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Petitioner => write!(f, "petitioner"),
            Role::Respondent => write!(f, "respondent"),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for id, got {}",
            other
        ))),
    }
}
