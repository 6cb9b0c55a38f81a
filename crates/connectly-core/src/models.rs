//! Models
//!
//! Data structures matching the backend payloads.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Account type chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Volunteer,
    Organization,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Volunteer => "volunteer",
            Role::Organization => "organization",
        }
    }

    /// Value of the role `<select>`; anything unknown is a volunteer.
    pub fn from_form_value(s: &str) -> Self {
        match s {
            "organization" => Role::Organization,
            _ => Role::Volunteer,
        }
    }
}

/// Logged-in user profile (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn is_volunteer(&self) -> bool {
        self.role == Role::Volunteer
    }

    pub fn is_organization(&self) -> bool {
        self.role == Role::Organization
    }
}

/// Opaque session token issued by `/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    pub session_id: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into() }
    }

    pub fn token(&self) -> &str {
        &self.session_id
    }
}

/// A session together with the user it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub session: Session,
    pub user: User,
}

/// Volunteer record embedded in an initiative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub participant_name: String,
}

/// Initiative data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub creator_name: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<Participant>,
}

impl Initiative {
    /// Whether a participant with exactly this name is listed.
    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.participant_name == name)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// "1 person is in" / "3 people are in"
    pub fn participant_label(&self) -> String {
        match self.participant_count() {
            1 => "1 person is in".to_string(),
            n => format!("{} people are in", n),
        }
    }

    /// Human readable event date, or the raw value when it is not a known format.
    pub fn event_date_label(&self) -> Option<String> {
        let raw = self.event_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.format("%b %-d, %Y").to_string());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.format("%b %-d, %Y").to_string());
        }
        Some(raw.to_string())
    }

    /// Only the organization that created an initiative may delete it.
    pub fn can_delete(&self, user: &User) -> bool {
        user.is_organization() && self.creator_name == user.name
    }
}

/// Response of `POST /login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub session_id: String,
    pub user: User,
}

impl From<LoginResponse> for AuthSession {
    fn from(resp: LoginResponse) -> Self {
        Self {
            session: Session::new(resp.session_id),
            user: resp.user,
        }
    }
}

/// Response of `GET /account`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub user: User,
    #[serde(default, deserialize_with = "null_as_default")]
    pub initiatives: Vec<Initiative>,
}

/// Body of `POST /initiatives`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitiativeDraft {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub event_date: Option<String>,
}

/// Body of `POST /register`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initiative_null_participants() {
        let json = r#"{"id":7,"title":"Beach cleanup","description":"Bring gloves",
            "location":null,"creator_name":"Green Org","event_date":null,"participants":null}"#;
        let initiative: Initiative = serde_json::from_str(json).unwrap();
        assert!(initiative.participants.is_empty());
        assert_eq!(initiative.participant_label(), "0 people are in");
    }

    #[test]
    fn test_initiative_missing_optional_fields() {
        let initiative: Initiative = serde_json::from_str(r#"{"id":1,"title":"Tree planting"}"#).unwrap();
        assert_eq!(initiative.description, "");
        assert!(initiative.location.is_none());
        assert!(initiative.participants.is_empty());
    }

    #[test]
    fn test_has_participant_matches_exact_name() {
        let initiative: Initiative = serde_json::from_str(
            r#"{"id":1,"title":"t","participants":[{"participant_name":"Ana"},{"participant_name":"Ben"}]}"#,
        )
        .unwrap();
        assert!(initiative.has_participant("Ben"));
        assert!(!initiative.has_participant("ben"));
        assert_eq!(initiative.participant_label(), "2 people are in");
    }

    #[test]
    fn test_single_participant_label() {
        let initiative: Initiative = serde_json::from_str(
            r#"{"id":1,"title":"t","participants":[{"participant_name":"Ana"}]}"#,
        )
        .unwrap();
        assert_eq!(initiative.participant_label(), "1 person is in");
    }

    #[test]
    fn test_event_date_label() {
        let mut initiative: Initiative = serde_json::from_str(r#"{"id":1,"title":"t"}"#).unwrap();
        assert_eq!(initiative.event_date_label(), None);

        initiative.event_date = Some("2025-03-05T00:00:00.000Z".into());
        assert_eq!(initiative.event_date_label().as_deref(), Some("Mar 5, 2025"));

        initiative.event_date = Some("next saturday".into());
        assert_eq!(initiative.event_date_label().as_deref(), Some("next saturday"));
    }

    #[test]
    fn test_role_serde_lowercase() {
        let user: User = serde_json::from_str(r#"{"name":"Green Org","role":"organization","email":"g@o.org"}"#).unwrap();
        assert!(user.is_organization());
        assert_eq!(serde_json::to_string(&Role::Volunteer).unwrap(), r#""volunteer""#);
        assert_eq!(Role::from_form_value("organization"), Role::Organization);
        assert_eq!(Role::from_form_value("anything"), Role::Volunteer);
    }

    #[test]
    fn test_only_creating_organization_can_delete() {
        let initiative: Initiative =
            serde_json::from_str(r#"{"id":1,"title":"t","creator_name":"Green Org"}"#).unwrap();
        let user = |name: &str, role| User { name: name.into(), role, email: String::new() };

        assert!(initiative.can_delete(&user("Green Org", Role::Organization)));
        assert!(!initiative.can_delete(&user("Blue Org", Role::Organization)));
        assert!(!initiative.can_delete(&user("Green Org", Role::Volunteer)));
    }
}
