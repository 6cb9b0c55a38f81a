//! Form Input
//!
//! Raw form values and their conversion into request bodies.

use chrono::{NaiveDate, SecondsFormat};

use crate::error::FormError;
use crate::models::{InitiativeDraft, Registration, Role};

/// Values of the create-initiative form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitiativeForm {
    pub title: String,
    pub description: String,
    pub location: String,
    /// `YYYY-MM-DD` from a date input, or empty
    pub event_date: String,
}

impl InitiativeForm {
    pub fn to_draft(&self) -> Result<InitiativeDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingField("Title"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingField("Description"));
        }
        let location = self.location.trim();

        Ok(InitiativeDraft {
            title: title.to_string(),
            description: description.to_string(),
            location: (!location.is_empty()).then(|| location.to_string()),
            event_date: event_date_to_iso(&self.event_date)?,
        })
    }
}

/// `2025-03-05` -> `2025-03-05T00:00:00.000Z` (midnight UTC); empty -> `None`.
pub fn event_date_to_iso(input: &str) -> Result<Option<String>, FormError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(input.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| FormError::InvalidDate(input.to_string()))?;
    Ok(Some(midnight.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true)))
}

/// Values of the registration form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Checked before any request is sent.
    pub fn to_registration(&self) -> Result<Registration, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingField(name_label(self.role)));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingField("Email"));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("Password"));
        }

        Ok(Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

pub fn name_label(role: Role) -> &'static str {
    match role {
        Role::Organization => "Organization Name",
        Role::Volunteer => "Full Name",
    }
}

pub fn name_placeholder(role: Role) -> &'static str {
    match role {
        Role::Organization => "Enter your organization name",
        Role::Volunteer => "Enter your full name",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InitiativeForm {
        InitiativeForm {
            title: "  Beach cleanup ".into(),
            description: "Bring gloves".into(),
            location: "   ".into(),
            event_date: "2025-03-05".into(),
        }
    }

    #[test]
    fn test_draft_trims_and_converts_date() {
        let draft = filled_form().to_draft().unwrap();
        assert_eq!(draft.title, "Beach cleanup");
        assert_eq!(draft.location, None);
        assert_eq!(draft.event_date.as_deref(), Some("2025-03-05T00:00:00.000Z"));
    }

    #[test]
    fn test_draft_serializes_nulls() {
        let mut form = filled_form();
        form.event_date.clear();
        let body = serde_json::to_value(form.to_draft().unwrap()).unwrap();
        assert!(body["event_date"].is_null());
        assert!(body["location"].is_null());
    }

    #[test]
    fn test_draft_requires_title_and_description() {
        let mut form = filled_form();
        form.title = " ".into();
        assert_eq!(form.to_draft(), Err(FormError::MissingField("Title")));

        let mut form = filled_form();
        form.description.clear();
        assert_eq!(form.to_draft(), Err(FormError::MissingField("Description")));
    }

    #[test]
    fn test_bad_date_rejected() {
        assert_eq!(
            event_date_to_iso("2025-02-30"),
            Err(FormError::InvalidDate("2025-02-30".into()))
        );
        assert_eq!(event_date_to_iso(""), Ok(None));
    }

    #[test]
    fn test_password_mismatch() {
        let form = RegistrationForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret".into(),
            confirm_password: "secreT".into(),
            role: Role::Volunteer,
        };
        let err = form.to_registration().unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match!");
    }

    #[test]
    fn test_registration_for_organization() {
        let form = RegistrationForm {
            name: " Green Org ".into(),
            email: "g@o.org".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            role: Role::Organization,
        };
        let registration = form.to_registration().unwrap();
        assert_eq!(registration.name, "Green Org");
        assert_eq!(registration.role, Role::Organization);

        let blank = RegistrationForm { name: String::new(), ..form };
        assert_eq!(blank.to_registration(), Err(FormError::MissingField("Organization Name")));
    }

    #[test]
    fn test_name_label_follows_role() {
        assert_eq!(name_label(Role::Volunteer), "Full Name");
        assert_eq!(name_placeholder(Role::Organization), "Enter your organization name");
    }
}
