use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A stored user account. `id` is assigned by the repository and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub postcode: String,
}

/// Create/update payload: every mutable field, no id.
///
/// `email`, `name` and `postcode` must be non-empty, and a value made only of
/// whitespace counts as empty: `"   "` is rejected by [`UserInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub email: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub postcode: String,
}

impl UserInput {
    /// String fields must carry at least one non-whitespace character.
    pub fn validate(&self) -> Result<(), ServiceError> {
        for (field, value) in [("email", &self.email), ("name", &self.name), ("postcode", &self.postcode)] {
            if value.trim().is_empty() {
                return Err(ServiceError::Validation(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn into_user(self, id: i32) -> User {
        User { id, email: self.email, name: self.name, date_of_birth: self.date_of_birth, postcode: self.postcode }
    }
}

impl User {
    /// Full replace of the mutable fields.
    pub fn replace_with(&mut self, input: UserInput) {
        self.email = input.email;
        self.name = input.name;
        self.date_of_birth = input.date_of_birth;
        self.postcode = input.postcode;
    }
}

impl From<models::user_account::Model> for User {
    fn from(m: models::user_account::Model) -> Self {
        Self { id: m.id, email: m.email, name: m.name, date_of_birth: m.date_of_birth, postcode: m.postcode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> UserInput {
        UserInput {
            email: "a@x.com".into(),
            name: "A".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            postcode: "N1".into(),
        }
    }

    #[test]
    fn accepts_filled_fields() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn rejects_blank_fields() {
        let blank_email = UserInput { email: "".into(), ..input() };
        let blank_name = UserInput { name: "   ".into(), ..input() };
        let blank_postcode = UserInput { postcode: "\t".into(), ..input() };
        for (bad, field) in [(blank_email, "email"), (blank_name, "name"), (blank_postcode, "postcode")] {
            match bad.validate() {
                Err(ServiceError::Validation(msg)) => assert!(msg.starts_with(field), "{msg}"),
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn padded_values_are_accepted_as_is() {
        let padded = UserInput { name: "  Ann ".into(), postcode: " N1".into(), ..input() };
        assert!(padded.validate().is_ok());
        assert_eq!(padded.into_user(1).name, "  Ann ");
    }

    #[test]
    fn replace_keeps_id() {
        let mut user = input().into_user(4);
        user.replace_with(UserInput { name: "B".into(), ..input() });
        assert_eq!(user.id, 4);
        assert_eq!(user.name, "B");
    }

    #[test]
    fn deserializes_iso_date_and_ignores_id() {
        let parsed: UserInput = serde_json::from_str(
            r#"{"id": 42, "email": "a@x.com", "name": "A", "date_of_birth": "1990-01-01", "postcode": "N1"}"#,
        )
        .unwrap();
        assert_eq!(parsed, input());
    }
}
