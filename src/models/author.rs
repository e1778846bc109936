//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::form;
use crate::error::AppResult;

/// Full author model from database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
}

impl Author {
    /// "First Last", or whichever part is known
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Author form as submitted by the create and edit pages
#[derive(Debug, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(rename = "nom", default, deserialize_with = "form::lenient_text")]
    pub last_name: Option<String>,
    #[serde(rename = "prenom", default, deserialize_with = "form::lenient_text")]
    pub first_name: Option<String>,
    #[serde(rename = "dateNaissance")]
    pub birth_date: Option<String>,
    #[serde(rename = "dateDeces")]
    pub death_date: Option<String>,
}

/// Every writable author field; used for inserts and full overwrites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorInput {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
}

impl AuthorForm {
    pub fn into_input(self) -> AppResult<AuthorInput> {
        Ok(AuthorInput {
            last_name: form::text(self.last_name),
            first_name: form::text(self.first_name),
            birth_date: form::date("dateNaissance", self.birth_date)?,
            death_date: form::date("dateDeces", self.death_date)?,
        })
    }
}

impl AuthorInput {
    pub fn into_author(self, id: Uuid) -> Author {
        Author {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            birth_date: self.birth_date,
            death_date: self.death_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_into_input() {
        let input = AuthorForm {
            last_name: Some("Hugo".into()),
            first_name: Some(" Victor ".into()),
            birth_date: Some("1802-02-26".into()),
            death_date: Some("".into()),
        }
        .into_input()
        .unwrap();

        assert_eq!(input.last_name.as_deref(), Some("Hugo"));
        assert_eq!(input.first_name.as_deref(), Some("Victor"));
        assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1802, 2, 26));
        assert_eq!(input.death_date, None);
    }

    #[test]
    fn test_form_rejects_malformed_date() {
        let form = AuthorForm {
            death_date: Some("yesterday".into()),
            ..Default::default()
        };
        assert!(form.into_input().is_err());
    }

    #[test]
    fn test_form_field_names() {
        let form: AuthorForm = serde_json::from_str(
            r#"{"nom": "Sand", "prenom": "George", "dateNaissance": "1804-07-01"}"#,
        )
        .unwrap();
        assert_eq!(form.last_name.as_deref(), Some("Sand"));
        assert_eq!(form.first_name.as_deref(), Some("George"));
        assert_eq!(form.birth_date.as_deref(), Some("1804-07-01"));
        assert_eq!(form.death_date, None);
    }

    #[test]
    fn test_display_name() {
        let author = AuthorInput {
            last_name: Some("Hugo".into()),
            first_name: Some("Victor".into()),
            ..Default::default()
        }
        .into_author(Uuid::new_v4());
        assert_eq!(author.display_name(), "Victor Hugo");

        let anonymous = AuthorInput::default().into_author(Uuid::new_v4());
        assert_eq!(anonymous.display_name(), "");
    }
}
