//! Coercion of raw form fields into typed values

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Scalar accepted where a text field is expected
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Deserialize an optional text field, casting JSON numbers and booleans
/// to their textual form.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// Trim a text field; blank becomes `None`
pub(crate) fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a date field sent by an HTML date input (`YYYY-MM-DD`) or as an
/// RFC 3339 date-time, of which the UTC date is kept.
pub(crate) fn date(field: &str, value: Option<String>) -> AppResult<Option<NaiveDate>> {
    let Some(raw) = text(value) else {
        return Ok(None);
    };

    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.with_timezone(&Utc).date_naive()))
        .map_err(|_| AppError::Validation(format!("Date invalide pour {} : {}", field, raw)))
}

/// Parse an optional record reference
pub(crate) fn reference(field: &str, value: Option<String>) -> AppResult<Option<Uuid>> {
    let Some(raw) = text(value) else {
        return Ok(None);
    };

    Uuid::parse_str(&raw)
        .map(Some)
        .map_err(|_| AppError::Validation(format!("Identifiant invalide pour {} : {}", field, raw)))
}
