//! Schema validation for flow inputs and model outputs.
//!
//! Every flow validates twice: the caller's payload on the way in and the
//! model's JSON on the way out. Both directions deserialize into typed
//! structs and then run a [`Schema::validate`] pass for the rules serde
//! cannot express, so a malformed completion fails exactly like a malformed
//! form.

use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;
use thiserror::Error;

pub mod inputs;
pub mod movie;

/// A payload did not match its declared shape. `field` is a path such as
/// `movies[2].description`, or `$` for the payload itself.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid field `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Re-roots this error under `prefix`, e.g. `title` under `movies[1]`.
    pub fn under(self, prefix: &str) -> Self {
        let field = match self.field.as_str() {
            "$" => prefix.to_string(),
            field if field.starts_with('[') => format!("{prefix}{field}"),
            field => format!("{prefix}.{field}"),
        };
        Self { field, ..self }
    }
}

/// A typed payload decoded from untyped JSON.
pub trait Schema: DeserializeOwned {
    /// Checks that deserialization alone cannot enforce.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let parsed: Self = decode(value)?;
        parsed.validate()?;
        Ok(parsed)
    }
}

/// Deserializes `value`, reporting the failing field by path.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let reason = err.inner().to_string();
        let mut field = render_path(err.path());
        // serde reports a missing field against the enclosing object.
        if let Some(missing) = missing_field(&reason) {
            field = if field.is_empty() {
                missing.to_string()
            } else {
                format!("{field}.{missing}")
            };
        }
        if field.is_empty() {
            field = "$".to_string();
        }
        ValidationError::new(field, reason)
    })
}

fn render_path(path: &serde_path_to_error::Path) -> String {
    let mut rendered = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => rendered.push_str(&format!("[{index}]")),
            Segment::Map { key } | Segment::Enum { variant: key } => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            Segment::Unknown => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push('?');
            }
        }
    }
    rendered
}

fn missing_field(reason: &str) -> Option<&str> {
    reason
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(field, _)| field)
}

/// Fails when `value` is empty after trimming.
pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

/// Fails when `value` is present and outside `range`.
pub fn check_range<T>(
    field: &str,
    value: Option<T>,
    range: RangeInclusive<T>,
) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    match value {
        Some(v) if !range.contains(&v) => Err(ValidationError::new(
            field,
            format!(
                "must be between {} and {}, got {v}",
                range.start(),
                range.end()
            ),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[allow(dead_code)]
    #[derive(Debug, Deserialize)]
    struct Shelf {
        name: String,
        items: Vec<Item>,
    }

    #[allow(dead_code)]
    #[derive(Debug, Deserialize)]
    struct Item {
        title: String,
        year: Option<i32>,
    }

    #[test]
    fn test_missing_field_names_field() {
        let err = decode::<Item>(&json!({"year": 1995})).unwrap_err();
        assert_eq!(err.field, "title");
        assert!(err.reason.contains("missing field"));
    }

    #[test]
    fn test_missing_nested_field_has_full_path() {
        let err = decode::<Shelf>(&json!({
            "name": "Crime",
            "items": [{"title": "Heat"}, {"year": 1998}]
        }))
        .unwrap_err();
        assert_eq!(err.field, "items[1].title");
    }

    #[test]
    fn test_wrong_type_is_reported_at_its_path() {
        let err = decode::<Shelf>(&json!({"name": "Crime", "items": [{"title": 42}]}))
            .unwrap_err();
        assert_eq!(err.field, "items[0].title");
        assert!(err.reason.contains("string"));
    }

    #[test]
    fn test_null_counts_as_absent_for_options() {
        let item = decode::<Item>(&json!({"title": "Heat", "year": null})).unwrap();
        assert!(item.year.is_none());
    }

    #[test]
    fn test_fractional_integer_is_rejected() {
        let err = decode::<Item>(&json!({"title": "Heat", "year": 1995.5})).unwrap_err();
        assert_eq!(err.field, "year");
    }

    #[test]
    fn test_root_type_error_is_dollar() {
        let err = decode::<Item>(&json!("Heat")).unwrap_err();
        assert_eq!(err.field, "$");
    }

    #[test]
    fn test_under_reroots_paths() {
        assert_eq!(
            ValidationError::new("title", "x").under("movies[1]").field,
            "movies[1].title"
        );
        assert_eq!(ValidationError::new("$", "x").under("movies[0]").field, "movies[0]");
        assert_eq!(ValidationError::new("[2]", "x").under("movies").field, "movies[2]");
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("imdbRating", Some(11.0), 0.0..=10.0).is_err());
        assert!(check_range("imdbRating", Some(7.5), 0.0..=10.0).is_ok());
        assert!(check_range::<f64>("imdbRating", None, 0.0..=10.0).is_ok());
    }
}
