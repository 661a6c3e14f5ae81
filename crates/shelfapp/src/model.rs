//! # Domain Model: Books and Their Input Shape
//!
//! This module defines the two shapes that cross the library boundary:
//! [`Book`], the persisted catalog record, and [`BookInput`], what a caller
//! hands to `add`.
//!
//! ## The Stored Record
//!
//! ```text
//! { "id": 7, "name": "The First Man", "author": "Albert Camus", "date": 1994, "category": "Novel" }
//! ```
//!
//! The field order above is the serialization order. Reading is lenient per field:
//! unknown fields are dropped, and missing, `null` or oddly typed values fall back
//! to defaults (`date` goes through [`coerce_year`]). One odd record never makes the
//! whole catalog unreadable. Writing always emits exactly these five fields.
//!
//! ## Input Coercion
//!
//! Front ends forward whatever the user typed. Nothing here rejects input:
//!
//! - **date**: integers pass through, floats truncate, numeric strings parse
//!   (surrounding whitespace allowed), booleans become 1/0, anything else is `0`.
//! - **category**: absent, null or empty becomes [`DEFAULT_CATEGORY`].
//! - **name / author**: absent or null becomes an empty string.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Category assigned when the caller leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Novel";

/// Sentinel category that disables filtering in `list`.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub date: i64,
    #[serde(default = "default_category", deserialize_with = "lenient_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Non-negative integers (or integral strings) are kept; anything else reads as 0.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

fn lenient_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(coerce_year(&Value::deserialize(deserializer)?))
}

fn lenient_category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(default_category()),
    }
}

impl Book {
    /// Builds a record from caller input, applying the coercion rules.
    /// The id is supplied by the store.
    pub fn from_input(id: u64, input: BookInput) -> Self {
        let category = match input.category {
            Some(c) if !c.is_empty() => c,
            _ => default_category(),
        };
        Self {
            id,
            name: input.name.unwrap_or_default(),
            author: input.author.unwrap_or_default(),
            date: input.date.as_ref().map(coerce_year).unwrap_or(0),
            category,
        }
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Case-insensitive substring match on the title. An empty term matches.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Caller-supplied fields for a new book.
///
/// `date` is kept as a raw JSON value so front ends can pass numbers or
/// strings through untouched; [`coerce_year`] decides what it means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
}

impl BookInput {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            author: Some(author.into()),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<Value>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Coerces an arbitrary JSON value into a year. Unusable values become `0`.
pub fn coerce_year(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}
