//! The quote entity and its identifier.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization. The quote body serializes
//! under the wire name `quote`, distinct from the internal field name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a quote.
///
/// Wraps an `i64` assigned by the store: strictly positive, starting at 1,
/// monotonically increasing for the lifetime of one store instance and
/// never reused, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub i64);

impl QuoteId {
    /// Creates a QuoteId from a raw integer.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Whether the id is in the range the store ever assigns.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A stored quote.
///
/// `id` and `created_at` are assigned by the store at creation time and
/// immutable thereafter. There is no update operation: a quote is created
/// once, read any number of times, and destroyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Store-assigned identifier.
    pub id: QuoteId,
    /// Who said it. Non-empty.
    pub author: String,
    /// The quotation body. Non-empty; wire field name is `quote`.
    #[serde(rename = "quote")]
    pub text: String,
    /// When the store accepted the quote.
    pub created_at: DateTime<Utc>,
}

/// Draft for a quote that has not been stored yet.
///
/// Carries only the caller-supplied fields; the store stamps `id` and
/// `created_at` when it accepts the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuote {
    /// Who said it.
    pub author: String,
    /// The quotation body; wire field name is `quote`.
    #[serde(rename = "quote")]
    pub text: String,
}

impl NewQuote {
    /// Creates a draft from author and text.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn quote_id_display_and_parse() {
        let id = QuoteId::from_i64(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<QuoteId>().unwrap(), id);
        assert!("not-a-number".parse::<QuoteId>().is_err());
    }

    #[test]
    fn quote_id_validity() {
        assert!(QuoteId::from_i64(1).is_valid());
        assert!(!QuoteId::from_i64(0).is_valid());
        assert!(!QuoteId::from_i64(-7).is_valid());
    }

    #[test]
    fn quote_serializes_text_as_quote_field() {
        let quote = Quote {
            id: QuoteId::from_i64(1),
            author: "Ada Lovelace".to_string(),
            text: "The engine weaves algebraic patterns.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["author"], "Ada Lovelace");
        assert_eq!(json["quote"], "The engine weaves algebraic patterns.");
        assert!(json.get("text").is_none());
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn new_quote_deserializes_from_wire_names() {
        let draft: NewQuote =
            serde_json::from_str(r#"{"author":"Ada","quote":"Hello"}"#).unwrap();
        assert_eq!(draft, NewQuote::new("Ada", "Hello"));
    }
}
