//! Review record types.
//!
//! [RawReview] mirrors one source JSON line; [ReviewRecord] is the
//! normalized output unit matching [crate::schema::FEATURES].
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Source-side shape of one review line.
///
/// Every field is required: a line missing any of them fails
/// deserialization. `stars` is kept as a raw [Value] because the source
/// encodes it either as a JSON string or as a number.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    pub review_id: String,
    pub product_id: String,
    pub reviewer_id: String,
    pub stars: Value,
    pub review_body: String,
}

/// Normalized review, five fields, all present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    review_id: String,
    product_id: String,
    reviewer_id: String,
    star_rating: i32,
    review_body: String,
}

impl ReviewRecord {
    /// Parse a single JSON line into a record.
    ///
    /// Fails on malformed JSON, on any missing field and on a
    /// non-numeric `stars` value. No range check is applied to the
    /// rating.
    pub fn from_json_line(line: &str) -> Result<Self, Error> {
        let raw: RawReview = serde_json::from_str(line)?;
        Self::try_from(raw)
    }

    pub fn review_id(&self) -> &str {
        &self.review_id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn reviewer_id(&self) -> &str {
        &self.reviewer_id
    }

    pub fn star_rating(&self) -> i32 {
        self.star_rating
    }

    pub fn review_body(&self) -> &str {
        &self.review_body
    }
}

impl TryFrom<RawReview> for ReviewRecord {
    type Error = Error;

    fn try_from(raw: RawReview) -> Result<Self, Error> {
        Ok(ReviewRecord {
            star_rating: cast_stars(&raw.stars)?,
            review_id: raw.review_id,
            product_id: raw.product_id,
            reviewer_id: raw.reviewer_id,
            review_body: raw.review_body,
        })
    }
}

/// Cast a raw `stars` value to an integer rating.
///
/// Strings are trimmed and parsed as integers, numbers truncate toward
/// zero. Anything else is a conversion error.
fn cast_stars(stars: &Value) -> Result<i32, Error> {
    match stars {
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::Rating(format!("invalid star rating: {:?}", s))),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_err(|_| Error::Rating(format!("star rating overflow: {}", i)))
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i32)
            } else {
                Err(Error::Rating(format!("invalid star rating: {}", n)))
            }
        }
        other => Err(Error::Rating(format!("invalid star rating: {}", other))),
    }
}
