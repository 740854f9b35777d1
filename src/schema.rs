//! Dataset metadata declaration.
//!
//! Everything in here is declarative: the feature schema, the
//! human-readable description and the builder configuration are fixed
//! data consumed by whatever harness persists the generated records.
use serde::Serialize;

use crate::lang::LANGUAGES;

pub const CITATION: &str = "";

pub const HOMEPAGE: &str = "https://docs.opendata.aws/amazon-reviews-ml/readme.html";

pub const DESCRIPTION: &str = "\
Amazon Customer Reviews (a.k.a. Product Reviews) is one of Amazons iconic products. \
In a period of over two decades since the first review in 1995, millions of Amazon \
customers have contributed over a hundred million reviews to express opinions and \
describe their experiences regarding products on the Amazon.com website. \
The multilingual release ships one JSON-lines file per language and split; reviews \
for the same product in different countries can be grouped by the same product_id.";

/// Primitive feature types understood by the consuming harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    String,
    Int32,
}

/// Declared output schema, in field order.
///
/// `star_rating` is extracted from the source key `stars`, every other
/// field reads from the identically-named source key.
// TODO: extend with the remaining review columns (marketplace, votes,
// review_headline, review_date...) if extraction ever widens.
pub const FEATURES: [(&str, FeatureType); 5] = [
    ("review_id", FeatureType::String),
    ("product_id", FeatureType::String),
    ("reviewer_id", FeatureType::String),
    ("star_rating", FeatureType::Int32),
    ("review_body", FeatureType::String),
];

/// Static dataset metadata handed to the consuming harness.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub description: &'static str,
    pub citation: &'static str,
    pub homepage: &'static str,
    pub features: Vec<(&'static str, FeatureType)>,
}

/// Builder configuration. Plain data, no behavior.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsConfig {
    pub name: String,
    pub description: String,
    pub version: String,
    pub data: Option<String>,
}

pub fn info() -> DatasetInfo {
    DatasetInfo {
        description: DESCRIPTION,
        citation: CITATION,
        homepage: HOMEPAGE,
        features: FEATURES.to_vec(),
    }
}

pub fn config() -> ReviewsConfig {
    ReviewsConfig {
        name: "reviews".to_string(),
        description: format!(
            "A dataset consisting of multilingual reviews of Amazon products. \
             Generate a split for each language in {}",
            LANGUAGES.join(", ")
        ),
        version: "0.1.0".to_string(),
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_order() {
        let names: Vec<_> = FEATURES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "review_id",
                "product_id",
                "reviewer_id",
                "star_rating",
                "review_body"
            ]
        );
    }

    #[test]
    fn feature_types() {
        for (name, kind) in FEATURES {
            let expected = if name == "star_rating" {
                FeatureType::Int32
            } else {
                FeatureType::String
            };
            assert_eq!(kind, expected);
        }
    }

    #[test]
    fn info_serializes() {
        let info = info();
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#"["star_rating","int32"]"#));
    }

    #[test]
    fn config_mentions_languages() {
        let config = config();
        assert_eq!(config.name, "reviews");
        assert!(config.description.contains("de, fr, es, en"));
    }
}
