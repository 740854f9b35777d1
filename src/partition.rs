//! Split partitions.
//!
//! One partition per (language, split) pair, twelve in total. A
//! partition knows its source URL and its externally visible name; the
//! local file path is resolved lazily through the [Downloader] so that a
//! resolution failure stays scoped to the partition it belongs to.
use std::path::PathBuf;

use itertools::iproduct;
use url::Url;

use crate::download::Downloader;
use crate::error::Error;
use crate::lang::{Split, LANG, LANGUAGES, SPLITS};

const DL_URL: &str = "https://amazon-reviews-ml.s3-us-west-2.amazonaws.com/json";

/// Source URL for one (language, split) pair.
pub fn source_url(lang: &str, split: Split) -> Result<Url, Error> {
    Url::parse(&format!(
        "{}/{}/dataset_{}_{}.json",
        DL_URL, split, lang, split
    ))
    .map_err(Error::Url)
}

/// One generation unit.
#[derive(Debug, Clone)]
pub struct SplitPartition {
    lang: &'static str,
    split: Split,
    url: Url,
}

impl SplitPartition {
    pub fn new(lang: &'static str, split: Split) -> Result<Self, Error> {
        Ok(Self {
            lang,
            split,
            url: source_url(lang, split)?,
        })
    }

    pub fn lang(&self) -> &'static str {
        self.lang
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Externally visible partition name.
    ///
    /// The `test` split is relabeled `validate`; `dev` and `train` both
    /// keep the bare language name. Fixed policy, matching the source
    /// release.
    pub fn name(&self) -> String {
        match self.split {
            Split::Test => format!("{}_validate", self.lang),
            _ => self.lang.to_string(),
        }
    }

    /// Resolve the partition's source file to a local path.
    pub fn resolve(&self, dl: &Downloader) -> Result<PathBuf, Error> {
        Ok(dl.resolve(&self.url)?)
    }
}

/// Build the partition set, optionally restricted to one language.
pub fn partitions(lang_filter: Option<&str>) -> Result<Vec<SplitPartition>, Error> {
    if let Some(lang) = lang_filter {
        if !LANG.contains(lang) {
            return Err(Error::UnknownLang(lang.to_string()));
        }
    }

    iproduct!(LANGUAGES, SPLITS)
        .filter(|(lang, _)| lang_filter.map_or(true, |f| f == *lang))
        .map(|(lang, split)| SplitPartition::new(lang, split))
        .collect()
}

/// Source URLs for the whole partition set.
pub fn source_urls() -> Result<Vec<Url>, Error> {
    Ok(partitions(None)?
        .into_iter()
        .map(|p| p.url().clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_relabeled() {
        let p = SplitPartition::new("en", Split::Test).unwrap();
        assert_eq!(p.name(), "en_validate");
    }

    #[test]
    fn train_and_dev_keep_language_name() {
        let train = SplitPartition::new("en", Split::Train).unwrap();
        let dev = SplitPartition::new("en", Split::Dev).unwrap();
        assert_eq!(train.name(), "en");
        assert_eq!(dev.name(), "en");
    }

    #[test]
    fn url_template() {
        let p = SplitPartition::new("fr", Split::Train).unwrap();
        assert_eq!(
            p.url().as_str(),
            "https://amazon-reviews-ml.s3-us-west-2.amazonaws.com/json/train/dataset_fr_train.json"
        );
    }

    #[test]
    fn full_partition_set() {
        let all = partitions(None).unwrap();
        assert_eq!(all.len(), 12);

        let validates = all.iter().filter(|p| p.name().ends_with("_validate"));
        assert_eq!(validates.count(), 4);
    }

    #[test]
    fn language_filter() {
        let only_de = partitions(Some("de")).unwrap();
        assert_eq!(only_de.len(), 3);
        assert!(only_de.iter().all(|p| p.lang() == "de"));
    }

    #[test]
    fn unknown_language_rejected() {
        assert!(matches!(
            partitions(Some("ja")),
            Err(Error::UnknownLang(_))
        ));
    }
}
