//! Language and split management.
//!
//! The Multilingual Amazon Reviews release covers a fixed set of
//! languages, each shipped as one source file per split.
use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;

lazy_static! {

    /// Languages available in the Multilingual Amazon Reviews release.
    pub static ref LANG: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("de");
        m.insert("fr");
        m.insert("es");
        m.insert("en");
        m
    };
}

/// Languages in source file order.
pub const LANGUAGES: [&str; 4] = ["de", "fr", "es", "en"];

/// Source splits. `Test` is relabeled on the partition side,
/// see [crate::partition::SplitPartition::name].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Dev,
    Test,
    Train,
}

/// Splits in source file order.
pub const SPLITS: [Split; 3] = [Split::Dev, Split::Test, Split::Train];

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Dev => "dev",
            Split::Test => "test",
            Split::Train => "train",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
