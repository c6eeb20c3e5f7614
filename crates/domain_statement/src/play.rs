//! Play catalog
//!
//! Plays are looked up by identifier while a statement is built. The catalog
//! deserializes from a JSON object keyed by play id:
//!
//! ```json
//! { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::StatementError;

/// Key identifying a play in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Play classification driving pricing and credit rules
///
/// Genres without a pricing rule are kept as [`Genre::Unsupported`] so the
/// catalog still loads; pricing such a play fails with
/// [`StatementError::UnknownGenre`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Tragedy,
    Comedy,
    Unsupported(String),
}

impl Genre {
    pub fn as_str(&self) -> &str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::Unsupported(other) => other.as_str(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Genre::Unsupported(_))
    }
}

impl From<String> for Genre {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            _ => Genre::Unsupported(value),
        }
    }
}

impl From<&str> for Genre {
    fn from(value: &str) -> Self {
        Genre::from(value.to_string())
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        match genre {
            Genre::Unsupported(other) => other,
            supported => supported.as_str().to_string(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Play metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name
    pub name: String,
    /// Genre, serialized as `type`
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<Genre>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }
}

/// Plays keyed by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play, replacing any previous entry with the same id
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.insert(id, play);
        self
    }

    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> Option<Play> {
        self.plays.insert(id.into(), play)
    }

    /// Resolves a play by id
    ///
    /// # Errors
    ///
    /// Returns `StatementError::MissingPlay` if the id is not in the catalog
    pub fn get(&self, id: &PlayId) -> Result<&Play, StatementError> {
        self.plays
            .get(id)
            .ok_or_else(|| StatementError::missing_play(id))
    }

    pub fn contains(&self, id: &PlayId) -> bool {
        self.plays.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<T: IntoIterator<Item = (PlayId, Play)>>(iter: T) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
