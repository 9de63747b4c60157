//! Ordered, unique name lists shared by the roster and the position set.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a roster or position edit was rejected. Every variant is a no-op:
/// the list, and any assignment grids a cascade would have touched, are
/// left exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name cannot be empty")]
    Blank,
    #[error("\"{0}\" already exists")]
    Duplicate(String),
    #[error("\"{0}\" is not in the list")]
    Unknown(String),
    #[error("new name matches the current one")]
    Unchanged,
}

/// An ordered set of non-blank strings. Insertion order is preserved; for
/// positions that order is semantic, because assignment grids join on the
/// column index rather than the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from untrusted input, silently dropping blank entries
    /// and later duplicates. Used when applying imported documents.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for name in names {
            let _ = list.add(name.into());
        }
        list
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Append `name`. Rejects blank (empty or whitespace-only) names and
    /// exact duplicates; accepted names are stored verbatim, untrimmed.
    pub(crate) fn add(&mut self, name: impl Into<String>) -> Result<(), NameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NameError::Blank);
        }
        if self.contains(&name) {
            return Err(NameError::Duplicate(name));
        }
        self.names.push(name);
        Ok(())
    }

    /// Replace `old` with `new` at the same index.
    pub(crate) fn rename(&mut self, old: &str, new: &str) -> Result<(), NameError> {
        if new.trim().is_empty() {
            return Err(NameError::Blank);
        }
        if new == old {
            return Err(NameError::Unchanged);
        }
        if self.contains(new) {
            return Err(NameError::Duplicate(new.to_string()));
        }
        let index = self
            .index_of(old)
            .ok_or_else(|| NameError::Unknown(old.to_string()))?;
        self.names[index] = new.to_string();
        Ok(())
    }

    /// Remove `name`, returning the index it occupied so callers can drop
    /// the matching grid column.
    pub(crate) fn remove(&mut self, name: &str) -> Result<usize, NameError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| NameError::Unknown(name.to_string()))?;
        self.names.remove(index);
        Ok(index)
    }
}
