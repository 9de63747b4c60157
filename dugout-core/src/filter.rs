//! Inclusive date-range filter over game dates.
//!
//! Dates are ISO `YYYY-MM-DD` strings, so lexicographic comparison is
//! chronological comparison and no calendar type is needed. An empty
//! bound means "unset" and admits everything on that side.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    #[serde(rename = "filterFrom", default)]
    pub from: String,
    #[serde(rename = "filterTo", default)]
    pub to: String,
}

impl DateFilter {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }

    /// Whether `date` falls inside the (inclusive) range.
    #[must_use]
    pub fn admits(&self, date: &str) -> bool {
        (self.from.is_empty() || date >= self.from.as_str())
            && (self.to.is_empty() || date <= self.to.as_str())
    }

    pub fn clear(&mut self) {
        self.from.clear();
        self.to.clear();
    }
}
