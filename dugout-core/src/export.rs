//! Interchange documents: the JSON backup format and the summary CSV.
//!
//! The JSON document carries the durable four fields only (team name,
//! roster, positions, games); the active selection and date filter are
//! session-local and stay out of backups.

use std::string::FromUtf8Error;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::game::Game;
use crate::names::NameList;
use crate::state::TrackerState;
use crate::summary::PivotRow;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document root must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("summary is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// The backup document, serialized with the same camelCase keys the
/// tracker state uses so a backup can also be read as a state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDoc {
    pub team_name: String,
    pub players: NameList,
    pub positions: NameList,
    pub games: Vec<Game>,
}

impl ExportDoc {
    #[must_use]
    pub fn from_state(state: &TrackerState) -> Self {
        Self {
            team_name: state.team_name().to_string(),
            players: state.players().clone(),
            positions: state.positions().clone(),
            games: state.games().to_vec(),
        }
    }

    /// # Errors
    /// Serialization itself does not fail for these types; the `Result`
    /// keeps the export surfaces uniform.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A tolerantly-parsed backup. Each field is read independently; one
/// that is missing or has the wrong shape comes back as `None` and the
/// rest still import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedDoc {
    pub team_name: Option<String>,
    pub players: Option<Vec<String>>,
    pub positions: Option<Vec<String>>,
    pub games: Option<Vec<Game>>,
}

impl ImportedDoc {
    /// # Errors
    /// Only malformed JSON and a non-object root are errors; anything
    /// else degrades to absent fields.
    pub fn parse(json: &str) -> Result<Self, ImportError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(ImportError::NotAnObject);
        };
        Ok(Self {
            team_name: field(&map, "teamName"),
            players: field(&map, "players"),
            positions: field(&map, "positions"),
            games: field(&map, "games"),
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.team_name.is_none()
            && self.players.is_none()
            && self.positions.is_none()
            && self.games.is_none()
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    map.get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
}

/// Render the pivot as CSV: a `Player` column, one column per position
/// label, then `Total`. Labels and names containing commas or quotes are
/// quoted, so spreadsheet round-trips are safe.
///
/// # Errors
/// Formatting and buffer errors surface as [`ExportError`].
pub fn pivot_csv(positions: &NameList, rows: &[PivotRow]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        let mut header: Vec<&str> = Vec::with_capacity(positions.len() + 2);
        header.push("Player");
        header.extend(positions.iter());
        header.push("Total");
        writer.write_record(&header)?;
        for row in rows {
            let mut record: Vec<String> = Vec::with_capacity(positions.len() + 2);
            record.push(row.player.clone());
            record.extend(row.by_position.iter().map(|n| n.to_string()));
            record.push(row.total.to_string());
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}
