//! Game records and their per-inning assignment grids.
//!
//! A grid is row-major: one row per inning, one column per position, each
//! cell holding a player name or the empty string. Column order is owned
//! by the position list; grids only ever see column indexes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ID_LEN: usize = 8;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

static ID_SALT: AtomicU64 = AtomicU64::new(0);

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Errors from game-store operations. Like [`crate::NameError`], every
/// variant means the operation was rejected before any state changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no game with id {0}")]
    UnknownGame(GameId),
    #[error("cell (inning {inning}, position {position}) is outside the assignment grid")]
    CellOutOfRange { inning: usize, position: usize },
}

/// Opaque game identifier: an eight-character base-36 token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Derive a fresh id from caller-supplied entropy. A process-local
    /// counter is mixed in, so repeated calls stay distinct even when the
    /// entropy source is constant.
    #[must_use]
    pub fn from_entropy(entropy: u64) -> Self {
        let salt = ID_SALT.fetch_add(1, Ordering::Relaxed);
        let mut buf = [0u8; 16];
        buf[..8].copy_from_slice(&entropy.to_le_bytes());
        buf[8..].copy_from_slice(&salt.to_le_bytes());
        let mut acc = fnv1a64(&buf);
        let mut token = String::with_capacity(ID_LEN);
        for _ in 0..ID_LEN {
            token.push(char::from(ID_ALPHABET[(acc % 36) as usize]));
            acc /= 36;
        }
        Self(token)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded game: a calendar date, free-form notes, and the
/// innings × positions assignment grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub date: String,
    pub innings: usize,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub assignments: Vec<Vec<String>>,
}

impl Game {
    /// Build a game with an empty grid sized `innings × position_count`.
    /// An innings count below one is coerced to one.
    #[must_use]
    pub fn new(id: GameId, date: impl Into<String>, innings: usize, position_count: usize) -> Self {
        let innings = innings.max(1);
        Self {
            id,
            date: date.into(),
            innings,
            notes: String::new(),
            assignments: vec![vec![String::new(); position_count]; innings],
        }
    }

    /// Deep-copy under a new id. The date is kept as-is; duplicating a
    /// game does not advance it.
    #[must_use]
    pub(crate) fn duplicate_with_id(&self, id: GameId) -> Self {
        Self {
            id,
            date: self.date.clone(),
            innings: self.innings,
            notes: self.notes.clone(),
            assignments: self.assignments.clone(),
        }
    }

    #[must_use]
    pub fn cell(&self, inning: usize, position: usize) -> Option<&str> {
        self.assignments
            .get(inning)
            .and_then(|row| row.get(position))
            .map(String::as_str)
    }

    pub(crate) fn set_cell(
        &mut self,
        inning: usize,
        position: usize,
        player: String,
    ) -> Result<(), GameError> {
        let cell = self
            .assignments
            .get_mut(inning)
            .and_then(|row| row.get_mut(position))
            .ok_or(GameError::CellOutOfRange { inning, position })?;
        *cell = player;
        Ok(())
    }

    /// Grow or shrink the grid to `innings` rows. New rows are empty and
    /// sized to `position_count`; shrinking truncates, so the trailing
    /// innings' assignments are gone for good. Rows that survive a resize
    /// are untouched.
    pub(crate) fn resize_innings(&mut self, innings: usize, position_count: usize) {
        let innings = innings.max(1);
        self.assignments
            .resize_with(innings, || vec![String::new(); position_count]);
        self.innings = innings;
    }

    /// Append an empty cell to every row (a new trailing grid column).
    pub(crate) fn push_empty_column(&mut self) {
        for row in &mut self.assignments {
            row.push(String::new());
        }
    }

    /// Delete the grid column at `index` from every row. Destructive: the
    /// column's assignments are not recoverable.
    pub(crate) fn remove_column(&mut self, index: usize) {
        for row in &mut self.assignments {
            if index < row.len() {
                row.remove(index);
            }
        }
    }

    /// Rewrite every cell equal to `old` to `new`. Matching is by string
    /// equality, so a name transiently shared by two players would be
    /// rewritten for both.
    pub(crate) fn rename_player(&mut self, old: &str, new: &str) {
        for row in &mut self.assignments {
            for cell in row {
                if cell == old {
                    *cell = new.to_string();
                }
            }
        }
    }

    /// Blank every cell equal to `name`. The inning slots stay, empty.
    pub(crate) fn blank_player(&mut self, name: &str) {
        for row in &mut self.assignments {
            for cell in row {
                if cell == name {
                    cell.clear();
                }
            }
        }
    }

    /// Repair the grid shape for documents that arrive from outside: the
    /// innings count wins (minimum one), every surviving row is padded or
    /// truncated to `position_count` cells.
    pub(crate) fn normalize_grid(&mut self, position_count: usize) {
        self.innings = self.innings.max(1);
        self.assignments
            .resize_with(self.innings, || vec![String::new(); position_count]);
        for row in &mut self.assignments {
            row.resize_with(position_count, String::new);
        }
    }

    #[must_use]
    pub fn is_aligned(&self, position_count: usize) -> bool {
        self.assignments.len() == self.innings
            && self.assignments.iter().all(|row| row.len() == position_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(game: &Game) -> &Vec<Vec<String>> {
        &game.assignments
    }

    #[test]
    fn new_game_builds_empty_grid() {
        let game = Game::new(GameId::from_entropy(1), "2024-05-01", 3, 2);
        assert_eq!(game.innings, 3);
        assert_eq!(grid(&game).len(), 3);
        assert!(grid(&game).iter().all(|row| row == &["", ""]));
        assert!(game.is_aligned(2));
    }

    #[test]
    fn zero_innings_coerced_to_one() {
        let game = Game::new(GameId::from_entropy(2), "2024-05-01", 0, 4);
        assert_eq!(game.innings, 1);
        assert_eq!(grid(&game).len(), 1);
    }

    #[test]
    fn resize_preserves_surviving_rows() {
        let mut game = Game::new(GameId::from_entropy(3), "2024-05-01", 2, 2);
        game.set_cell(0, 0, "Amy".into()).unwrap();
        game.set_cell(1, 1, "Bo".into()).unwrap();
        game.resize_innings(4, 2);
        assert_eq!(game.cell(0, 0), Some("Amy"));
        assert_eq!(game.cell(3, 0), Some(""));
        game.resize_innings(1, 2);
        assert_eq!(game.innings, 1);
        assert_eq!(game.cell(0, 0), Some("Amy"));
        assert_eq!(game.cell(1, 1), None);
    }

    #[test]
    fn set_cell_rejects_out_of_grid_indexes() {
        let mut game = Game::new(GameId::from_entropy(4), "2024-05-01", 2, 2);
        assert_eq!(
            game.set_cell(2, 0, "Amy".into()),
            Err(GameError::CellOutOfRange {
                inning: 2,
                position: 0
            })
        );
        assert_eq!(
            game.set_cell(0, 2, "Amy".into()),
            Err(GameError::CellOutOfRange {
                inning: 0,
                position: 2
            })
        );
    }

    #[test]
    fn column_insert_and_delete() {
        let mut game = Game::new(GameId::from_entropy(5), "2024-05-01", 2, 2);
        game.set_cell(0, 0, "Amy".into()).unwrap();
        game.set_cell(0, 1, "Bo".into()).unwrap();
        game.push_empty_column();
        assert!(game.is_aligned(3));
        assert_eq!(game.cell(0, 2), Some(""));
        game.remove_column(0);
        assert!(game.is_aligned(2));
        assert_eq!(game.cell(0, 0), Some("Bo"));
    }

    #[test]
    fn rename_and_blank_rewrite_matching_cells_only() {
        let mut game = Game::new(GameId::from_entropy(6), "2024-05-01", 2, 2);
        game.set_cell(0, 0, "Bo".into()).unwrap();
        game.set_cell(1, 0, "Bo".into()).unwrap();
        game.set_cell(0, 1, "Amy".into()).unwrap();
        game.rename_player("Bo", "Beau");
        assert_eq!(game.cell(0, 0), Some("Beau"));
        assert_eq!(game.cell(1, 0), Some("Beau"));
        assert_eq!(game.cell(0, 1), Some("Amy"));
        game.blank_player("Beau");
        assert_eq!(game.cell(0, 0), Some(""));
        assert_eq!(game.cell(0, 1), Some("Amy"));
    }

    #[test]
    fn normalize_repairs_ragged_imports() {
        let mut game = Game {
            id: GameId::from_entropy(7),
            date: "2024-05-01".into(),
            innings: 0,
            notes: String::new(),
            assignments: vec![vec!["Amy".into()], vec![], vec![String::new(); 5]],
        };
        game.normalize_grid(2);
        assert_eq!(game.innings, 1);
        assert!(game.is_aligned(2));
        assert_eq!(game.cell(0, 0), Some("Amy"));
        assert_eq!(game.cell(0, 1), Some(""));
    }

    #[test]
    fn ids_stay_distinct_for_constant_entropy() {
        let a = GameId::from_entropy(42);
        let b = GameId::from_entropy(42);
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 8);
        assert!(a.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let game = Game::new(GameId::from_entropy(8), "2024-05-01", 1, 1);
        let value = serde_json::to_value(&game).unwrap();
        let object = value.as_object().unwrap();
        for key in ["id", "date", "innings", "notes", "assignments"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
