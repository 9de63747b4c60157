//! The tracker's single state container.
//!
//! All mutation goes through the operation methods here; fields are
//! private so callers cannot put the container into a shape the
//! operations would not produce. Whenever an operation touches the
//! roster, the position list, or a grid, the grids are re-checked
//! against the position width in debug builds.

use serde::{Deserialize, Serialize};

use crate::export::ImportedDoc;
use crate::filter::DateFilter;
use crate::game::{Game, GameError, GameId};
use crate::names::{NameError, NameList};
use crate::summary::UsageSummary;

pub const DEFAULT_INNINGS: usize = 7;

fn default_team_name() -> String {
    "Dugout — Defensive Innings".to_string()
}

fn sample_roster() -> NameList {
    NameList::from_names([
        "Avery", "Blake", "Casey", "Drew", "Ellis", "Frankie", "Hayden", "Jules", "Kai", "Lennon",
        "Marlow", "Reese",
    ])
}

fn default_positions() -> NameList {
    NameList::from_names(["P", "C", "1B", "2B", "3B", "SS", "LF", "CF", "RF"])
}

/// Everything the tracker persists: team name, roster, positions, games,
/// the active-game selection, and the date filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    #[serde(default = "default_team_name")]
    team_name: String,
    #[serde(default = "sample_roster")]
    players: NameList,
    #[serde(default = "default_positions")]
    positions: NameList,
    #[serde(default)]
    games: Vec<Game>,
    #[serde(default)]
    active_game_id: Option<GameId>,
    #[serde(flatten)]
    filter: DateFilter,
}

impl Default for TrackerState {
    /// Starter state for a first launch: sample roster, the nine standard
    /// fielding positions, no games.
    fn default() -> Self {
        Self {
            team_name: default_team_name(),
            players: sample_roster(),
            positions: default_positions(),
            games: Vec::new(),
            active_game_id: None,
            filter: DateFilter::default(),
        }
    }
}

impl TrackerState {
    /// A state with nothing in it. [`Default`] is the first-launch
    /// starter; this is the blank slate.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            team_name: default_team_name(),
            players: NameList::new(),
            positions: NameList::new(),
            games: Vec::new(),
            active_game_id: None,
            filter: DateFilter::default(),
        }
    }

    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    #[must_use]
    pub fn players(&self) -> &NameList {
        &self.players
    }

    #[must_use]
    pub fn positions(&self) -> &NameList {
        &self.positions
    }

    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    #[must_use]
    pub fn game(&self, id: &GameId) -> Option<&Game> {
        self.games.iter().find(|game| &game.id == id)
    }

    #[must_use]
    pub fn active_game_id(&self) -> Option<&GameId> {
        self.active_game_id.as_ref()
    }

    /// The selected game, if the selection still points at one. A stale
    /// id (for instance from an imported document) simply yields `None`.
    #[must_use]
    pub fn active_game(&self) -> Option<&Game> {
        self.active_game_id.as_ref().and_then(|id| self.game(id))
    }

    #[must_use]
    pub fn filter(&self) -> &DateFilter {
        &self.filter
    }

    /// Games admitted by the date filter, in stored order.
    #[must_use]
    pub fn filtered_games(&self) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| self.filter.admits(&game.date))
            .collect()
    }

    /// Innings totals over the filtered games, keyed by the current
    /// roster and position lists.
    #[must_use]
    pub fn summary(&self) -> UsageSummary {
        UsageSummary::compute(&self.filtered_games(), &self.players, &self.positions)
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.team_name = name.into();
    }

    // ----- roster -----

    /// # Errors
    /// Rejects blank and duplicate names; see [`NameError`].
    pub fn add_player(&mut self, name: &str) -> Result<(), NameError> {
        self.players.add(name)
    }

    /// Rename a roster member and rewrite every grid cell holding the old
    /// name. History follows the player: totals keyed by the new name
    /// include all innings recorded under the old one.
    ///
    /// # Errors
    /// Rejects blank, unchanged, colliding, and unknown names, in that
    /// order, before anything is touched.
    pub fn rename_player(&mut self, old: &str, new: &str) -> Result<(), NameError> {
        self.players.rename(old, new)?;
        for game in &mut self.games {
            game.rename_player(old, new);
        }
        self.assert_grid_alignment();
        Ok(())
    }

    /// Drop a player from the roster and blank their cells in every
    /// grid. The innings slots themselves remain, unassigned.
    ///
    /// # Errors
    /// Returns [`NameError::Unknown`] when the name is not on the roster.
    pub fn remove_player(&mut self, name: &str) -> Result<(), NameError> {
        self.players.remove(name)?;
        for game in &mut self.games {
            game.blank_player(name);
        }
        Ok(())
    }

    // ----- positions -----

    /// Add a position; every existing grid grows an empty trailing
    /// column for it.
    ///
    /// # Errors
    /// Rejects blank and duplicate labels.
    pub fn add_position(&mut self, label: &str) -> Result<(), NameError> {
        self.positions.add(label)?;
        for game in &mut self.games {
            game.push_empty_column();
        }
        self.assert_grid_alignment();
        Ok(())
    }

    /// Relabel a position. Grids are untouched: cells are joined to
    /// positions by column index, not by label.
    ///
    /// # Errors
    /// Rejects blank, unchanged, colliding, and unknown labels.
    pub fn rename_position(&mut self, old: &str, new: &str) -> Result<(), NameError> {
        self.positions.rename(old, new)
    }

    /// Drop a position and delete its column from every grid. The
    /// column's assignments are gone for good.
    ///
    /// # Errors
    /// Returns [`NameError::Unknown`] when the label is not in the list.
    pub fn remove_position(&mut self, label: &str) -> Result<(), NameError> {
        let index = self.positions.remove(label)?;
        for game in &mut self.games {
            game.remove_column(index);
        }
        self.assert_grid_alignment();
        Ok(())
    }

    // ----- games -----

    /// Append a new game with an empty grid and make it the active
    /// selection. `entropy` feeds id derivation; pass anything
    /// reasonably unpredictable.
    pub fn create_game(&mut self, date: impl Into<String>, innings: usize, entropy: u64) -> GameId {
        let id = GameId::from_entropy(entropy);
        self.games
            .push(Game::new(id.clone(), date, innings, self.positions.len()));
        self.active_game_id = Some(id.clone());
        self.assert_grid_alignment();
        id
    }

    /// Deep-copy a game under a fresh id, keeping its date, and make the
    /// copy active.
    ///
    /// # Errors
    /// Returns [`GameError::UnknownGame`] when `id` matches nothing.
    pub fn duplicate_game(&mut self, id: &GameId, entropy: u64) -> Result<GameId, GameError> {
        let source = self
            .game(id)
            .ok_or_else(|| GameError::UnknownGame(id.clone()))?;
        let copy = source.duplicate_with_id(GameId::from_entropy(entropy));
        let copy_id = copy.id.clone();
        self.games.push(copy);
        self.active_game_id = Some(copy_id.clone());
        Ok(copy_id)
    }

    /// Delete a game. If it was the active selection, the selection is
    /// cleared.
    ///
    /// # Errors
    /// Returns [`GameError::UnknownGame`] when `id` matches nothing.
    pub fn delete_game(&mut self, id: &GameId) -> Result<(), GameError> {
        let before = self.games.len();
        self.games.retain(|game| &game.id != id);
        if self.games.len() == before {
            return Err(GameError::UnknownGame(id.clone()));
        }
        if self.active_game_id.as_ref() == Some(id) {
            self.active_game_id = None;
        }
        Ok(())
    }

    /// Select a game for editing, or clear the selection with `None`.
    /// The id is not validated; a stale selection is treated as empty by
    /// [`Self::active_game`].
    pub fn set_active_game(&mut self, id: Option<GameId>) {
        self.active_game_id = id;
    }

    /// # Errors
    /// Returns [`GameError::UnknownGame`] when `id` matches nothing.
    pub fn set_game_date(&mut self, id: &GameId, date: impl Into<String>) -> Result<(), GameError> {
        self.game_mut(id)?.date = date.into();
        Ok(())
    }

    /// # Errors
    /// Returns [`GameError::UnknownGame`] when `id` matches nothing.
    pub fn set_game_notes(
        &mut self,
        id: &GameId,
        notes: impl Into<String>,
    ) -> Result<(), GameError> {
        self.game_mut(id)?.notes = notes.into();
        Ok(())
    }

    /// Change a game's innings count. Extra innings get empty rows;
    /// removed innings lose their assignments.
    ///
    /// # Errors
    /// Returns [`GameError::UnknownGame`] when `id` matches nothing.
    pub fn resize_innings(&mut self, id: &GameId, innings: usize) -> Result<(), GameError> {
        let width = self.positions.len();
        self.game_mut(id)?.resize_innings(innings, width);
        self.assert_grid_alignment();
        Ok(())
    }

    /// Write one grid cell. An empty `player` clears the slot; the value
    /// is not checked against the roster, so departed names can be
    /// entered back deliberately.
    ///
    /// # Errors
    /// Unknown ids and out-of-grid coordinates are rejected.
    pub fn set_assignment(
        &mut self,
        id: &GameId,
        inning: usize,
        position: usize,
        player: impl Into<String>,
    ) -> Result<(), GameError> {
        self.game_mut(id)?.set_cell(inning, position, player.into())
    }

    // ----- filter -----

    pub fn set_filter_from(&mut self, date: impl Into<String>) {
        self.filter.from = date.into();
    }

    pub fn set_filter_to(&mut self, date: impl Into<String>) {
        self.filter.to = date.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    // ----- import -----

    /// Merge an imported document: each present field replaces its
    /// counterpart wholesale, absent fields keep current values. Name
    /// lists are re-sanitized and every grid is re-shaped to the
    /// resulting position width, so a hand-edited file cannot smuggle in
    /// duplicates or ragged grids.
    pub fn apply_import(&mut self, doc: ImportedDoc) {
        let ImportedDoc {
            team_name,
            players,
            positions,
            games,
        } = doc;
        if let Some(team_name) = team_name {
            self.team_name = team_name;
        }
        if let Some(players) = players {
            self.players = NameList::from_names(players);
        }
        if let Some(positions) = positions {
            self.positions = NameList::from_names(positions);
        }
        if let Some(games) = games {
            self.games = games;
        }
        let width = self.positions.len();
        for game in &mut self.games {
            game.normalize_grid(width);
        }
        if let Some(active) = &self.active_game_id
            && !self.games.iter().any(|game| &game.id == active)
        {
            self.active_game_id = None;
        }
        self.assert_grid_alignment();
    }

    fn game_mut(&mut self, id: &GameId) -> Result<&mut Game, GameError> {
        self.games
            .iter_mut()
            .find(|game| &game.id == id)
            .ok_or_else(|| GameError::UnknownGame(id.clone()))
    }

    #[cfg(debug_assertions)]
    fn assert_grid_alignment(&self) {
        let width = self.positions.len();
        for game in &self.games {
            debug_assert!(
                game.is_aligned(width),
                "game {} grid out of alignment with {width} positions",
                game.id
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_grid_alignment(&self) {}
}
