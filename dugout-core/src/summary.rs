//! Innings totals derived from a set of games.
//!
//! All three views are computed in one pass over the assignment grids.
//! Totals are joined to the current roster and position lists by name and
//! column index respectively, so edits to either list re-shape the
//! summary without touching the games themselves.

use std::collections::HashMap;

use crate::game::Game;
use crate::names::NameList;

/// A name with its innings total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCount {
    pub name: String,
    pub innings: u32,
}

/// One pivot row: a player's innings split across the position columns.
/// `by_position` is parallel to the position list the summary was built
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub player: String,
    pub by_position: Vec<u32>,
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSummary {
    /// Per current roster member, in roster order. Cells holding names
    /// no longer on the roster are not counted here.
    pub by_player: Vec<NameCount>,
    /// Per position column, in position order. Counts every non-empty
    /// cell, including ones holding departed players.
    pub by_position: Vec<NameCount>,
    /// Roster members first (in roster order), then any names found only
    /// in the grids, sorted by descending total. Ties keep that order.
    pub pivot: Vec<PivotRow>,
}

impl UsageSummary {
    #[must_use]
    pub fn compute(games: &[&Game], players: &NameList, positions: &NameList) -> Self {
        let width = positions.len();

        let mut by_player: Vec<NameCount> = players
            .iter()
            .map(|name| NameCount {
                name: name.to_string(),
                innings: 0,
            })
            .collect();
        let mut by_position: Vec<NameCount> = positions
            .iter()
            .map(|name| NameCount {
                name: name.to_string(),
                innings: 0,
            })
            .collect();
        let mut pivot: Vec<PivotRow> = players
            .iter()
            .map(|name| PivotRow {
                player: name.to_string(),
                by_position: vec![0; width],
                total: 0,
            })
            .collect();
        let mut pivot_index: HashMap<String, usize> = pivot
            .iter()
            .enumerate()
            .map(|(index, row)| (row.player.clone(), index))
            .collect();

        for game in games {
            for row in &game.assignments {
                // Cells beyond the current position width are ignored,
                // not errors; they can exist transiently in imports.
                for (column, cell) in row.iter().take(width).enumerate() {
                    if cell.is_empty() {
                        continue;
                    }
                    if let Some(index) = players.index_of(cell) {
                        by_player[index].innings += 1;
                    }
                    by_position[column].innings += 1;

                    let index = *pivot_index.entry(cell.clone()).or_insert_with(|| {
                        pivot.push(PivotRow {
                            player: cell.clone(),
                            by_position: vec![0; width],
                            total: 0,
                        });
                        pivot.len() - 1
                    });
                    pivot[index].by_position[column] += 1;
                    pivot[index].total += 1;
                }
            }
        }

        pivot.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            by_player,
            by_position,
            pivot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameId;

    fn roster(names: &[&str]) -> NameList {
        NameList::from_names(names.iter().copied())
    }

    fn game(grid: &[&[&str]]) -> Game {
        let width = grid.first().map_or(0, |row| row.len());
        let mut game = Game::new(GameId::from_entropy(0), "2024-05-01", grid.len(), width);
        for (inning, row) in grid.iter().enumerate() {
            for (column, cell) in row.iter().enumerate() {
                game.set_cell(inning, column, (*cell).to_string()).unwrap();
            }
        }
        game
    }

    #[test]
    fn two_player_two_position_example() {
        let players = roster(&["Amy", "Bo"]);
        let positions = roster(&["P", "C"]);
        let g = game(&[&["Amy", "Bo"], &["Bo", ""]]);

        let summary = UsageSummary::compute(&[&g], &players, &positions);

        assert_eq!(
            summary.by_player,
            vec![
                NameCount {
                    name: "Amy".into(),
                    innings: 1
                },
                NameCount {
                    name: "Bo".into(),
                    innings: 2
                },
            ]
        );
        assert_eq!(
            summary.by_position,
            vec![
                NameCount {
                    name: "P".into(),
                    innings: 2
                },
                NameCount {
                    name: "C".into(),
                    innings: 1
                },
            ]
        );
        assert_eq!(
            summary.pivot,
            vec![
                PivotRow {
                    player: "Bo".into(),
                    by_position: vec![1, 1],
                    total: 2
                },
                PivotRow {
                    player: "Amy".into(),
                    by_position: vec![1, 0],
                    total: 1
                },
            ]
        );
    }

    #[test]
    fn departed_names_appear_in_pivot_only() {
        let players = roster(&["Amy"]);
        let positions = roster(&["P"]);
        let g = game(&[&["Zed"], &["Amy"]]);

        let summary = UsageSummary::compute(&[&g], &players, &positions);

        assert_eq!(summary.by_player.len(), 1);
        assert_eq!(summary.by_player[0].innings, 1);
        // Positions count every non-empty cell, departed or not.
        assert_eq!(summary.by_position[0].innings, 2);
        let zed = summary.pivot.iter().find(|row| row.player == "Zed").unwrap();
        assert_eq!(zed.total, 1);
    }

    #[test]
    fn cells_beyond_position_width_are_ignored() {
        let players = roster(&["Amy"]);
        let positions = roster(&["P"]);
        let g = game(&[&["Amy", "Amy", "Amy"]]);

        let summary = UsageSummary::compute(&[&g], &players, &positions);

        assert_eq!(summary.by_player[0].innings, 1);
        assert_eq!(summary.by_position[0].innings, 1);
        assert_eq!(summary.pivot[0].total, 1);
    }

    #[test]
    fn ties_keep_roster_order() {
        let players = roster(&["Amy", "Bo", "Cal"]);
        let positions = roster(&["P"]);
        let g = game(&[&["Bo"], &["Amy"], &["Cal"]]);

        let summary = UsageSummary::compute(&[&g], &players, &positions);

        let order: Vec<&str> = summary.pivot.iter().map(|row| row.player.as_str()).collect();
        assert_eq!(order, vec!["Amy", "Bo", "Cal"]);
    }

    #[test]
    fn no_games_yields_zeroed_roster_rows() {
        let players = roster(&["Amy", "Bo"]);
        let positions = roster(&["P", "C"]);

        let summary = UsageSummary::compute(&[], &players, &positions);

        assert!(summary.by_player.iter().all(|count| count.innings == 0));
        assert!(summary.by_position.iter().all(|count| count.innings == 0));
        assert_eq!(summary.pivot.len(), 2);
        assert!(summary.pivot.iter().all(|row| row.total == 0));
    }

    #[test]
    fn pivot_rows_reconcile_with_player_totals() {
        let players = roster(&["Amy", "Bo"]);
        let positions = roster(&["P", "C", "SS"]);
        let first = game(&[&["Amy", "Bo", "Zed"], &["Bo", "", "Amy"]]);
        let second = game(&[&["Zed", "Amy", "Bo"]]);

        let summary = UsageSummary::compute(&[&first, &second], &players, &positions);

        for row in &summary.pivot {
            assert_eq!(row.total, row.by_position.iter().sum::<u32>());
        }
        // Departed names count in the pivot but not in the roster view.
        let roster_pivot: u32 = summary
            .pivot
            .iter()
            .filter(|row| players.contains(&row.player))
            .map(|row| row.total)
            .sum();
        let by_player: u32 = summary.by_player.iter().map(|count| count.innings).sum();
        assert_eq!(roster_pivot, by_player);
    }

    #[test]
    fn totals_span_multiple_games() {
        let players = roster(&["Amy", "Bo"]);
        let positions = roster(&["P", "C"]);
        let first = game(&[&["Amy", "Bo"]]);
        let second = game(&[&["Bo", "Amy"], &["Bo", ""]]);

        let summary = UsageSummary::compute(&[&first, &second], &players, &positions);

        assert_eq!(summary.by_player[0].innings, 2);
        assert_eq!(summary.by_player[1].innings, 3);
        assert_eq!(summary.by_position[0].innings, 3);
        assert_eq!(summary.by_position[1].innings, 2);
    }
}
