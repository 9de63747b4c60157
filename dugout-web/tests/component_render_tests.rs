use dugout_core::{Game, GameId, NameCount, PivotRow};
use dugout_web::components::assignment_grid::AssignmentGrid;
use dugout_web::components::card::Card;
use dugout_web::components::filter_bar::FilterBar;
use dugout_web::components::footer::Footer;
use dugout_web::components::games_table::GamesTable;
use dugout_web::components::header::Header;
use dugout_web::components::pivot_table::PivotTable;
use dugout_web::components::positions_panel::PositionsPanel;
use dugout_web::components::roster_panel::RosterPanel;
use dugout_web::components::summary_tables::{PlayerTotals, PositionTotals};
use futures::executor::block_on;
use yew::{html, AttrValue, Callback, Children, LocalServerRenderer};

fn sample_game(date: &str) -> Game {
    let mut game = Game::new(GameId::from_entropy(7), date, 2, 2);
    game.assignments[0][0] = "Amy".to_string();
    game.assignments[1][1] = "Bo".to_string();
    game
}

#[test]
fn card_renders_title_subtitle_and_children() {
    let props = dugout_web::components::card::Props {
        title: AttrValue::from("Roster"),
        subtitle: Some(AttrValue::from("Click a name to rename.")),
        children: Children::new(vec![html! { <p>{ "body copy" }</p> }]),
    };
    let html = block_on(LocalServerRenderer::<Card>::with_props(props).render());
    assert!(html.contains("card__title"));
    assert!(html.contains("Roster"));
    assert!(html.contains("Click a name to rename."));
    assert!(html.contains("body copy"));
}

#[test]
fn card_skips_subtitle_when_absent() {
    let props = dugout_web::components::card::Props {
        title: AttrValue::from("Games"),
        subtitle: None,
        children: Children::default(),
    };
    let html = block_on(LocalServerRenderer::<Card>::with_props(props).render());
    assert!(!html.contains("card__subtitle"));
}

#[test]
fn header_renders_team_name_and_actions() {
    let props = dugout_web::components::header::Props {
        team_name: AttrValue::from("Riverside Otters"),
        on_team_name: Callback::noop(),
        on_new_game: Callback::noop(),
        on_export_csv: Callback::noop(),
        on_export_json: Callback::noop(),
        on_import_file: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Dugout"));
    assert!(html.contains("team-name-input"));
    assert!(html.contains("Riverside Otters"));
    assert!(html.contains("new-game-btn"));
    assert!(html.contains("Export CSV"));
    assert!(html.contains("Export JSON"));
    assert!(html.contains("Import JSON"));
}

#[test]
fn roster_panel_lists_players_and_add_button() {
    let props = dugout_web::components::roster_panel::Props {
        players: vec!["Amy".to_string(), "Bo".to_string()],
        on_add: Callback::noop(),
        on_rename: Callback::noop(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RosterPanel>::with_props(props).render());
    assert!(html.contains("Amy"));
    assert!(html.contains("Bo"));
    assert!(html.contains("add-player-btn"));
    assert!(html.contains("+ Add player"));
}

#[test]
fn positions_panel_lists_labels() {
    let props = dugout_web::components::positions_panel::Props {
        positions: vec!["P".to_string(), "C".to_string(), "RF2".to_string()],
        on_add: Callback::noop(),
        on_rename: Callback::noop(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PositionsPanel>::with_props(props).render());
    assert!(html.contains("RF2"));
    assert!(html.contains("add-position-btn"));
}

#[test]
fn games_table_shows_empty_state() {
    let props = dugout_web::components::games_table::Props {
        games: vec![],
        active: None,
        on_select: Callback::noop(),
        on_duplicate: Callback::noop(),
        on_delete: Callback::noop(),
        on_date: Callback::noop(),
        on_innings: Callback::noop(),
        on_notes: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamesTable>::with_props(props).render());
    assert!(html.contains("No games yet. Create one to get started."));
    assert!(!html.contains("games-table__row"));
}

#[test]
fn games_table_lists_games_and_marks_active() {
    let first = sample_game("2024-05-01");
    let second = sample_game("2024-05-08");
    let active = first.id.clone();
    let props = dugout_web::components::games_table::Props {
        games: vec![first, second],
        active: Some(active),
        on_select: Callback::noop(),
        on_duplicate: Callback::noop(),
        on_delete: Callback::noop(),
        on_date: Callback::noop(),
        on_innings: Callback::noop(),
        on_notes: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamesTable>::with_props(props).render());
    assert!(html.contains("2024-05-01"));
    assert!(html.contains("2024-05-08"));
    assert!(html.contains("games-table__row--active"));
    assert!(html.contains("Optional notes"));
    assert!(html.contains("Delete"));
}

#[test]
fn assignment_grid_renders_positions_and_player_options() {
    let props = dugout_web::components::assignment_grid::Props {
        game: sample_game("2024-05-01"),
        players: vec!["Amy".to_string(), "Bo".to_string()],
        positions: vec!["P".to_string(), "C".to_string()],
        on_assign: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AssignmentGrid>::with_props(props).render());
    assert!(html.contains("Edit Assignments: 2024-05-01"));
    assert!(html.contains("Inning"));
    assert!(html.contains("Amy"));
    assert!(html.contains("Bo"));
    // One select per cell: 2 innings x 2 positions.
    assert_eq!(html.matches("<select").count(), 4);
}

#[test]
fn filter_bar_shows_bounds_and_clear() {
    let props = dugout_web::components::filter_bar::Props {
        from: AttrValue::from("2024-05-01"),
        to: AttrValue::from(""),
        on_from: Callback::noop(),
        on_to: Callback::noop(),
        on_clear: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
    assert!(html.contains("2024-05-01"));
    assert!(html.contains("From"));
    assert!(html.contains("To"));
    assert!(html.contains("clear-filter-btn"));
}

#[test]
fn player_totals_sorts_rows_by_descending_innings() {
    let props = dugout_web::components::summary_tables::PlayerTotalsProps {
        rows: vec![
            NameCount {
                name: "Amy".to_string(),
                innings: 1,
            },
            NameCount {
                name: "Bo".to_string(),
                innings: 3,
            },
        ],
    };
    let html = block_on(LocalServerRenderer::<PlayerTotals>::with_props(props).render());
    let bo = html.find("Bo").unwrap();
    let amy = html.find("Amy").unwrap();
    assert!(bo < amy, "higher totals should render first");
    assert!(html.contains("Total Innings by Player (filtered)"));
}

#[test]
fn position_totals_renders_counts_under_labels() {
    let props = dugout_web::components::summary_tables::PositionTotalsProps {
        counts: vec![
            NameCount {
                name: "P".to_string(),
                innings: 2,
            },
            NameCount {
                name: "C".to_string(),
                innings: 1,
            },
        ],
    };
    let html = block_on(LocalServerRenderer::<PositionTotals>::with_props(props).render());
    assert!(html.contains("Total Innings by Position (filtered)"));
    assert!(html.contains("P"));
    assert!(html.contains("C"));
}

#[test]
fn pivot_table_renders_departed_players_too() {
    let props = dugout_web::components::pivot_table::Props {
        positions: vec!["P".to_string(), "C".to_string()],
        rows: vec![
            PivotRow {
                player: "Bo".to_string(),
                by_position: vec![1, 1],
                total: 2,
            },
            PivotRow {
                player: "Zoe".to_string(),
                by_position: vec![1, 0],
                total: 1,
            },
        ],
    };
    let html = block_on(LocalServerRenderer::<PivotTable>::with_props(props).render());
    assert!(html.contains("Pivot: Player by Position (filtered)"));
    assert!(html.contains("Bo"));
    assert!(html.contains("Zoe"));
}

#[test]
fn footer_renders_local_data_note() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("tracker-footer"));
    assert!(html.contains("Data stays in this browser."));
}
