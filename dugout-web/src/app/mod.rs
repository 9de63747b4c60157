//! Top-level application component.
//!
//! One `UseStateHandle<TrackerState>` holds everything; handlers swap in
//! a new state value and an effect writes each value through to
//! `localStorage`. Rendering is a pure function of the state, so the
//! same component serves both the browser and server-side render tests.

pub mod handlers;

use dugout_core::TrackerState;
use yew::prelude::*;

use crate::components::assignment_grid::AssignmentGrid;
use crate::components::filter_bar::FilterBar;
use crate::components::footer::Footer;
use crate::components::games_table::GamesTable;
use crate::components::header::Header;
use crate::components::pivot_table::PivotTable;
use crate::components::positions_panel::PositionsPanel;
use crate::components::roster_panel::RosterPanel;
use crate::components::summary_tables::{PlayerTotals, PositionTotals};

#[cfg(target_arch = "wasm32")]
fn initial_state() -> TrackerState {
    dugout_core::load_or_default(&crate::storage::LocalStorageStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_state() -> TrackerState {
    TrackerState::default()
}

#[cfg(target_arch = "wasm32")]
fn persist(state: &TrackerState) {
    use dugout_core::StateStore;
    if let Err(err) = crate::storage::LocalStorageStore.save_state(state) {
        log::warn!("failed to persist tracker state: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_state: &TrackerState) {}

#[function_component(App)]
pub fn app() -> Html {
    let tracker = use_state(initial_state);

    {
        let snapshot = (*tracker).clone();
        use_effect_with(snapshot, |state| {
            persist(state);
            || {}
        });
    }

    let summary = tracker.summary();
    let players: Vec<String> = tracker.players().iter().map(ToString::to_string).collect();
    let positions: Vec<String> = tracker
        .positions()
        .iter()
        .map(ToString::to_string)
        .collect();
    let active_game = tracker.active_game().cloned();

    html! {
        <div class="tracker">
            <Header
                team_name={tracker.team_name().to_string()}
                on_team_name={handlers::build_set_team_name(&tracker)}
                on_new_game={handlers::build_new_game(&tracker)}
                on_export_csv={handlers::build_export_csv(&tracker)}
                on_export_json={handlers::build_export_json(&tracker)}
                on_import_file={handlers::build_import(&tracker)}
            />
            <main class="tracker__main">
                <section class="tracker__lists">
                    <RosterPanel
                        players={players.clone()}
                        on_add={handlers::build_add_player(&tracker)}
                        on_rename={handlers::build_rename_player(&tracker)}
                        on_remove={handlers::build_remove_player(&tracker)}
                    />
                    <PositionsPanel
                        positions={positions.clone()}
                        on_add={handlers::build_add_position(&tracker)}
                        on_rename={handlers::build_rename_position(&tracker)}
                        on_remove={handlers::build_remove_position(&tracker)}
                    />
                </section>
                <GamesTable
                    games={tracker.games().to_vec()}
                    active={tracker.active_game_id().cloned()}
                    on_select={handlers::build_select_game(&tracker)}
                    on_duplicate={handlers::build_duplicate_game(&tracker)}
                    on_delete={handlers::build_delete_game(&tracker)}
                    on_date={handlers::build_set_game_date(&tracker)}
                    on_innings={handlers::build_resize_innings(&tracker)}
                    on_notes={handlers::build_set_game_notes(&tracker)}
                />
                <section class="tracker__filters">
                    <FilterBar
                        from={tracker.filter().from.clone()}
                        to={tracker.filter().to.clone()}
                        on_from={handlers::build_filter_from(&tracker)}
                        on_to={handlers::build_filter_to(&tracker)}
                        on_clear={handlers::build_clear_filter(&tracker)}
                    />
                    <p class="tracker__tip">
                        { "Tip: Filter by tournament vs league play, or first half vs second half." }
                    </p>
                </section>
                { active_game.map(|game| html! {
                    <AssignmentGrid
                        game={game}
                        players={players.clone()}
                        positions={positions.clone()}
                        on_assign={handlers::build_set_assignment(&tracker)}
                    />
                }).unwrap_or_default() }
                <section class="tracker__summaries">
                    <PlayerTotals rows={summary.by_player.clone()} />
                    <PositionTotals counts={summary.by_position.clone()} />
                </section>
                <PivotTable positions={positions} rows={summary.pivot} />
            </main>
            <Footer />
        </div>
    }
}
