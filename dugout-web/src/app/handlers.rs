//! Callback builders translating UI events into tracker operations.
//!
//! Every builder clones the current state, applies one operation, and
//! publishes the result through the handle. A rejected operation leaves
//! the handle untouched and surfaces its reason in an alert, except for
//! no-op renames, which are dropped silently.

use dugout_core::{DEFAULT_INNINGS, ExportDoc, GameId, ImportedDoc, TrackerState, pivot_csv};
use yew::prelude::*;

use crate::dom;
use crate::files;

type Tracker = UseStateHandle<TrackerState>;

fn commit(state: &Tracker, op: impl FnOnce(&mut TrackerState)) {
    let mut next = (**state).clone();
    op(&mut next);
    state.set(next);
}

fn try_commit<E: std::fmt::Display>(
    state: &Tracker,
    op: impl FnOnce(&mut TrackerState) -> Result<(), E>,
) {
    let mut next = (**state).clone();
    match op(&mut next) {
        Ok(()) => state.set(next),
        Err(err) => dom::alert(&err.to_string()),
    }
}

pub fn build_set_team_name(state: &Tracker) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |name: String| commit(&state, |s| s.set_team_name(name)))
}

// ----- roster -----

pub fn build_add_player(state: &Tracker) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(name) = dom::prompt("Player name?", "") else {
            return;
        };
        if name.is_empty() {
            return;
        }
        try_commit(&state, |s| s.add_player(&name));
    })
}

pub fn build_rename_player(state: &Tracker) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |old: String| {
        let Some(new) = dom::prompt("Rename player to:", &old) else {
            return;
        };
        if new.is_empty() || new == old {
            return;
        }
        try_commit(&state, |s| s.rename_player(&old, &new));
    })
}

pub fn build_remove_player(state: &Tracker) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |name: String| {
        if !dom::confirm(&format!("Remove {name}?")) {
            return;
        }
        try_commit(&state, |s| s.remove_player(&name));
    })
}

// ----- positions -----

pub fn build_add_position(state: &Tracker) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(label) = dom::prompt("Position (e.g., DP, EH)", "") else {
            return;
        };
        if label.is_empty() {
            return;
        }
        try_commit(&state, |s| s.add_position(&label));
    })
}

pub fn build_rename_position(state: &Tracker) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |old: String| {
        let Some(new) = dom::prompt("Rename position to:", &old) else {
            return;
        };
        if new.is_empty() || new == old {
            return;
        }
        try_commit(&state, |s| s.rename_position(&old, &new));
    })
}

pub fn build_remove_position(state: &Tracker) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |label: String| {
        if !dom::confirm(&format!("Remove {label}?")) {
            return;
        }
        try_commit(&state, |s| s.remove_position(&label));
    })
}

// ----- games -----

pub fn build_new_game(state: &Tracker) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(date) = dom::prompt("Game date (YYYY-MM-DD)?", &dom::today_iso()) else {
            return;
        };
        if date.is_empty() {
            return;
        }
        let innings = dom::prompt("# innings?", "7")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_INNINGS);
        commit(&state, |s| {
            s.create_game(date, innings, dom::entropy_seed());
        });
    })
}

pub fn build_select_game(state: &Tracker) -> Callback<GameId> {
    let state = state.clone();
    Callback::from(move |id: GameId| commit(&state, |s| s.set_active_game(Some(id))))
}

pub fn build_duplicate_game(state: &Tracker) -> Callback<GameId> {
    let state = state.clone();
    Callback::from(move |id: GameId| {
        try_commit(&state, |s| {
            s.duplicate_game(&id, dom::entropy_seed()).map(|_| ())
        });
    })
}

pub fn build_delete_game(state: &Tracker) -> Callback<GameId> {
    let state = state.clone();
    Callback::from(move |id: GameId| {
        if !dom::confirm("Delete this game?") {
            return;
        }
        try_commit(&state, |s| s.delete_game(&id));
    })
}

pub fn build_set_game_date(state: &Tracker) -> Callback<(GameId, String)> {
    let state = state.clone();
    Callback::from(move |(id, date): (GameId, String)| {
        try_commit(&state, |s| s.set_game_date(&id, date));
    })
}

pub fn build_set_game_notes(state: &Tracker) -> Callback<(GameId, String)> {
    let state = state.clone();
    Callback::from(move |(id, notes): (GameId, String)| {
        try_commit(&state, |s| s.set_game_notes(&id, notes));
    })
}

pub fn build_resize_innings(state: &Tracker) -> Callback<(GameId, usize)> {
    let state = state.clone();
    Callback::from(move |(id, innings): (GameId, usize)| {
        try_commit(&state, |s| s.resize_innings(&id, innings));
    })
}

pub fn build_set_assignment(state: &Tracker) -> Callback<(usize, usize, String)> {
    let state = state.clone();
    Callback::from(move |(inning, position, player): (usize, usize, String)| {
        let Some(id) = state.active_game_id().cloned() else {
            return;
        };
        try_commit(&state, |s| s.set_assignment(&id, inning, position, player));
    })
}

// ----- filters -----

pub fn build_filter_from(state: &Tracker) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |date: String| commit(&state, |s| s.set_filter_from(date)))
}

pub fn build_filter_to(state: &Tracker) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |date: String| commit(&state, |s| s.set_filter_to(date)))
}

pub fn build_clear_filter(state: &Tracker) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| commit(&state, TrackerState::clear_filter))
}

// ----- import/export -----

pub fn build_export_json(state: &Tracker) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        if let Err(err) = export_json(&state) {
            dom::alert(&format!("Export failed: {err}"));
        }
    })
}

pub fn build_export_csv(state: &Tracker) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        if let Err(err) = export_csv(&state) {
            dom::alert(&format!("Export failed: {err}"));
        }
    })
}

pub fn build_import(state: &Tracker) -> Callback<web_sys::File> {
    let state = state.clone();
    Callback::from(move |file: web_sys::File| {
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match read_and_parse(&file).await {
                Ok(doc) => {
                    let mut next = (*state).clone();
                    next.apply_import(doc);
                    state.set(next);
                    dom::alert("Imported!");
                }
                Err(err) => dom::alert(&format!("Import failed: {err}")),
            }
        });
    })
}

fn export_json(state: &TrackerState) -> anyhow::Result<()> {
    let json = ExportDoc::from_state(state).to_json_pretty()?;
    dom::download_text_file(
        &files::backup_filename(state.team_name()),
        "application/json",
        &json,
    )
    .map_err(|err| anyhow::anyhow!(dom::js_error_message(&err)))
}

fn export_csv(state: &TrackerState) -> anyhow::Result<()> {
    let csv = pivot_csv(state.positions(), &state.summary().pivot)?;
    dom::download_text_file(
        &files::summary_filename(state.team_name()),
        "text/csv;charset=utf-8;",
        &csv,
    )
    .map_err(|err| anyhow::anyhow!(dom::js_error_message(&err)))
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn read_and_parse(file: &web_sys::File) -> anyhow::Result<ImportedDoc> {
    let text = dom::read_file_text(file)
        .await
        .map_err(|err| anyhow::anyhow!(dom::js_error_message(&err)))?;
    Ok(ImportedDoc::parse(&text)?)
}
