use dugout_core::{Game, GameId};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::card::Card;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub games: Vec<Game>,
    pub active: Option<GameId>,
    pub on_select: Callback<GameId>,
    pub on_duplicate: Callback<GameId>,
    pub on_delete: Callback<GameId>,
    pub on_date: Callback<(GameId, String)>,
    pub on_innings: Callback<(GameId, usize)>,
    pub on_notes: Callback<(GameId, String)>,
}

fn input_value(e: &web_sys::Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[function_component(GamesTable)]
pub fn games_table(p: &Props) -> Html {
    if p.games.is_empty() {
        return html! {
            <Card title="Games" subtitle="Select a game to edit assignments.">
                <p class="empty-note">{ "No games yet. Create one to get started." }</p>
            </Card>
        };
    }
    html! {
        <Card title="Games" subtitle="Select a game to edit assignments.">
            <div class="table-scroll">
                <table class="games-table">
                    <thead>
                        <tr>
                            <th>{ "Date" }</th>
                            <th>{ "Innings" }</th>
                            <th>{ "Notes" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for p.games.iter().map(|game| game_row(p, game)) }
                    </tbody>
                </table>
            </div>
        </Card>
    }
}

fn game_row(p: &Props, game: &Game) -> Html {
    let id = game.id.clone();
    let date_change = {
        let cb = p.on_date.clone();
        let id = id.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(value) = input_value(&e) {
                cb.emit((id.clone(), value));
            }
        })
    };
    let innings_change = {
        let cb = p.on_innings.clone();
        let id = id.clone();
        Callback::from(move |e: web_sys::Event| {
            // Unparseable input leaves the stored innings count alone.
            if let Some(innings) = input_value(&e).and_then(|value| value.parse().ok()) {
                cb.emit((id.clone(), innings));
            }
        })
    };
    let notes_change = {
        let cb = p.on_notes.clone();
        let id = id.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(value) = input_value(&e) {
                cb.emit((id.clone(), value));
            }
        })
    };
    let select = {
        let cb = p.on_select.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let duplicate = {
        let cb = p.on_duplicate.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let delete = {
        let cb = p.on_delete.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let row_class = if p.active.as_ref() == Some(&game.id) {
        "games-table__row games-table__row--active"
    } else {
        "games-table__row"
    };
    html! {
        <tr class={row_class} key={game.id.as_str().to_string()}>
            <td>
                <input type="date" class="input" value={game.date.clone()} onchange={date_change} />
            </td>
            <td>
                <input
                    type="number"
                    min="1"
                    class="input input--narrow"
                    value={game.innings.to_string()}
                    onchange={innings_change}
                />
            </td>
            <td>
                <input
                    class="input"
                    placeholder="Optional notes"
                    value={game.notes.clone()}
                    onchange={notes_change}
                />
            </td>
            <td class="games-table__actions">
                <button class="btn" onclick={select}>{ "Edit" }</button>
                <button class="btn" onclick={duplicate} title="Duplicate">{ "Copy" }</button>
                <button class="btn btn-danger" onclick={delete}>{ "Delete" }</button>
            </td>
        </tr>
    }
}
