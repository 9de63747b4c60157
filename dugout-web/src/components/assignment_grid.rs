use dugout_core::Game;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::card::Card;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: Game,
    pub players: Vec<String>,
    pub positions: Vec<String>,
    /// (inning index, position index, player name). Empty name clears.
    pub on_assign: Callback<(usize, usize, String)>,
}

/// One `<select>` per grid cell, innings down, positions across.
#[function_component(AssignmentGrid)]
pub fn assignment_grid(p: &Props) -> Html {
    let title = format!("Edit Assignments: {}", p.game.date);
    html! {
        <Card title={title} subtitle="Choose a player for each position and inning.">
            <div class="table-scroll">
                <table class="grid-table">
                    <thead>
                        <tr>
                            <th class="grid-table__corner">{ "Inning" }</th>
                            { for p.positions.iter().map(|label| html! {
                                <th key={label.clone()}>{ label }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for (0..p.game.innings).map(|inning| grid_row(p, inning)) }
                    </tbody>
                </table>
            </div>
        </Card>
    }
}

fn grid_row(p: &Props, inning: usize) -> Html {
    html! {
        <tr key={inning.to_string()}>
            <td class="grid-table__inning">{ inning + 1 }</td>
            { for (0..p.positions.len()).map(|position| {
                let value = p
                    .game
                    .cell(inning, position)
                    .unwrap_or_default()
                    .to_string();
                let change = {
                    let cb = p.on_assign.clone();
                    Callback::from(move |e: web_sys::Event| {
                        if let Some(select) = e
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                        {
                            cb.emit((inning, position, select.value()));
                        }
                    })
                };
                html! {
                    <td key={position.to_string()}>
                        <select class="input" value={value} onchange={change}>
                            <option value="">{ "-" }</option>
                            { for p.players.iter().map(|name| html! {
                                <option key={name.clone()} value={name.clone()}>{ name }</option>
                            }) }
                        </select>
                    </td>
                }
            }) }
        </tr>
    }
}
