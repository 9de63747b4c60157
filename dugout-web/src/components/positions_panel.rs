use yew::prelude::*;

use crate::components::card::Card;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub positions: Vec<String>,
    pub on_add: Callback<()>,
    pub on_rename: Callback<String>,
    pub on_remove: Callback<String>,
}

/// The position list behaves like the roster panel, but the order shown
/// here is the column order of every assignment grid.
#[function_component(PositionsPanel)]
pub fn positions_panel(p: &Props) -> Html {
    let add = {
        let cb = p.on_add.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Card title="Positions" subtitle="Customize columns (e.g., DP, EH, RF2).">
            <div class="tag-row">
                { for p.positions.iter().map(|label| {
                    let rename = {
                        let cb = p.on_rename.clone();
                        let label = label.clone();
                        Callback::from(move |_| cb.emit(label.clone()))
                    };
                    let remove = {
                        let cb = p.on_remove.clone();
                        let label = label.clone();
                        Callback::from(move |_| cb.emit(label.clone()))
                    };
                    html! {
                        <span class="tag" key={label.clone()}>
                            <button class="tag__name" onclick={rename} title="Rename position">{ label }</button>
                            <button class="tag__remove" onclick={remove} title="Remove">{ "✕" }</button>
                        </span>
                    }
                }) }
                <button id="add-position-btn" class="btn" onclick={add}>{ "+ Add position" }</button>
            </div>
        </Card>
    }
}
