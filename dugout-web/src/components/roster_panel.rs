use yew::prelude::*;

use crate::components::card::Card;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub players: Vec<String>,
    pub on_add: Callback<()>,
    pub on_rename: Callback<String>,
    pub on_remove: Callback<String>,
}

#[function_component(RosterPanel)]
pub fn roster_panel(p: &Props) -> Html {
    let add = {
        let cb = p.on_add.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Card title="Roster" subtitle="Click a name to rename.">
            <div class="tag-row">
                { for p.players.iter().map(|name| {
                    let rename = {
                        let cb = p.on_rename.clone();
                        let name = name.clone();
                        Callback::from(move |_| cb.emit(name.clone()))
                    };
                    let remove = {
                        let cb = p.on_remove.clone();
                        let name = name.clone();
                        Callback::from(move |_| cb.emit(name.clone()))
                    };
                    html! {
                        <span class="tag" key={name.clone()}>
                            <button class="tag__name" onclick={rename} title="Rename player">{ name }</button>
                            <button class="tag__remove" onclick={remove} title="Remove">{ "✕" }</button>
                        </span>
                    }
                }) }
                <button id="add-player-btn" class="btn" onclick={add}>{ "+ Add player" }</button>
            </div>
        </Card>
    }
}
