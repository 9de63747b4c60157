use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub team_name: AttrValue,
    pub on_team_name: Callback<String>,
    pub on_new_game: Callback<()>,
    pub on_export_csv: Callback<()>,
    pub on_export_json: Callback<()>,
    pub on_import_file: Callback<web_sys::File>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_team_change = {
        let cb = p.on_team_name.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value());
            }
        })
    };
    let on_file_change = {
        let cb = p.on_import_file.clone();
        Callback::from(move |e: web_sys::Event| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                cb.emit(file);
            }
            // Reset so picking the same file twice still fires a change.
            input.set_value("");
        })
    };
    let new_game = {
        let cb = p.on_new_game.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export_csv = {
        let cb = p.on_export_csv.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export_json = {
        let cb = p.on_export_json.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header class="tracker-header" role="banner">
            <div class="tracker-header__brand">
                <span class="tracker-header__title">{ "Dugout" }</span>
                <input
                    id="team-name-input"
                    class="input tracker-header__team"
                    value={p.team_name.clone()}
                    onchange={on_team_change}
                    title="Team name"
                />
            </div>
            <div class="tracker-header__actions">
                <button id="new-game-btn" class="btn" onclick={new_game}>{ "+ New Game" }</button>
                <button id="export-csv-btn" class="btn" onclick={export_csv}>{ "Export CSV" }</button>
                <button id="export-json-btn" class="btn" onclick={export_json}>{ "Export JSON" }</button>
                <label class="btn tracker-header__import">
                    { "Import JSON" }
                    <input
                        type="file"
                        accept="application/json"
                        class="visually-hidden"
                        onchange={on_file_change}
                    />
                </label>
            </div>
        </header>
    }
}
