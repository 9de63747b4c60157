use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::card::Card;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub from: AttrValue,
    pub to: AttrValue,
    pub on_from: Callback<String>,
    pub on_to: Callback<String>,
    pub on_clear: Callback<()>,
}

fn date_change(cb: &Callback<String>) -> Callback<web_sys::Event> {
    let cb = cb.clone();
    Callback::from(move |e: web_sys::Event| {
        if let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            cb.emit(input.value());
        }
    })
}

#[function_component(FilterBar)]
pub fn filter_bar(p: &Props) -> Html {
    let clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Card title="Filters" subtitle="Limit the summary to a date range.">
            <div class="filter-bar">
                <label class="filter-bar__field">
                    { "From" }
                    <input
                        type="date"
                        class="input"
                        value={p.from.clone()}
                        onchange={date_change(&p.on_from)}
                    />
                </label>
                <label class="filter-bar__field">
                    { "To" }
                    <input
                        type="date"
                        class="input"
                        value={p.to.clone()}
                        onchange={date_change(&p.on_to)}
                    />
                </label>
                <button id="clear-filter-btn" class="btn" onclick={clear}>{ "Clear" }</button>
            </div>
        </Card>
    }
}
