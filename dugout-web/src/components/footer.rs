use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="tracker-footer">
            { "Data stays in this browser. Export a JSON backup after big edits." }
        </footer>
    }
}
