use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Titled panel wrapping each section of the page.
#[function_component(Card)]
pub fn card(props: &Props) -> Html {
    html! {
        <div class="card">
            <div class="card__header">
                <div class="card__title">{ props.title.clone() }</div>
                { props.subtitle.as_ref().map(|subtitle| html! {
                    <div class="card__subtitle">{ subtitle.clone() }</div>
                }).unwrap_or_default() }
            </div>
            <div class="card__body">{ for props.children.iter() }</div>
        </div>
    }
}
