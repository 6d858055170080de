use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component]
pub fn Logo(props: &LogoProps) -> Html {
    html! {
        <img src={props.src.clone()} class="App-logo" alt={props.alt.clone()} />
    }
}
