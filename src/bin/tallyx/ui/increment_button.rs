use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IncrementButtonProps {
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

/// The page's only interactive control.
#[function_component]
pub fn IncrementButton(props: &IncrementButtonProps) -> Html {
    let onclick = props.onclick.clone();
    html! {
        <button {onclick}>{props.label.clone()}</button>
    }
}
