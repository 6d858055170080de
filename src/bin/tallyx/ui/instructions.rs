use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InstructionsProps {
    pub file: AttrValue,
}

#[function_component]
pub fn Instructions(props: &InstructionsProps) -> Html {
    html! {
        <p>
            {"Edit "}<code>{props.file.clone()}</code>{" and save to reload."}
        </p>
    }
}
