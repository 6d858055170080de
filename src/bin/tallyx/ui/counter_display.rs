use tally::counter::Counter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CounterDisplayProps {
    pub counter: Counter,
}

#[function_component]
pub fn CounterDisplay(props: &CounterDisplayProps) -> Html {
    html! {
        <a class="App-link">{props.counter.to_string()}</a>
    }
}
