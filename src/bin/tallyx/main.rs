use gloo::utils::document;
use gloo_console::{error, log};
use tally::content::PageContent;
use tally::counter::{Counter, CounterAction};
use tally::mount::{mount_target, DEFAULT_MOUNT_ID};
use ui::{
    counter_display::CounterDisplay, increment_button::IncrementButton,
    instructions::Instructions, logo::Logo,
};
use yew::prelude::*;

pub mod ui;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub content: PageContent,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let counter = use_reducer(Counter::default);
    let onclick = {
        let dispatcher = counter.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CounterAction::Increment))
    };

    use_effect_with(counter.value(), |value| {
        log!(format!("counter: {}", value));
    });

    let content = &props.content;
    html! {
        <div class="App">
            <header class="App-header">
                <Logo src={content.logo_src.clone()} alt={content.logo_alt.clone()} />
                <Instructions file={content.source_file.clone()} />
                <CounterDisplay counter={*counter} />
                <IncrementButton label={content.button_label.clone()} {onclick} />
            </header>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    log!("tallyx starting");

    match mount_target(&document(), DEFAULT_MOUNT_ID) {
        Ok(root) => {
            log!(format!("mounting into #{}", DEFAULT_MOUNT_ID));
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(err) => {
            error!(format!("{}, mounting into <body>", err));
            yew::Renderer::<App>::new().render();
        }
    }
}
