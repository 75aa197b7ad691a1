//! Spacetrail frontend application.

mod api;
mod clock;
mod components;
mod config;
mod head;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;

use web_sys::console;
use yew::prelude::*;

use crate::{api::ContentApi, config::ApiConfig};

#[derive(Properties, PartialEq)]
struct ConfigErrorProps {
    message: AttrValue,
}

/// Startup failure screen shown when the build carries no CMS endpoint.
#[function_component(ConfigError)]
fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <main class={classes!("max-w-[720px]", "mx-auto", "px-4", "py-16")}>
            <h1 class={classes!("m-0", "text-[1.5rem]")}>{ "Configuração ausente" }</h1>
            <p class={classes!("text-[var(--muted)]")}>{ props.message.clone() }</p>
        </main>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ApiConfig::from_env());

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            if let Err(message) = config.as_ref() {
                console::error_1(&format!("Configuration error: {}", message).into());
            }
            || ()
        });
    }

    match config.as_ref() {
        Ok(config) => {
            let api = ContentApi::new(config);
            html! {
                <ContextProvider<ContentApi> context={api}>
                    <router::AppRouter />
                </ContextProvider<ContentApi>>
            }
        },
        Err(message) => html! { <ConfigError message={message.clone()} /> },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
