use web_sys::Element;
use yew::prelude::*;

const UTTERANCES_SCRIPT: &str = "https://utteranc.es/client.js";
const UTTERANCES_REPO: &str = "evnrodr/ignite-reactjs-spacetraveler-blog";
const UTTERANCES_ISSUE_TERM: &str = "pathname";
const UTTERANCES_THEME: &str = "github-dark";

/// utterances comment thread.
///
/// The widget script lives inside the host element and the effect cleanup
/// empties it, so navigating away removes the embed instead of leaving a
/// stray script tag behind.
#[function_component(Comments)]
pub fn comments() -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        use_effect_with((), move |_| {
            let host = host_ref.cast::<Element>();
            if let Some(host) = host.as_ref() {
                if let Some(document) = web_sys::window().and_then(|win| win.document()) {
                    if let Ok(script) = document.create_element("script") {
                        let _ = script.set_attribute("src", UTTERANCES_SCRIPT);
                        let _ = script.set_attribute("repo", UTTERANCES_REPO);
                        let _ = script.set_attribute("issue-term", UTTERANCES_ISSUE_TERM);
                        let _ = script.set_attribute("theme", UTTERANCES_THEME);
                        let _ = script.set_attribute("crossorigin", "anonymous");
                        let _ = script.set_attribute("async", "true");
                        let _ = host.append_child(&script);
                    }
                }
            }
            move || {
                if let Some(host) = host {
                    host.set_inner_html("");
                }
            }
        });
    }

    html! {
        <section ref={host_ref} class={classes!("mt-12")} aria-label="Comentários" />
    }
}
