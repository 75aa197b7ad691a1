use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

/// Site header with the logo linking back to the listing.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class={classes!("py-8")}>
            <div class={classes!("max-w-[720px]", "mx-auto", "px-4")}>
                <Link<Route>
                    to={Route::Home}
                    classes={classes!(
                        "inline-flex",
                        "items-baseline",
                        "text-[1.6rem]",
                        "font-bold",
                        "text-[var(--text)]",
                        "no-underline"
                    )}
                >
                    { "spacetrail" }
                    <span class={classes!("text-[var(--primary)]")}>{ "." }</span>
                </Link<Route>>
            </div>
        </header>
    }
}
