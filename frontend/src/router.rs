use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

/// Client-side routes of the blog.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    /// Listing page.
    #[at("/")]
    Home,

    /// Detail page for one post, addressed by slug.
    #[at("/post/:slug")]
    Post {
        /// Document slug.
        slug: String,
    },

    /// Catch-all for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Post {
            slug,
        } => {
            html! { <pages::post::PostPage slug={slug} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

/// Application shell: router plus the shared page chrome.
#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
