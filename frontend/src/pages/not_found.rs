use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{head, router::Route};

/// Fallback page for unknown routes.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_effect_with((), |_| {
        head::set_page_title("404");
        || ()
    });

    html! {
        <main class={classes!("max-w-[720px]", "mx-auto", "px-4", "py-16")}>
            <h2 class={classes!("m-0", "mb-4", "text-[1.6rem]")}>{ "404 - Página não encontrada" }</h2>
            <p class={classes!("m-0", "mb-6", "text-[var(--muted)]")}>
                { "A página que você procura não existe." }
            </p>
            <Link<Route>
                to={Route::Home}
                classes={classes!("font-bold", "text-[var(--primary)]", "hover:underline")}
            >
                { "Voltar para a home" }
            </Link<Route>>
        </main>
    }
}
