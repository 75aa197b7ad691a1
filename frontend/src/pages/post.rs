use spacetrail_shared::{dates, readtime, PostDocument};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::ContentApi,
    clock,
    components::{comments::Comments, loading_spinner::LoadingSpinner, rich_text::RichTextBody},
    head,
    router::Route,
};

/// Props for [`PostPage`].
#[derive(Properties, Clone, PartialEq)]
pub struct PostPageProps {
    /// Document slug from the route.
    pub slug: String,
}

/// Detail page: one post fetched by slug, with banner, reading time and
/// the rendered rich-text sections.
#[function_component(PostPage)]
pub fn post_page(props: &PostPageProps) -> Html {
    let api = use_context::<ContentApi>();
    let post = use_state(|| None::<PostDocument>);
    let loading = use_state(|| true);

    {
        let api = api.clone();
        let post = post.clone();
        let loading = loading.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            loading.set(true);
            if let Some(api) = api {
                wasm_bindgen_futures::spawn_local(async move {
                    match api.get_by_uid(&slug).await {
                        Ok(document) => {
                            match document.as_ref() {
                                Some(doc) => head::set_page_title(&doc.data.title),
                                None => head::set_page_title("404"),
                            }
                            post.set(document);
                        },
                        Err(e) => {
                            console::error_1(&format!("Failed to fetch post: {}", e).into());
                            head::set_page_title("404");
                            post.set(None);
                        },
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    if *loading {
        return html! {
            <main class={classes!(
                "max-w-[720px]",
                "mx-auto",
                "px-4",
                "py-16",
                "flex",
                "flex-col",
                "items-center",
                "gap-4"
            )}>
                <LoadingSpinner />
                <p class={classes!("m-0", "text-[var(--muted)]")}>{ "Carregando..." }</p>
            </main>
        };
    }

    let Some(document) = (*post).clone() else {
        return html! {
            <main class={classes!("max-w-[720px]", "mx-auto", "px-4", "py-16")}>
                <p class={classes!(
                    "m-0",
                    "uppercase",
                    "text-[0.85rem]",
                    "tracking-[0.2em]",
                    "text-[var(--primary)]"
                )}>
                    { "404" }
                </p>
                <h1 class={classes!("mt-2", "mb-4", "text-[2rem]")}>{ "Post não encontrado" }</h1>
                <p class={classes!("m-0", "mb-6", "text-[var(--muted)]")}>
                    { "O link pode estar quebrado ou o post foi removido." }
                </p>
                <Link<Route>
                    to={Route::Home}
                    classes={classes!("font-bold", "text-[var(--primary)]", "hover:underline")}
                >
                    { "Voltar para a home" }
                </Link<Route>>
            </main>
        };
    };

    let published = dates::format_publication_date(document.first_publication_date, clock::now_utc());
    let read_time = readtime::estimate_read_time(&document.data.content);

    html! {
        <>
            <div class={classes!("w-full", "max-h-[400px]", "overflow-hidden")}>
                <img
                    src={document.data.banner.url.clone()}
                    alt="Post banner"
                    class={classes!("w-full", "h-full", "object-cover", "block")}
                />
            </div>
            <main class={classes!("max-w-[720px]", "mx-auto", "px-4", "py-10")}>
                <article>
                    <h1 class={classes!("m-0", "text-[2.25rem]", "leading-[1.25]", "sm:text-[1.65rem]")}>
                        { &document.data.title }
                    </h1>
                    <div
                        class={classes!(
                            "mt-4",
                            "flex",
                            "flex-wrap",
                            "gap-5",
                            "text-[0.9rem]",
                            "text-[var(--muted)]"
                        )}
                        aria-label="Informações do post"
                    >
                        <span class={classes!("inline-flex", "items-center", "gap-[0.35rem]")}>
                            <i class={classes!("far", "fa-calendar-alt")} aria-hidden="true"></i>
                            <time>{ published }</time>
                        </span>
                        <span class={classes!("inline-flex", "items-center", "gap-[0.35rem]")}>
                            <i class={classes!("fas", "fa-user-circle")} aria-hidden="true"></i>
                            { &document.data.author }
                        </span>
                        <span class={classes!("inline-flex", "items-center", "gap-[0.35rem]")}>
                            <i class={classes!("far", "fa-clock")} aria-hidden="true"></i>
                            { format!("{} min", read_time) }
                        </span>
                    </div>
                    { for document.data.content.iter().map(|section| {
                        html! {
                            <section class={classes!("mt-10")}>
                                <h2 class={classes!("m-0", "mb-4", "text-[1.5rem]")}>
                                    { &section.heading }
                                </h2>
                                <RichTextBody
                                    blocks={section.body.clone()}
                                    class={classes!("post-body", "leading-[1.7]", "text-[var(--text)]")}
                                />
                            </section>
                        }
                    }) }
                </article>
                <Comments />
            </main>
        </>
    }
}
