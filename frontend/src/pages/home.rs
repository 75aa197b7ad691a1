use spacetrail_shared::PostFeed;
use web_sys::console;
use yew::prelude::*;

use crate::{
    api::ContentApi,
    clock,
    components::{loading_spinner::LoadingSpinner, post_card::PostCard},
    head,
};

/// Summaries requested per listing page.
const PAGE_SIZE: usize = 3;

/// Listing page: the first page of post summaries plus incremental
/// load-more pagination driven by the API cursor.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_context::<ContentApi>();
    let feed = use_state(PostFeed::default);
    let loading = use_state(|| true);
    let loading_more = use_state(|| false);
    let error = use_state(|| None::<String>);

    use_effect_with((), |_| {
        head::set_page_title("Home");
        || ()
    });

    {
        let api = api.clone();
        let feed = feed.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            if let Some(api) = api {
                wasm_bindgen_futures::spawn_local(async move {
                    match api.query_posts(PAGE_SIZE).await {
                        Ok(page) => feed.set(PostFeed::from_page(&page, clock::now_utc())),
                        Err(e) => {
                            console::error_1(&format!("Failed to fetch posts: {}", e).into());
                            error.set(Some(e));
                        },
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    // 点击“加载更多”：按 API 返回的游标原样请求下一页。
    // The button is disabled while a request is outstanding, so two
    // in-flight loads cannot race on the cursor.
    let on_load_more = {
        let api = api.clone();
        let feed = feed.clone();
        let loading_more = loading_more.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *loading_more {
                return;
            }
            let Some(next) = feed.next_page.clone() else {
                return;
            };
            let Some(api) = api.clone() else {
                return;
            };
            loading_more.set(true);
            let feed = feed.clone();
            let loading_more = loading_more.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.fetch_page(&next).await {
                    Ok(page) => {
                        let mut merged = (*feed).clone();
                        merged.extend(&page, clock::now_utc());
                        feed.set(merged);
                    },
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch more posts: {}", e).into());
                        error.set(Some(e));
                    },
                }
                loading_more.set(false);
            });
        })
    };

    let body = if *loading {
        html! {
            <div class={classes!("flex", "min-h-[40vh]", "items-center", "justify-center")}>
                <LoadingSpinner />
            </div>
        }
    } else {
        html! {
            <>
                <div class={classes!("flex", "flex-col")}>
                    { for feed.posts.iter().cloned().map(|post| html! {
                        <PostCard key={post.slug.clone()} post={post.clone()} />
                    }) }
                </div>
                if let Some(message) = (*error).clone() {
                    <p
                        class={classes!("mt-6", "text-[0.9rem]", "text-[var(--danger)]")}
                        role="alert"
                    >
                        { message }
                    </p>
                }
                if feed.has_more() {
                    <button
                        type="button"
                        class={classes!(
                            "mt-10",
                            "bg-transparent",
                            "border-none",
                            "p-0",
                            "text-[1.05rem]",
                            "font-bold",
                            "text-[var(--primary)]",
                            "cursor-pointer",
                            "hover:underline",
                            "disabled:opacity-60",
                            "disabled:cursor-wait"
                        )}
                        disabled={*loading_more}
                        onclick={on_load_more}
                    >
                        { if *loading_more { "Carregando..." } else { "Carregar mais posts" } }
                    </button>
                }
            </>
        }
    };

    html! {
        <main class={classes!("max-w-[720px]", "mx-auto", "px-4", "py-10")}>
            { body }
        </main>
    }
}
