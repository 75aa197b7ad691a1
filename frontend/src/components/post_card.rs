use spacetrail_shared::PostListItem;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

/// Props for [`PostCard`].
#[derive(Properties, PartialEq, Clone)]
pub struct PostCardProps {
    /// Formatted listing entry.
    pub post: PostListItem,
}

/// One summary card in the listing feed, linking to the detail page.
#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = props.post.clone();
    let detail_route = Route::Post {
        slug: post.slug.clone(),
    };

    html! {
        <article class={classes!("py-6", "border-b", "border-[var(--border)]")}>
            <h2 class={classes!("m-0", "text-[1.5rem]", "leading-[1.3]")}>
                <Link<Route>
                    to={detail_route}
                    classes={classes!(
                        "text-[var(--text)]",
                        "no-underline",
                        "transition-colors",
                        "hover:text-[var(--primary)]"
                    )}
                >
                    { &post.title }
                </Link<Route>>
            </h2>
            <p class={classes!("mt-2", "mb-4", "text-[var(--muted)]")}>{ &post.subtitle }</p>
            <div class={classes!(
                "flex",
                "flex-wrap",
                "gap-5",
                "text-[0.85rem]",
                "text-[var(--muted)]"
            )}>
                <span class={classes!("inline-flex", "items-center", "gap-[0.35rem]")}>
                    <i class={classes!("far", "fa-calendar-alt")} aria-hidden="true"></i>
                    <time>{ &post.date }</time>
                </span>
                <span class={classes!("inline-flex", "items-center", "gap-[0.35rem]")}>
                    <i class={classes!("fas", "fa-user-circle")} aria-hidden="true"></i>
                    { &post.author }
                </span>
            </div>
        </article>
    }
}
