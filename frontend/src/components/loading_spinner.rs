use yew::prelude::*;

/// Centered activity indicator shown while a page waits on the CMS.
///
/// One size fits both call sites here, so there is no size prop.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class={classes!("flex", "items-center", "justify-center", "p-6")} role="status">
            <div class={classes!(
                "w-10",
                "h-10",
                "rounded-full",
                "border-[3px]",
                "border-[var(--border)]",
                "border-t-[var(--primary)]",
                "animate-spin"
            )} />
            <span class={classes!("sr-only")}>{ "Carregando..." }</span>
        </div>
    }
}
