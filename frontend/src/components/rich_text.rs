use spacetrail_shared::{richtext, RichTextBlock};
use web_sys::Element;
use yew::prelude::*;

/// Props for [`RichTextBody`].
#[derive(Properties, Clone, PartialEq)]
pub struct RichTextBodyProps {
    /// Ordered rich-text blocks of one content section.
    pub blocks: Vec<RichTextBlock>,
    /// Extra classes for the host element.
    #[prop_or_default]
    pub class: Classes,
}

/// One content section's body: converts the structured blocks to sanitized
/// HTML and hands the string to the browser outside the virtual DOM, so Yew
/// never diffs markup it did not create.
#[function_component(RichTextBody)]
pub fn rich_text_body(props: &RichTextBodyProps) -> Html {
    let host_ref = use_node_ref();
    let html = use_memo(props.blocks.clone(), |blocks| richtext::render_html(blocks));

    {
        let host_ref = host_ref.clone();
        use_effect_with(html, move |html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(html.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={props.class.clone()} />
    }
}
