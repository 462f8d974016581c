use leptos::ev::MouseEvent;
use leptos::prelude::*;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scroll to the element matching `selector` (e.g. `#cakes`).
/// Leaves the default navigation alone if nothing matches.
fn scroll_to(ev: &MouseEvent, selector: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(Some(target)) = document.query_selector(selector) else {
        return;
    };

    ev.prevent_default();
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// In-page `#anchor` link with smooth scrolling
#[component]
pub fn AnchorLink(
    /// Target, including the leading `#`
    #[prop(into)]
    href: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let selector = href.clone();

    view! {
        <a href=href class=class on:click=move |ev| scroll_to(&ev, &selector)>
            {children()}
        </a>
    }
}
