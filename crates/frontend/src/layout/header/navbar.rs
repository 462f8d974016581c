use leptos::prelude::*;
use leptos::prelude::window_event_listener;

use crate::layout::anchor_link::AnchorLink;

/// Scroll offset after which the navbar switches to its solid style
const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);

    // Глобальный обработчик scroll на window
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default();
        let is_scrolled = y > SCROLLED_THRESHOLD_PX;
        if scrolled.get_untracked() != is_scrolled {
            scrolled.set(is_scrolled);
        }
    });

    view! {
        <nav data-zone="header" class="navbar" class:scrolled=move || scrolled.get()>
            <div class="navbar__content">
                <AnchorLink href="#home" class="navbar__brand">"Sweet Delights"</AnchorLink>
                <div class="navbar__links">
                    <AnchorLink href="#home" class="navbar__link">"Home"</AnchorLink>
                    <AnchorLink href="#cakes" class="navbar__link">"Cakes"</AnchorLink>
                    <AnchorLink href="#about" class="navbar__link">"About"</AnchorLink>
                    <AnchorLink href="#contact" class="navbar__link">"Contact"</AnchorLink>
                </div>
            </div>
        </nav>
    }
}
