//! CardAnimated — Thaw Card with the `card-appear` entrance animation.
//!
//! Animation is defined in `style/storefront.css` (`@keyframes card-appear`).
//!
//! # Example
//! ```rust,ignore
//! // Animate on mount
//! <CardAnimated delay_ms=stagger_delay_ms(0)>
//!
//! // Hold the card hidden until `in_view` turns true
//! <CardAnimated delay_ms=stagger_delay_ms(1) in_view=in_view>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay between two neighbouring cards
pub const STAGGER_STEP_MS: u32 = 100;

/// Entrance delay for the card at `index` (0-based)
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}

/// Inline style: hidden until `in_view`, then the delayed entrance animation
pub fn card_style(delay_ms: u32, in_view: bool) -> String {
    if in_view {
        format!("animation: card-appear 0.4s ease-out {}ms both;", delay_ms)
    } else {
        "opacity: 0;".to_string()
    }
}

/// Thaw [`Card`] with the `card-appear` animation.
///
/// # Props
/// - `delay_ms` — animation delay in ms (default `0`).
/// - `in_view`  — start the animation only once this turns true (default: at mount).
/// - `class`    — extra CSS classes.
/// - `children` — card content.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    in_view: Option<Signal<bool>>,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = move || card_style(delay_ms, in_view.map(|s| s.get()).unwrap_or(true));

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
