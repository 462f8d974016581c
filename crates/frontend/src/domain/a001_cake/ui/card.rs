use contracts::shared::catalog::filter::CakeFilter;
use leptos::html::Div;
use leptos::prelude::*;

use crate::domain::a001_cake::ui::list::view::GridItem;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::viewport::on_first_intersection;

/// One cake in the catalog grid
///
/// The wrapper carries `data-category`; visibility follows the active filter
/// without touching the rest of the card. The entrance animation starts when the
/// card first scrolls into view.
#[component]
pub fn CakeCard(
    item: GridItem,
    #[prop(into)]
    filter: Signal<CakeFilter>,
) -> impl IntoView {
    let GridItem {
        cake,
        category,
        delay_ms,
    } = item;
    let cake_category = cake.category;
    let is_visible = move || filter.get().is_visible(cake_category);

    let node_ref = NodeRef::<Div>::new();
    let in_view = RwSignal::new(false);
    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if in_view.get_untracked() {
            return;
        }
        if let Err(e) = on_first_intersection(&el, move || in_view.set(true)) {
            log::warn!("IntersectionObserver unavailable, showing card at once: {:?}", e);
            in_view.set(true);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class="cake-grid__item"
            data-category=category
            style:display=move || if is_visible() { "block" } else { "none" }
        >
            <CardAnimated class="cake-card" delay_ms=delay_ms in_view=in_view>
                <div class="cake-card__badge">
                    <Badge variant="premium".to_string()>
                        {icon("star")}
                        " Premium"
                    </Badge>
                </div>
                <img
                    src=cake.image_path.clone()
                    class="cake-card__image"
                    alt=cake.display_name.clone()
                    loading="lazy"
                />
                <div class="cake-card__content">
                    <h5 class="cake-card__title">{cake.display_name.clone()}</h5>
                    <p class="cake-card__description">{cake.description.clone()}</p>
                    <div class="cake-card__price">{cake.price.clone()}</div>
                    <a
                        href=cake.order_url.clone()
                        class="button button--primary button--block"
                        target="_blank"
                        rel="noopener"
                    >
                        {icon("whatsapp")}
                        " Order Now"
                    </a>
                </div>
            </CardAnimated>
        </div>
    }
}
