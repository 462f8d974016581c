pub mod state;
pub mod view;

use contracts::domain::a001_cake::category::CakeCategory;
use contracts::shared::catalog::aggregator::load_catalog;
use contracts::shared::catalog::filter::CakeFilter;
use leptos::prelude::*;

use self::state::{create_state, write_filter_to_location};
use self::view::CatalogView;
use crate::domain::a001_cake::api::GithubCatalogSource;
use crate::shared::config::use_config;

/// Catalog section: shows Loading at once, runs one load cycle as soon as the
/// configuration has settled, then only filters
#[component]
#[allow(non_snake_case)]
pub fn CakeCatalog() -> impl IntoView {
    let ctx = use_config();
    let state = create_state();
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if !ctx.resolved.get() || started.get_value() {
            return;
        }
        started.set_value(true);

        let config = ctx.config.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let result = load_catalog(&GithubCatalogSource, &config).await;
            state.update(|s| s.display.finish(result));
        });
    });

    let display = Memo::new(move |_| state.with(|s| s.display.clone()));
    let filter = Signal::derive(move || state.with(|s| s.filter));

    let on_select = Callback::new(move |tag: CakeCategory| {
        state.update(|s| s.filter.select(tag));
        write_filter_to_location(&state.with_untracked(|s| s.filter));
    });

    view! {
        <section id="cakes" class="catalog">
            <div class="catalog__header">
                <h2 class="section-title">"Our Cakes"</h2>
                <p class="section-subtitle">
                    "Freshly baked to order. Pick a cake and message us to order."
                </p>
            </div>
            <FilterBar filter=filter on_select=on_select />
            <CatalogView
                display=display
                filter=filter
                contact_url=Signal::derive(move || ctx.config.with(|c| c.contact_url()))
            />
        </section>
    }
}

/// Filter buttons, one per category tag
#[component]
pub fn FilterBar(
    #[prop(into)]
    filter: Signal<CakeFilter>,
    on_select: Callback<CakeCategory>,
) -> impl IntoView {
    view! {
        <div class="filter-bar" role="group" aria-label="Filter cakes">
            {CakeCategory::all()
                .into_iter()
                .map(|tag| {
                    let is_active = move || filter.get().active() == tag;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() { "filter-btn filter-btn--active" } else { "filter-btn" }
                            }
                            data-filter=tag.code()
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| on_select.run(tag)
                        >
                            {tag.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
