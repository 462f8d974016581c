use contracts::domain::a001_cake::aggregate::Cake;
use contracts::shared::catalog::display_state::DisplayState;
use contracts::shared::catalog::filter::CakeFilter;
use leptos::prelude::*;

use crate::domain::a001_cake::ui::card::CakeCard;
use crate::shared::components::card_animated::stagger_delay_ms;
use crate::shared::icons::icon;

/// One card of the populated grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    pub cake: Cake,
    /// Value of `data-category`
    pub category: &'static str,
    pub delay_ms: u32,
}

/// What the catalog section puts on the page for a display state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSection {
    Loading,
    Grid(Vec<GridItem>),
    Empty,
    Error { contact_url: String },
}

pub fn catalog_section(display: &DisplayState, contact_url: &str) -> CatalogSection {
    match display {
        DisplayState::Loading => CatalogSection::Loading,
        DisplayState::Populated(_) => CatalogSection::Grid(
            display
                .cakes()
                .iter()
                .enumerate()
                .map(|(index, cake)| GridItem {
                    cake: cake.clone(),
                    category: cake.category.code(),
                    delay_ms: stagger_delay_ms(index),
                })
                .collect(),
        ),
        DisplayState::Empty => CatalogSection::Empty,
        DisplayState::Error => CatalogSection::Error {
            contact_url: contact_url.to_string(),
        },
    }
}

/// Renders exactly one of the four catalog states
#[component]
pub fn CatalogView(
    #[prop(into)]
    display: Signal<DisplayState>,
    #[prop(into)]
    filter: Signal<CakeFilter>,
    /// Fallback link for the error state
    #[prop(into)]
    contact_url: Signal<String>,
) -> impl IntoView {
    move || {
        let section = display.with(|d| catalog_section(d, &contact_url.get()));
        match section {
            CatalogSection::Loading => view! { <LoadingState /> }.into_any(),
            CatalogSection::Grid(items) => view! {
                <div id="cake-grid" class="cake-grid">
                    {items
                        .into_iter()
                        .map(|item| view! { <CakeCard item=item filter=filter /> })
                        .collect_view()}
                </div>
            }
            .into_any(),
            CatalogSection::Empty => view! { <EmptyState /> }.into_any(),
            CatalogSection::Error { contact_url } => {
                view! { <ErrorState contact_url=contact_url /> }.into_any()
            }
        }
    }
}

#[component]
fn LoadingState() -> impl IntoView {
    view! {
        <div id="loading-state" class="catalog-state catalog-state--loading">
            <div class="spinner" role="status"></div>
            <p>"Loading our delicious cakes..."</p>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div id="empty-state" class="catalog-state catalog-state--empty">
            {icon("cake")}
            <h4>"No cakes available right now"</h4>
            <p>"We're baking new creations. Please check back soon."</p>
        </div>
    }
}

#[component]
fn ErrorState(contact_url: String) -> impl IntoView {
    view! {
        <div class="catalog-state catalog-state--error">
            <div class="alert alert--error" role="alert">
                {icon("alert")}
                <h4>"Unable to load cakes"</h4>
                <p>
                    "We're having trouble loading our cake collection. Please try again later or contact us directly."
                </p>
                <a href=contact_url class="button button--success" target="_blank" rel="noopener">
                    {icon("whatsapp")}
                    " Contact Us"
                </a>
            </div>
        </div>
    }
}
