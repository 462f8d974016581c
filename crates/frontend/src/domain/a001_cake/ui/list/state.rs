use contracts::domain::a001_cake::category::CakeCategory;
use contracts::shared::catalog::display_state::DisplayState;
use contracts::shared::catalog::filter::CakeFilter;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Clone, Debug, Default)]
pub struct CakeListState {
    // Состояние каталога (загрузка / карточки / пусто / ошибка)
    pub display: DisplayState,

    // Активный фильтр
    pub filter: CakeFilter,
}

pub fn create_state() -> RwSignal<CakeListState> {
    RwSignal::new(CakeListState {
        display: DisplayState::Loading,
        filter: filter_from_location(),
    })
}

/// `?filter=<code>` in the page URL
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
}

pub fn parse_filter_query(search: &str) -> CakeFilter {
    let query: CatalogQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .filter
        .as_deref()
        .and_then(CakeCategory::from_code)
        .map(CakeFilter::new)
        .unwrap_or_default()
}

/// Query string for `filter`; empty for the default `all`
pub fn filter_query(filter: &CakeFilter) -> String {
    let query = CatalogQuery {
        filter: match filter.active() {
            CakeCategory::All => None,
            other => Some(other.code().to_string()),
        },
    };
    let query_string = serde_qs::to_string(&query).unwrap_or_default();
    if query_string.is_empty() {
        String::new()
    } else {
        format!("?{}", query_string)
    }
}

fn filter_from_location() -> CakeFilter {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_filter_query(&search)
}

/// Mirror the active filter into the URL without reloading
pub fn write_filter_to_location(filter: &CakeFilter) {
    let Some(w) = window() else {
        return;
    };
    let current_search = w.location().search().unwrap_or_default();
    let new_search = filter_query(filter);
    if current_search == new_search {
        return;
    }

    let pathname = w.location().pathname().unwrap_or_default();
    let hash = w.location().hash().unwrap_or_default();
    let new_url = format!("{}{}{}", pathname, new_search, hash);
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}
