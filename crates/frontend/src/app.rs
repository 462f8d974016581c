use crate::domain::a001_cake::ui::list::CakeCatalog;
use crate::layout::hero::{About, Hero};
use crate::layout::Shell;
use crate::shared::config::ConfigContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Storefront configuration: embedded default now, overlay once it settles
    let config = ConfigContext::new();
    provide_context(config);
    config.resolve();

    view! {
        <ConfigProvider>
            <Shell>
                <Hero />
                <CakeCatalog />
                <About />
            </Shell>
        </ConfigProvider>
    }
}
