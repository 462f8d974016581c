use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::icons::icon;

/// Contact section and page footer
#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_config();
    let contact_url = move || ctx.config.with(|c| c.contact_url());
    let number = move || ctx.config.with(|c| c.contact.whatsapp_number.clone());

    view! {
        <footer id="contact" data-zone="footer" class="footer">
            <div class="footer__contact">
                <h3>"Order your cake"</h3>
                <p>"Message us on WhatsApp and we'll get back to you shortly."</p>
                <a href=contact_url class="button button--success" target="_blank" rel="noopener">
                    {icon("whatsapp")}
                    " " {number}
                </a>
            </div>
        </footer>
    }
}
