pub mod anchor_link;
pub mod footer;
pub mod header;
pub mod hero;

use leptos::prelude::*;

/// Page shell: fixed navbar on top, sections in between, contact footer last.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                    |
/// +------------------------------------------+
/// |                 content                   |
/// +------------------------------------------+
/// |             Footer (contact)              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Navbar />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
