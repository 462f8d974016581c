use leptos::prelude::*;

use crate::layout::anchor_link::AnchorLink;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <h1 class="hero__title">"Handmade cakes for every occasion"</h1>
                <p class="hero__subtitle">"Birthdays, weddings and custom creations, baked fresh."</p>
                <AnchorLink href="#cakes" class="button button--primary">"View Cakes"</AnchorLink>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="section-title">"About Us"</h2>
            <p>
                "Every cake is made by hand with quality ingredients. "
                "Tell us what you are celebrating and we will bake it for you."
            </p>
        </section>
    }
}
