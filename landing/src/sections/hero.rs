use leptos::prelude::*;

use crate::content::section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=section::HOME class="hero">
            <div class="container">
                <div class="hero-content">
                    <p class="hero-eyebrow">"Trade supplier since 1999"</p>
                    <h1 class="hero-title">
                        "Professional electrical tools,"
                        <br />
                        <span class="hero-title-accent">"on site when you need them."</span>
                    </h1>
                    <p class="hero-description">
                        "Everything from insulated hand tools to full test rigs, stocked locally "
                        "and delivered next day to contractors across the region."
                    </p>
                    <div class="hero-actions">
                        <a href="#products" class="btn btn-primary">"Browse Products"</a>
                        <a href="#contact" class="btn btn-secondary">"Request a Quote"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
