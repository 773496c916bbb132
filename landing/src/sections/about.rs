use leptos::prelude::*;

use crate::content::{FEATURES, section};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=section::ABOUT class="about">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Why ElectroTools"</h2>
                    <p class="section-description">
                        "Run by electricians for electricians. We stock what we would use ourselves."
                    </p>
                </div>
                <div class="feature-grid">
                    {FEATURES.iter().map(|feature| {
                        view! {
                            <article class="feature-card">
                                <div class="feature-icon"><i class=feature.icon></i></div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
