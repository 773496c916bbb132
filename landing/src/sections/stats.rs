use leptos::prelude::*;

use crate::content::{STATS, section};

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section id=section::STATS class="stats">
            <div class="container stats-grid">
                {STATS.iter().map(|stat| {
                    view! {
                        <div class="stat">
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
