use leptos::prelude::*;

use crate::content::{CATEGORIES, section};

#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id=section::PRODUCTS class="products">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Product Categories"</h2>
                    <p class="section-description">"Tools and supplies for every stage of the job."</p>
                </div>
                <div class="category-grid">
                    {CATEGORIES.iter().map(|category| {
                        view! {
                            <article class="category-card">
                                <div class="category-icon"><i class=category.icon></i></div>
                                <h3>{category.title}</h3>
                                <p>{category.description}</p>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
