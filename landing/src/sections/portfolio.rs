use electrotools_core::PageEvent;
use leptos::prelude::*;

use crate::content::{PROJECTS, section};
use crate::controller::PageContext;

/// Project gallery; clicking an image opens it in the lightbox.
#[component]
pub fn Portfolio() -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <section id=section::PORTFOLIO class="portfolio">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Recent Projects"</h2>
                    <p class="section-description">"Jobs our customers completed with kit from our shelves."</p>
                </div>
                <div class="gallery">
                    {PROJECTS.iter().map(|project| {
                        let src = project.image;
                        view! {
                            <figure class="portfolio-item">
                                <img
                                    src=src
                                    alt=project.title
                                    loading="lazy"
                                    on:click=move |_| ctx.dispatch(PageEvent::GalleryImageClicked { src: src.to_string() })
                                />
                                <figcaption>
                                    <span class="portfolio-category">{project.category}</span>
                                    <h3>{project.title}</h3>
                                </figcaption>
                            </figure>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
