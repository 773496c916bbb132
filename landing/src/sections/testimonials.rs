use electrotools_core::PageEvent;
use leptos::prelude::*;

use crate::content::{TESTIMONIALS, section};
use crate::controller::PageContext;

/// Testimonial cards with prev/next buttons and one selector dot per card.
#[component]
pub fn Testimonials() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.page;

    let card_active = move |i: usize| page.with(|p| p.carousel().is_some_and(|c| c.is_card_active(i)));
    let dot_active = move |i: usize| page.with(|p| p.carousel().is_some_and(|c| c.is_dot_active(i)));

    view! {
        <section id=section::TESTIMONIALS class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Our Customers Say"</h2>
                </div>
                <div class="testimonial-slider">
                    {TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                        view! {
                            <blockquote class=move || if card_active(i) { "testimonial-card active" } else { "testimonial-card" }>
                                <p class="testimonial-quote">{t.quote}</p>
                                <footer class="testimonial-author">
                                    <strong>{t.author}</strong>
                                    <span>{t.role}</span>
                                </footer>
                            </blockquote>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <div class="testimonial-controls">
                    <button class="prev-btn" aria-label="Previous testimonial" on:click=move |_| ctx.dispatch(PageEvent::CarouselPrev)>
                        <i class="fa-solid fa-chevron-left"></i>
                    </button>
                    <div class="testimonial-dots">
                        {(0..TESTIMONIALS.len()).map(|i| {
                            view! {
                                <span
                                    class=move || if dot_active(i) { "dot active" } else { "dot" }
                                    data-index=i.to_string()
                                    on:click=move |_| ctx.dispatch(PageEvent::IndicatorSelected(i))
                                ></span>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                    <button class="next-btn" aria-label="Next testimonial" on:click=move |_| ctx.dispatch(PageEvent::CarouselNext)>
                        <i class="fa-solid fa-chevron-right"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}
