use electrotools_core::PageEvent;
use leptos::prelude::*;

use crate::controller::PageContext;

#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.page;

    view! {
        <div
            id="lightbox"
            class="lightbox"
            style:display=move || if page.with(|p| p.lightbox().is_open()) { "flex" } else { "none" }
            on:click=move |_| ctx.dispatch(PageEvent::LightboxClicked)
        >
            <img
                id="lightbox-img"
                alt=""
                src=move || page.with(|p| p.lightbox().image().unwrap_or_default().to_string())
            />
        </div>
    }
}
