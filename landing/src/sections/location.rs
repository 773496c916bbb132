use leptos::prelude::*;

use crate::content::section;

use crate::controller::PageContext;
use crate::map::MAP_CONTAINER_ID;

#[component]
pub fn Location() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let map = ctx.page.with_untracked(|p| p.config().map.clone());
    let enabled = map.enabled;
    let address = format!("{} - {}", map.business_name, map.address_lines.join(", "));

    view! {
        <section id=section::LOCATION class="location">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Visit Our Store"</h2>
                    <p class="section-description">
                        {address}
                    </p>
                </div>
                <Show when=move || enabled>
                    <div id=MAP_CONTAINER_ID class="map-container"></div>
                </Show>
            </div>
        </section>
    }
}
