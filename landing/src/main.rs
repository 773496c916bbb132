// ElectroTools Landing Page - Leptos 0.8 CSR

mod content;
mod controller;
mod dom;
mod logging;
mod map;
mod reveal;
mod sections;

use electrotools_core::{Page, SiteConfig};
use leptos::prelude::*;
use sections::*;

use controller::PageContext;

/// Behaviour settings, baked in at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::load_or_default(SITE_TOML);
    let hrefs = content::NAV_LINKS.iter().map(|link| link.href());
    let ctx = PageContext::new(Page::new(config, hrefs, content::TESTIMONIALS.len()));
    provide_context(ctx);

    // Wire listeners, timers and widgets once the DOM exists
    Effect::new(move || ctx.wire());

    view! {
        <Header />
        <main>
            <Hero />
            <Products />
            <About />
            <Portfolio />
            <Stats />
            <Testimonials />
            <Contact />
            <Location />
        </main>
        <Footer />
        <Lightbox />
    }
}
