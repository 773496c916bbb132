use leptos::prelude::*;

use crate::content::NAV_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <i class="fa-solid fa-bolt"></i>
                    <span class="footer-title">"ElectroTools"</span>
                </div>
                <div class="footer-links">
                    {NAV_LINKS.iter().map(|link| {
                        view! { <a href=link.href() class="footer-link">{link.label}</a> }
                    }).collect::<Vec<_>>()}
                </div>
                <p class="footer-copyright">"(c) 2025 ElectroTools. All rights reserved."</p>
            </div>
        </footer>
    }
}
