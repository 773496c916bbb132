use electrotools_core::PageEvent;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::content::{NAV_LINKS, section};
use crate::controller::PageContext;
use crate::dom;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.page;

    let menu = move || page.with(|p| p.menu().presentation());
    let header_style = move || {
        let state = page.with(|p| p.header());
        format!(
            "background-color: {}; box-shadow: {};",
            state.background(),
            state.box_shadow()
        )
    };

    // Lock body scrolling while the mobile menu covers the page; only the
    // lock flag is tracked, not the whole page
    let lock_body = Memo::new(move |_| page.with(|p| p.menu().presentation().lock_body_scroll));
    Effect::new(move || dom::lock_body_scroll(lock_body.get()));

    view! {
        <header id=dom::HEADER_ID class="header" style=header_style>
            <div class="container header-inner">
                <a href=format!("#{}", section::HOME) class="logo">
                    <i class="fa-solid fa-bolt"></i>
                    <span>"Electro"<strong>"Tools"</strong></span>
                </a>
                <button
                    class="mobile-nav-toggle"
                    aria-controls="primary-nav"
                    aria-expanded=move || menu().aria_expanded.to_string()
                    on:click=move |_| ctx.dispatch(PageEvent::MenuToggled)
                >
                    <span class="sr-only">"Menu"</span>
                    <i
                        class="fa-solid fa-bars"
                        style:display=move || if menu().show_bars_icon { "block" } else { "none" }
                    ></i>
                    <i
                        class="fa-solid fa-xmark"
                        style:display=move || if menu().show_close_icon { "block" } else { "none" }
                    ></i>
                </button>
                <nav>
                    <ul
                        id="primary-nav"
                        class="primary-nav"
                        data-visible=move || menu().data_visible.to_string()
                    >
                        {NAV_LINKS.iter().map(|link| {
                            let href = link.href();
                            let target = href.clone();
                            let on_click = move |ev: MouseEvent| {
                                ev.prevent_default();
                                ctx.dispatch(PageEvent::NavLinkClicked {
                                    href: target.clone(),
                                    section_top: dom::section_top(&target),
                                    header_height: dom::header_height(),
                                });
                            };
                            let active = href.clone();
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class=move || if page.with(|p| p.links().is_active(&active)) { "nav-link active" } else { "nav-link" }
                                        on:click=on_click
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
