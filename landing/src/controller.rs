//! Bridges browser events to the [`Page`] controller and carries out the
//! effects it returns.

use electrotools_core::{Effect, Page, PageEvent};
use leptos::prelude::*;
use web_sys::IntersectionObserver;

use crate::map::SiteMap;
use crate::{dom, map, reveal};

/// Handle to the page's interaction state, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub page: RwSignal<Page>,
    map: StoredValue<Option<SiteMap>, LocalStorage>,
    observer: StoredValue<Option<IntersectionObserver>, LocalStorage>,
}

impl PageContext {
    pub fn new(page: Page) -> Self {
        Self {
            page: RwSignal::new(page),
            map: StoredValue::new_local(None),
            observer: StoredValue::new_local(None),
        }
    }

    /// Feed one event to the controller and perform the resulting effects.
    pub fn dispatch(self, event: PageEvent) {
        let mut effects = Vec::new();
        self.page.update(|page| effects = page.dispatch(event));
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self, effect: Effect) {
        match effect {
            Effect::ScrollTo { top } => dom::smooth_scroll_to(top),
            Effect::Schedule { after, event } => {
                set_timeout(move || self.dispatch(event), after);
            }
            Effect::Reveal { index, after } => {
                let start = self.page.with_untracked(|page| page.motion().start_transform());
                self.observer
                    .with_value(|observer| reveal::run(observer.as_ref(), index, &start, after));
            }
            Effect::RefreshMap { after } => {
                let handle = self.map;
                set_timeout(
                    move || {
                        handle.with_value(|map| {
                            if let Some(map) = map {
                                map.refresh();
                            }
                        })
                    },
                    after,
                );
            }
        }
    }

    /// One-time wiring after the view is mounted: window listeners, the
    /// auto-advance timer, the reveal observer and the map.
    pub fn wire(self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        dom::listen(&window, "scroll", move |_: web_sys::Event| {
            self.dispatch(PageEvent::Scrolled(dom::scroll_snapshot()));
        });
        // Initial highlight before the first scroll.
        self.dispatch(PageEvent::Scrolled(dom::scroll_snapshot()));

        let config = self.page.with_untracked(|page| page.config().clone());

        if self.page.with_untracked(|page| page.carousel().is_some()) {
            set_interval(
                move || self.dispatch(PageEvent::CarouselTick(dom::visibility())),
                config.carousel.interval(),
            );
        }

        if let Some(observer) = reveal::observe(self, &config.reveal) {
            self.observer.set_value(Some(observer));
        }

        self.mount_map();
    }

    fn mount_map(self) {
        let config = self.page.with_untracked(|page| {
            page.has_map().then(|| page.config().map.clone())
        });
        let Some(config) = config else {
            return;
        };
        if dom::html_element(&format!("#{}", map::MAP_CONTAINER_ID)).is_none() {
            self.page.update(Page::disable_map);
            return;
        }
        match SiteMap::mount(&config) {
            Ok(site_map) => {
                self.map.set_value(Some(site_map));
                self.dispatch(PageEvent::MapMounted);
            }
            Err(e) => {
                tracing::warn!("map disabled: {e:?}");
                self.page.update(Page::disable_map);
            }
        }
    }
}
