//! The page controller.
//!
//! One [`Page`] exists per mounted page and owns every piece of interaction
//! state. The host turns browser events into [`PageEvent`]s, hands them to
//! [`Page::dispatch`], and performs the returned [`Effect`]s.

use std::time::Duration;

use crate::carousel::{Carousel, Visibility};
use crate::config::SiteConfig;
use crate::contact::{ContactForm, Field, SubmitOutcome, SubmitState};
use crate::header::HeaderState;
use crate::highlighter::{NavLinks, ScrollHighlighter, ScrollSnapshot};
use crate::lightbox::Lightbox;
use crate::navigation::{MobileNav, scroll_target};
use crate::reveal::{RevealMotion, RevealTracker};

/// Href of the nav link that brings the map into view.
pub const LOCATION_HREF: &str = "#location";

/// Everything the host may report.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    MenuToggled,
    /// A nav link was clicked. `section_top` is `None` when its target
    /// section is not on the page.
    NavLinkClicked {
        href: String,
        section_top: Option<f64>,
        header_height: f64,
    },
    Scrolled(ScrollSnapshot),
    CarouselPrev,
    CarouselNext,
    IndicatorSelected(usize),
    CarouselTick(Visibility),
    FieldEdited {
        field: Field,
        value: String,
    },
    FormSubmitted,
    /// A submit-sequence delay elapsed.
    SubmissionAdvanced,
    ElementIntersected(usize),
    GalleryImageClicked {
        src: String,
    },
    LightboxClicked,
    MapMounted,
}

/// Work the host performs after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Smooth-scroll the window.
    ScrollTo { top: f64 },
    /// Dispatch `event` once `after` has elapsed. Never cancelled.
    Schedule { after: Duration, event: PageEvent },
    /// Run the fade-in for an observed element after `after`, then stop
    /// observing it.
    Reveal { index: usize, after: Duration },
    /// Recompute the map widget's layout after `after`.
    RefreshMap { after: Duration },
}

/// Owned interaction state for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    config: SiteConfig,
    menu: MobileNav,
    links: NavLinks,
    highlighter: ScrollHighlighter,
    header: HeaderState,
    carousel: Option<Carousel>,
    form: ContactForm,
    reveal: RevealTracker,
    motion: RevealMotion,
    lightbox: Lightbox,
    has_map: bool,
}

impl Page {
    /// Build the controller for a page with the given nav link hrefs and
    /// testimonial count.
    pub fn new<I, S>(config: SiteConfig, nav_hrefs: I, testimonials: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let carousel = Carousel::new(testimonials);
        if carousel.is_none() {
            tracing::debug!("no testimonials, carousel disabled");
        }
        Self {
            highlighter: ScrollHighlighter::new(config.highlight.lookahead),
            motion: RevealMotion::from_config(&config.reveal),
            has_map: config.map.enabled,
            config,
            menu: MobileNav::default(),
            links: NavLinks::new(nav_hrefs),
            header: HeaderState::default(),
            carousel,
            form: ContactForm::default(),
            reveal: RevealTracker::default(),
            lightbox: Lightbox::default(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn menu(&self) -> &MobileNav {
        &self.menu
    }

    pub fn links(&self) -> &NavLinks {
        &self.links
    }

    pub fn header(&self) -> HeaderState {
        self.header
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn motion(&self) -> &RevealMotion {
        &self.motion
    }

    pub fn has_map(&self) -> bool {
        self.has_map
    }

    /// Submit button text for the current submit state.
    pub fn submit_label(&self) -> &str {
        self.form.button_label(&self.config.contact.submit_label)
    }

    /// Register the elements the reveal observer watches.
    pub fn observe_reveals(&mut self, count: usize) {
        self.reveal.resize(count);
    }

    /// The map widget could not be created; stop asking for refreshes.
    pub fn disable_map(&mut self) {
        self.has_map = false;
    }

    /// Apply one event and return the effects it requires.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            PageEvent::MenuToggled => self.menu.toggle(),
            PageEvent::NavLinkClicked {
                href,
                section_top,
                header_height,
            } => {
                if href == LOCATION_HREF && self.has_map {
                    effects.push(Effect::RefreshMap {
                        after: self.config.map.refresh_after_nav(),
                    });
                }
                if let Some(top) = section_top {
                    self.menu.close();
                    effects.push(Effect::ScrollTo {
                        top: scroll_target(top, header_height),
                    });
                    self.links.activate(&href);
                } else {
                    tracing::debug!(%href, "nav target missing, ignoring click");
                }
            }
            PageEvent::Scrolled(snapshot) => {
                self.links.refresh(&self.highlighter, &snapshot);
                self.header =
                    HeaderState::for_scroll(snapshot.scroll_y, self.config.header.scroll_threshold);
            }
            PageEvent::CarouselPrev => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.prev();
                }
            }
            PageEvent::CarouselNext => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.next();
                }
            }
            PageEvent::IndicatorSelected(index) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    if let Err(e) = carousel.goto_indicator(index) {
                        tracing::warn!("{e}");
                    }
                }
            }
            PageEvent::CarouselTick(visibility) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.tick(visibility);
                }
            }
            PageEvent::FieldEdited { field, value } => self.form.edit(field, value),
            PageEvent::FormSubmitted => match self.form.submit() {
                SubmitOutcome::Started => effects.push(Effect::Schedule {
                    after: self.config.contact.sending(),
                    event: PageEvent::SubmissionAdvanced,
                }),
                SubmitOutcome::Blocked => {
                    tracing::debug!("contact form blocked by validation");
                }
                SubmitOutcome::InFlight => {}
            },
            PageEvent::SubmissionAdvanced => {
                if let Some(SubmitState::Sent) = self.form.advance() {
                    effects.push(Effect::Schedule {
                        after: self.config.contact.sent(),
                        event: PageEvent::SubmissionAdvanced,
                    });
                }
            }
            PageEvent::ElementIntersected(index) => {
                if self.reveal.intersect(index) {
                    effects.push(Effect::Reveal {
                        index,
                        after: self.motion.delay,
                    });
                }
            }
            PageEvent::GalleryImageClicked { src } => self.lightbox.open(src),
            PageEvent::LightboxClicked => self.lightbox.close(),
            PageEvent::MapMounted => {
                if self.has_map {
                    effects.push(Effect::RefreshMap {
                        after: self.config.map.refresh_after_mount(),
                    });
                }
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlighter::SectionBounds;
    use pretty_assertions::assert_eq;

    fn page(testimonials: usize) -> Page {
        Page::new(
            SiteConfig::default(),
            ["#home", "#products", "#location"],
            testimonials,
        )
    }

    #[test]
    fn nav_click_scrolls_closes_menu_and_activates() {
        let mut p = page(3);
        p.dispatch(PageEvent::MenuToggled);
        assert!(p.menu().is_open());

        let effects = p.dispatch(PageEvent::NavLinkClicked {
            href: "#products".into(),
            section_top: Some(900.0),
            header_height: 80.0,
        });
        assert_eq!(effects, vec![Effect::ScrollTo { top: 820.0 }]);
        assert!(!p.menu().is_open());
        assert_eq!(p.links().active_href(), Some("#products"));
    }

    #[test]
    fn nav_click_without_section_is_noop() {
        let mut p = page(3);
        p.dispatch(PageEvent::MenuToggled);
        let effects = p.dispatch(PageEvent::NavLinkClicked {
            href: "#products".into(),
            section_top: None,
            header_height: 80.0,
        });
        assert!(effects.is_empty());
        assert!(p.menu().is_open());
        assert_eq!(p.links().active_href(), None);
    }

    #[test]
    fn location_click_refreshes_map() {
        let mut p = page(0);
        let effects = p.dispatch(PageEvent::NavLinkClicked {
            href: LOCATION_HREF.into(),
            section_top: Some(2000.0),
            header_height: 0.0,
        });
        assert_eq!(
            effects,
            vec![
                Effect::RefreshMap {
                    after: Duration::from_millis(400)
                },
                Effect::ScrollTo { top: 2000.0 },
            ]
        );

        p.disable_map();
        let effects = p.dispatch(PageEvent::NavLinkClicked {
            href: LOCATION_HREF.into(),
            section_top: Some(2000.0),
            header_height: 0.0,
        });
        assert_eq!(effects, vec![Effect::ScrollTo { top: 2000.0 }]);
    }

    #[test]
    fn scroll_updates_links_and_header() {
        let mut p = page(0);
        p.dispatch(PageEvent::Scrolled(ScrollSnapshot {
            scroll_y: 150.0,
            header_height: 0.0,
            sections: vec![
                SectionBounds::new("home", 0.0, 400.0),
                SectionBounds::new("products", 400.0, 400.0),
            ],
        }));
        assert_eq!(p.links().active_href(), Some("#home"));
        assert_eq!(p.header(), HeaderState::Scrolled);
    }

    #[test]
    fn carousel_events_without_testimonials_are_noops() {
        let mut p = page(0);
        assert!(p.carousel().is_none());
        for ev in [
            PageEvent::CarouselNext,
            PageEvent::CarouselPrev,
            PageEvent::IndicatorSelected(0),
            PageEvent::CarouselTick(Visibility::Visible),
        ] {
            assert!(p.dispatch(ev).is_empty());
        }
    }

    #[test]
    fn stale_indicator_is_ignored() {
        let mut p = page(2);
        p.dispatch(PageEvent::IndicatorSelected(1));
        p.dispatch(PageEvent::IndicatorSelected(9));
        assert_eq!(p.carousel().map(Carousel::current), Some(1));
    }

    #[test]
    fn reveal_fires_once() {
        let mut p = page(0);
        p.observe_reveals(2);
        let first = p.dispatch(PageEvent::ElementIntersected(1));
        assert_eq!(
            first,
            vec![Effect::Reveal {
                index: 1,
                after: Duration::from_millis(100)
            }]
        );
        assert!(p.dispatch(PageEvent::ElementIntersected(1)).is_empty());
    }

    #[test]
    fn reveal_delay_follows_config() {
        let mut config = SiteConfig::default();
        config.reveal.delay_ms = 250;
        let mut p = Page::new(config, ["#home"], 0);
        p.observe_reveals(1);
        assert_eq!(
            p.dispatch(PageEvent::ElementIntersected(0)),
            vec![Effect::Reveal {
                index: 0,
                after: Duration::from_millis(250)
            }]
        );
    }

    #[test]
    fn scroll_and_ticks_leave_menu_presentation_alone() {
        let mut p = page(3);
        p.dispatch(PageEvent::MenuToggled);
        let open = p.menu().presentation();
        assert!(open.lock_body_scroll);

        p.dispatch(PageEvent::Scrolled(ScrollSnapshot {
            scroll_y: 500.0,
            header_height: 80.0,
            sections: vec![SectionBounds::new("home", 0.0, 400.0)],
        }));
        p.dispatch(PageEvent::CarouselTick(Visibility::Visible));
        assert_eq!(p.menu().presentation(), open);

        p.dispatch(PageEvent::MenuToggled);
        assert!(!p.menu().presentation().lock_body_scroll);
    }

    #[test]
    fn lightbox_open_close() {
        let mut p = page(0);
        p.dispatch(PageEvent::GalleryImageClicked {
            src: "img/panel.jpg".into(),
        });
        assert_eq!(p.lightbox().image(), Some("img/panel.jpg"));
        p.dispatch(PageEvent::LightboxClicked);
        assert!(!p.lightbox().is_open());
    }

    #[test]
    fn map_mount_refresh_respects_config() {
        let mut p = page(0);
        assert_eq!(
            p.dispatch(PageEvent::MapMounted),
            vec![Effect::RefreshMap {
                after: Duration::from_millis(100)
            }]
        );

        let mut config = SiteConfig::default();
        config.map.enabled = false;
        let mut p = Page::new(config, ["#home"], 0);
        assert!(p.dispatch(PageEvent::MapMounted).is_empty());
    }
}
