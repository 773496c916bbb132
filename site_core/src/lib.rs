//! # electrotools-core
//!
//! Interaction state for the ElectroTools landing page.
//!
//! Everything here is plain data and runs on the host. The `landing` crate
//! renders the page with Leptos, reads layout from the DOM, and feeds
//! browser events into a single [`Page`] controller.
//!
//! ## Quick Start
//!
//! ```rust
//! use electrotools_core::{Page, PageEvent, SiteConfig, Visibility};
//!
//! let mut page = Page::new(SiteConfig::default(), ["#home", "#contact"], 3);
//!
//! page.dispatch(PageEvent::CarouselTick(Visibility::Visible));
//! assert_eq!(page.carousel().map(|c| c.current()), Some(1));
//!
//! // Hidden tabs do not advance.
//! page.dispatch(PageEvent::CarouselTick(Visibility::Hidden));
//! assert_eq!(page.carousel().map(|c| c.current()), Some(1));
//! ```
//!
//! ## Modules
//!
//! - [`carousel`] - testimonial index with card/dot markers
//! - [`highlighter`] - active nav link from scroll position
//! - [`navigation`] - mobile menu and section scroll targets
//! - [`header`] - header backdrop on scroll
//! - [`contact`] - form validation and the submit sequence
//! - [`reveal`] - once-only fade-in bookkeeping
//! - [`lightbox`] - gallery overlay
//! - [`page`] - the owning controller and its event/effect surface
//! - [`config`] - `site.toml` loading

pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod header;
pub mod highlighter;
pub mod lightbox;
pub mod navigation;
pub mod page;
pub mod reveal;

pub use carousel::{Carousel, Visibility};
pub use config::SiteConfig;
pub use contact::{ContactForm, Field, FieldError, SubmitState};
pub use error::{ConfigError, SiteError};
pub use header::HeaderState;
pub use highlighter::{NavLinks, ScrollHighlighter, ScrollSnapshot, SectionBounds};
pub use page::{Effect, Page, PageEvent};
