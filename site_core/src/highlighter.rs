//! Scroll-driven active-section highlighting.
//!
//! Section layout is read from the live page on every scroll tick and never
//! cached; responsive reflow moves sections around.

/// Live layout of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Everything one scroll tick needs, captured from the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub header_height: f64,
    pub sections: Vec<SectionBounds>,
}

/// Decides which section is "current" for a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollHighlighter {
    lookahead: f64,
}

impl Default for ScrollHighlighter {
    fn default() -> Self {
        Self { lookahead: 100.0 }
    }
}

impl ScrollHighlighter {
    pub fn new(lookahead: f64) -> Self {
        Self { lookahead }
    }

    /// The section whose shifted `[top, bottom)` range contains `scroll_y`.
    ///
    /// Each range is moved up by the header height plus the lookahead. When
    /// ranges overlap the last section in document order wins.
    pub fn current_section<'a>(
        &self,
        scroll_y: f64,
        header_height: f64,
        sections: &'a [SectionBounds],
    ) -> Option<&'a str> {
        sections
            .iter()
            .rev()
            .find(|section| {
                let top = section.top - header_height - self.lookahead;
                let bottom = top + section.height;
                scroll_y >= top && scroll_y < bottom
            })
            .map(|section| section.id.as_str())
    }
}

/// Active state of the navigation links.
///
/// Hrefs are captured once when the page mounts; at most one link is
/// active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavLinks {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl NavLinks {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hrefs: hrefs.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active_href() == Some(href)
    }

    pub fn active_href(&self) -> Option<&str> {
        self.active.map(|i| self.hrefs[i].as_str())
    }

    /// Clear every link, then activate the one pointing at `#section_id`.
    pub fn highlight_section(&mut self, section_id: Option<&str>) {
        self.active = section_id.and_then(|id| {
            self.hrefs
                .iter()
                .position(|href| href.strip_prefix('#') == Some(id))
        });
    }

    /// Activate a link by its href (used on click).
    pub fn activate(&mut self, href: &str) {
        self.active = self.hrefs.iter().position(|h| h == href);
    }

    /// Full recompute for one scroll tick.
    pub fn refresh(&mut self, highlighter: &ScrollHighlighter, snapshot: &ScrollSnapshot) {
        let current = highlighter.current_section(
            snapshot.scroll_y,
            snapshot.header_height,
            &snapshot.sections,
        );
        self.highlight_section(current);
    }
}
