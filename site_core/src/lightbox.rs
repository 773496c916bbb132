//! Full-screen image overlay for the gallery.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lightbox {
    image: Option<String>,
}

impl Lightbox {
    pub fn open(&mut self, src: impl Into<String>) {
        self.image = Some(src.into());
    }

    pub fn close(&mut self) {
        self.image = None;
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    /// Source of the displayed image, if open.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
