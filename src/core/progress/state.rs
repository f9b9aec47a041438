//! Frame state for the progress indicator.
//!
//! Pure data: the animation task in [`super::indicator`] drives it, but the
//! label and wraparound rules live here so they can be tested without a
//! runtime.

/// Glyphs cycled by the indicator, in order.
pub const GLYPHS: &[&str] = &["\u{1F30D}", "\u{1F30E}", "\u{1F30F}"]; // 🌍 🌎 🌏

/// Static caption shown next to the glyph.
pub const CAPTION: &str = "Generating i18n translation schema";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    glyphs: &'static [&'static str],
    caption: &'static str,
    frame_index: usize,
    detail: Option<String>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(GLYPHS, CAPTION)
    }
}

impl ProgressState {
    /// An empty `glyphs` list renders the caption alone.
    pub fn new(glyphs: &'static [&'static str], caption: &'static str) -> Self {
        Self {
            glyphs,
            caption,
            frame_index: 0,
            detail: None,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Replace the detail message. An empty message clears it.
    pub fn set_detail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.detail = if message.is_empty() {
            None
        } else {
            Some(message)
        };
    }

    pub fn clear_detail(&mut self) {
        self.detail = None;
    }

    /// Label for the current frame.
    pub fn label(&self) -> String {
        let text = match &self.detail {
            Some(detail) => format!("{}: {}", self.caption, detail),
            None => format!("{}...", self.caption),
        };
        match self.glyphs.get(self.frame_index) {
            Some(glyph) => format!("{} {}", glyph, text),
            None => text,
        }
    }

    /// Render the current frame, then move to the next glyph.
    pub fn tick(&mut self) -> String {
        let label = self.label();
        self.frame_index = (self.frame_index + 1)
            .checked_rem(self.glyphs.len())
            .unwrap_or(0);
        label
    }

    /// Back to frame 0 with no detail.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.detail = None;
    }
}
