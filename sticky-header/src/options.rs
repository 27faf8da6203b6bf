/// Configuration for [`crate::StickyDecoration`].
///
/// Plain data: clone it, tweak a few fields and hand it back through
/// `StickyDecoration::set_options` or `update_options`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyOptions {
    /// Enables/disables the decoration. When disabled, no spacing is reserved, nothing is drawn
    /// and the touch exclusion region stays empty.
    pub enabled: bool,

    /// Whether the engine publishes a touch exclusion region for the pinned header.
    ///
    /// Turn this off for hosts that cannot intercept pointer events; the pinned header is still
    /// drawn.
    pub intercept_touches: bool,

    /// Keeps the last pinned header on screen when the visible window contains no
    /// header-owning item (e.g. the tail of the last group).
    pub retain_last_header: bool,
}

impl StickyOptions {
    pub fn new() -> Self {
        Self {
            enabled: true,
            intercept_touches: true,
            retain_last_header: true,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_intercept_touches(mut self, intercept_touches: bool) -> Self {
        self.intercept_touches = intercept_touches;
        self
    }

    pub fn with_retain_last_header(mut self, retain_last_header: bool) -> Self {
        self.retain_last_header = retain_last_header;
        self
    }
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self::new()
    }
}
