/// An axis-aligned rectangle in list coordinates (pixels, y grows downwards).
///
/// Follows half-open semantics: a point is inside when `left <= x < right` and
/// `top <= y < bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A band anchored at the top-left corner of the list.
    pub fn top_band(width: u32, height: u32) -> Self {
        Self::new(0, 0, clamp_i32(width), clamp_i32(height))
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty() && x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// A realized list item, as positioned by the host for the current frame.
///
/// `top`/`bottom` are the item's own bounds relative to the viewport top, excluding the
/// reserved header inset above it. Items scrolled under the viewport top have a negative `top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem {
    pub index: usize,
    pub top: i32,
    pub bottom: i32,
}

impl VisibleItem {
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }
}

/// Where the pinned header of a frame came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinSource {
    /// The inline header owned by the item at this index reached the viewport top.
    Inline(usize),
    /// The provider's hover lookup for this index (the previous group's header).
    Hover(usize),
    /// No header-owning item was visible; the last pinned header was kept.
    Retained,
}

/// The pinned header drawn in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinnedHeader {
    pub source: PinSource,
    pub height: u32,
    /// How far the header is pushed above the viewport top by the next group (handoff).
    pub offset: u32,
}

impl PinnedHeader {
    /// Height of the part of the header that is still on screen.
    pub fn visible_height(&self) -> u32 {
        self.height.saturating_sub(self.offset)
    }
}

/// Summary of one `render_overlay` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayFrame {
    /// Number of inline header strips drawn above their items.
    pub inline_headers: usize,
    pub pinned: Option<PinnedHeader>,
    /// Touch exclusion region in effect after the pass.
    pub exclusion: Rect,
}

pub(crate) fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
