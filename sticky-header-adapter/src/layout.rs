use alloc::sync::Arc;
use alloc::vec::Vec;

use sticky_header::{HostList, VisibleItem};

/// A minimal vertical list host: lays items out lazily, top to bottom, and realizes only the
/// window intersecting the viewport.
///
/// Every item occupies `top_inset(index) + item_size(index)` pixels of content; the inset is the
/// header strip reserved above it. Positions are cached until [`Self::invalidate`], so each
/// item's inset is requested once per data epoch, during the layout pass that first reaches it.
#[derive(Clone)]
pub struct ListLayout {
    count: usize,
    item_size: Arc<dyn Fn(usize) -> u32 + Send + Sync>,
    width: u32,
    height: u32,
    scroll_offset: u64,
    trailing_inset: u32,
    insets: Vec<u32>,
    ends: Vec<u64>, // content end of every laid-out item (inset included)
    visible: Vec<VisibleItem>,
}

impl ListLayout {
    pub fn new(count: usize, item_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            count,
            item_size: Arc::new(item_size),
            width: 0,
            height: 0,
            scroll_offset: 0,
            trailing_inset: 0,
            insets: Vec::new(),
            ends: Vec::new(),
            visible: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.invalidate();
    }

    pub fn set_item_size(&mut self, item_size: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.item_size = Arc::new(item_size);
        self.invalidate();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Sets the scroll offset. It is clamped on the next layout pass, once the end of the list
    /// has been laid out.
    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }

    /// Space reserved below the last item (e.g. an end-of-list footer).
    pub fn trailing_inset(&self) -> u32 {
        self.trailing_inset
    }

    pub fn set_trailing_inset(&mut self, amount: u32) {
        self.trailing_inset = amount;
    }

    /// Forgets every laid-out position. Call after any data mutation.
    pub fn invalidate(&mut self) {
        self.insets.clear();
        self.ends.clear();
        self.visible.clear();
    }

    /// Number of items whose position is currently known.
    pub fn laid_out_len(&self) -> usize {
        self.ends.len()
    }

    /// Total content size, once every item has been laid out.
    pub fn content_size(&self) -> Option<u64> {
        (self.ends.len() == self.count).then(|| {
            self.laid_out_end()
                .saturating_add(self.trailing_inset as u64)
        })
    }

    pub fn max_scroll_offset(&self) -> Option<u64> {
        self.content_size()
            .map(|total| total.saturating_sub(self.height as u64))
    }

    /// The window realized by the last layout pass, top to bottom.
    pub fn visible_items(&self) -> &[VisibleItem] {
        &self.visible
    }

    /// Lays out items until the viewport is covered and rebuilds the visible window.
    ///
    /// `top_inset(index, width)` is asked for the header spacing of each item the first time it
    /// is laid out.
    pub fn relayout(&mut self, mut top_inset: impl FnMut(usize, u32) -> u32) {
        self.visible.clear();
        if self.count == 0 || self.height == 0 {
            return;
        }

        let view = self.height as u64;
        while self.ends.len() < self.count
            && self.laid_out_end() < self.scroll_offset.saturating_add(view)
        {
            let index = self.ends.len();
            let inset = top_inset(index, self.width);
            let size = (self.item_size)(index);
            let end = self
                .laid_out_end()
                .saturating_add(inset as u64)
                .saturating_add(size as u64);
            self.insets.push(inset);
            self.ends.push(end);
        }

        if let Some(max) = self.max_scroll_offset() {
            if self.scroll_offset > max {
                atrace!(from = self.scroll_offset, to = max, "relayout: clamp scroll");
                self.scroll_offset = max;
            }
        }

        let scroll = self.scroll_offset;
        let viewport_end = scroll.saturating_add(view);
        let first = self.ends.partition_point(|&end| end <= scroll);
        for index in first..self.ends.len() {
            let start = if index == 0 { 0 } else { self.ends[index - 1] };
            if start >= viewport_end {
                break;
            }
            let content_start = start.saturating_add(self.insets[index] as u64);
            self.visible.push(VisibleItem {
                index,
                top: to_viewport(content_start, scroll),
                bottom: to_viewport(self.ends[index], scroll),
            });
        }
    }

    fn laid_out_end(&self) -> u64 {
        self.ends.last().copied().unwrap_or(0)
    }
}

fn to_viewport(pos: u64, scroll: u64) -> i32 {
    let delta = pos as i128 - scroll as i128;
    delta.clamp(i32::MIN as i128, i32::MAX as i128) as i32
}

impl HostList for ListLayout {
    fn item_count(&self) -> usize {
        self.count
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn for_each_visible_item(&self, f: &mut dyn FnMut(VisibleItem)) {
        for &item in &self.visible {
            f(item);
        }
    }
}

impl core::fmt::Debug for ListLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListLayout")
            .field("count", &self.count)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("scroll_offset", &self.scroll_offset)
            .field("trailing_inset", &self.trailing_inset)
            .field("laid_out", &self.ends.len())
            .finish_non_exhaustive()
    }
}
