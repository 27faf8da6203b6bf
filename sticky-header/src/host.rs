use crate::VisibleItem;

/// What the engine needs from the host list for a draw pass.
pub trait HostList {
    /// Total number of items in the current data set.
    fn item_count(&self) -> usize;

    /// Current list width in pixels.
    fn width(&self) -> u32;

    /// Enumerates realized items in top-to-bottom order.
    fn for_each_visible_item(&self, f: &mut dyn FnMut(VisibleItem));
}

/// A borrowed, ready-made [`HostList`] for hosts that already hold their visible window in a
/// slice.
#[derive(Clone, Copy, Debug)]
pub struct ListFrame<'a> {
    pub count: usize,
    pub width: u32,
    pub items: &'a [VisibleItem],
}

impl<'a> ListFrame<'a> {
    pub fn new(count: usize, width: u32, items: &'a [VisibleItem]) -> Self {
        Self {
            count,
            width,
            items,
        }
    }
}

impl HostList for ListFrame<'_> {
    fn item_count(&self) -> usize {
        self.count
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn for_each_visible_item(&self, f: &mut dyn FnMut(VisibleItem)) {
        for &item in self.items {
            f(item);
        }
    }
}
