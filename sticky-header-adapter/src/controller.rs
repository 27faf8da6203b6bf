use sticky_header::{
    HeaderCanvas, OverlayFrame, StickyDecoration, StickyHeaderProvider, StickyOptions,
};

use crate::{DataChange, Dispatch, ListLayout, PointerEvent, TouchGate, trailing_inset_for};

/// A framework-neutral controller that wires a [`StickyDecoration`] to a [`ListLayout`] host.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport` / `on_scroll` / `scroll_by` when UI events occur
/// - `on_data_change` whenever the row source mutates
/// - `frame(canvas)` once per frame (layout pass, then overlay)
/// - `dispatch_pointer` for every pointer event, before the list sees it
pub struct StickyList<P: StickyHeaderProvider> {
    decoration: StickyDecoration<P>,
    layout: ListLayout,
    gate: TouchGate,
    footer_height: u32,
}

impl<P: StickyHeaderProvider> StickyList<P> {
    pub fn new(
        provider: P,
        count: usize,
        item_size: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        Self::from_parts(
            StickyDecoration::new(provider),
            ListLayout::new(count, item_size),
        )
    }

    pub fn with_options(
        provider: P,
        options: StickyOptions,
        count: usize,
        item_size: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        Self::from_parts(
            StickyDecoration::with_options(provider, options),
            ListLayout::new(count, item_size),
        )
    }

    pub fn from_parts(decoration: StickyDecoration<P>, layout: ListLayout) -> Self {
        Self {
            decoration,
            layout,
            gate: TouchGate::new(),
            footer_height: 0,
        }
    }

    /// Reserves `footer_height` below the last item whenever the list fills the viewport.
    pub fn with_footer_height(mut self, footer_height: u32) -> Self {
        self.footer_height = footer_height;
        self
    }

    pub fn decoration(&self) -> &StickyDecoration<P> {
        &self.decoration
    }

    /// Direct access to the engine. Toggle `enabled` through [`Self::set_options`] instead, so
    /// the layout drops the spacing it reserved.
    pub fn decoration_mut(&mut self) -> &mut StickyDecoration<P> {
        &mut self.decoration
    }

    pub fn layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn into_parts(self) -> (StickyDecoration<P>, ListLayout) {
        (self.decoration, self.layout)
    }

    pub fn footer_height(&self) -> u32 {
        self.footer_height
    }

    pub fn options(&self) -> &StickyOptions {
        self.decoration.options()
    }

    /// Applies new engine options. Toggling `enabled` changes every item's spacing, so the
    /// layout is rebuilt on the next frame.
    pub fn set_options(&mut self, options: StickyOptions) {
        if options.enabled != self.decoration.enabled() {
            adebug!(enabled = options.enabled, "set_options: relayout");
            self.layout.invalidate();
        }
        self.decoration.set_options(options);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut StickyOptions)) {
        let mut next = *self.decoration.options();
        f(&mut next);
        self.set_options(next);
    }

    /// Call this when the list's viewport is resized.
    ///
    /// A width change invalidates all cached header geometry, since header heights are measured
    /// against the width.
    pub fn on_viewport(&mut self, width: u32, height: u32) {
        if width != self.layout.width() {
            adebug!(from = self.layout.width(), to = width, "on_viewport: width changed");
            self.layout.invalidate();
            self.decoration.notify_data_invalidated();
        }
        self.layout.set_viewport(width, height);
    }

    pub fn on_scroll(&mut self, offset: u64) {
        self.layout.set_scroll_offset(offset);
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.layout.scroll_by(delta);
    }

    /// Call this for every mutation of the row source, before the next frame.
    pub fn on_data_change(&mut self, change: DataChange) {
        let count = change.apply(self.layout.count());
        adebug!(?change, count, "on_data_change");
        self.layout.set_count(count);
        self.decoration.notify_data_invalidated();
    }

    /// Runs the host layout pass: reserves header spacing for newly laid-out items, rebuilds the
    /// visible window and updates the trailing inset.
    pub fn layout_pass(&mut self) {
        let requested = self.layout.scroll_offset();
        let decoration = &mut self.decoration;
        self.layout
            .relayout(|index, width| decoration.top_inset(index, width));

        let visible = self.layout.visible_items();
        let Some(amount) = trailing_inset_for(
            visible,
            self.layout.count(),
            self.layout.height(),
            self.footer_height,
        ) else {
            return;
        };
        if amount == self.layout.trailing_inset() {
            return;
        }

        // The scroll was clamped against the previous inset; clamp the request again.
        atrace!(amount, requested, "layout_pass: trailing inset");
        self.layout.set_trailing_inset(amount);
        self.layout.set_scroll_offset(requested);
        let decoration = &mut self.decoration;
        self.layout
            .relayout(|index, width| decoration.top_inset(index, width));
    }

    /// Lays the list out and draws the sticky overlay for this frame.
    pub fn frame<C>(&mut self, canvas: &mut C) -> OverlayFrame
    where
        C: HeaderCanvas<P::View> + ?Sized,
    {
        self.layout_pass();
        self.decoration.render_overlay(&self.layout, canvas)
    }

    /// Routes a pointer event: events of a gesture that starts on the pinned header are swallowed.
    pub fn dispatch_pointer(&mut self, event: PointerEvent) -> Dispatch {
        self.gate
            .dispatch(self.decoration.touch_exclusion(), event)
    }
}

impl<P: StickyHeaderProvider> core::fmt::Debug for StickyList<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyList")
            .field("decoration", &self.decoration)
            .field("layout", &self.layout)
            .field("gate", &self.gate)
            .field("footer_height", &self.footer_height)
            .finish()
    }
}
