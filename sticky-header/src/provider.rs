use crate::Rect;

/// Header content produced by a [`StickyHeaderProvider`].
pub trait HeaderData {
    /// The exact rendered height of this header, if the provider knows it.
    ///
    /// When this returns a value `> 0` the engine uses it verbatim and never measures the header
    /// view for this data. The default (`0`) means "measure me".
    fn definite_height(&self) -> u32 {
        0
    }
}

/// The single header view the engine binds, measures and draws.
pub trait HeaderView {
    /// Lays the view out against the given list width and returns its height.
    ///
    /// This is the expensive path; the engine calls it at most once per cache record or hover
    /// lookup, and never while drawing.
    fn measure(&mut self, width: u32) -> u32;
}

/// Capability interface implemented by the embedding application.
///
/// One implementation per use case (e.g. "week headers over a calendar list"). The engine owns
/// the provider and calls it from the host's layout and draw passes only.
pub trait StickyHeaderProvider {
    type View: HeaderView;
    type Data: HeaderData + Clone;

    /// Creates the header view. Called once, when the engine is constructed.
    fn create_view(&mut self) -> Self::View;

    /// Refreshes the view's content for `data`.
    fn bind_view(&mut self, view: &mut Self::View, data: &Self::Data);

    /// The header drawn inline directly above item `index`, or `None` if the item does not
    /// start a group.
    fn inline_header(&mut self, index: usize) -> Option<Self::Data>;

    /// The header that would be pinned if item `index` were the topmost visible item.
    ///
    /// Implementations usually walk backwards from `index` to the nearest group start and
    /// return `None` when there is none.
    fn hovering_header(&mut self, index: usize) -> Option<Self::Data>;
}

/// A drawing surface that can paint a bound header view.
///
/// `rect` is the header's footprint in viewport coordinates; it may extend above the viewport
/// top while a handoff is in progress.
pub trait HeaderCanvas<V: ?Sized> {
    fn draw_header(&mut self, view: &V, rect: Rect);
}
