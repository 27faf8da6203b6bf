use sticky_header::VisibleItem;

/// Whether the realized window already fills the viewport.
///
/// A window that does not start at the first item is assumed to be filled; otherwise the span
/// from the first item's top to the last item's bottom must cover the viewport height. Very tall
/// single items can fool this; the threshold is a tuning choice, not a contract.
pub fn fills_viewport(
    first_index: usize,
    first_top: i32,
    last_bottom: i32,
    viewport_height: u32,
) -> bool {
    first_index > 0 || i64::from(last_bottom) - i64::from(first_top) >= i64::from(viewport_height)
}

/// The trailing inset to reserve below the last item, given the current window.
///
/// Returns `None` while the last item is not realized (nothing to decide yet), `Some(footer)` when
/// the list fills the viewport and `Some(0)` when it does not, so a short list does not get a
/// dangling footer gap.
pub fn trailing_inset_for(
    visible: &[VisibleItem],
    count: usize,
    viewport_height: u32,
    footer: u32,
) -> Option<u32> {
    let (first, last) = (visible.first()?, visible.last()?);
    if last.index + 1 != count {
        return None;
    }
    let filled = fills_viewport(first.index, first.top, last.bottom, viewport_height);
    Some(if filled { footer } else { 0 })
}
