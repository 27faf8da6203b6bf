use alloc::vec::Vec;
use core::mem;

use crate::cache::{GeometryCache, HeaderRecord, HoverMemo};
use crate::types::clamp_i32;
use crate::{
    HeaderCanvas, HeaderData, HeaderView, HostList, OverlayFrame, PinSource, PinnedHeader, Rect,
    StickyHeaderProvider, StickyOptions, VisibleItem,
};

/// A headless sticky header engine for one list instance.
///
/// The host drives it from its own passes:
/// - layout: [`Self::top_inset`] for every item it measures (reserves room for inline headers)
/// - draw: [`Self::render_overlay`] once, after the list content has been drawn
/// - data mutation: [`Self::notify_data_invalidated`]
/// - pointer-down: [`Self::touch_exclusion`] / [`Self::excludes_point`]
///
/// All calls are expected on the host's UI thread. `notify_data_invalidated` must not be called
/// from inside a layout or draw pass.
pub struct StickyDecoration<P: StickyHeaderProvider> {
    options: StickyOptions,
    provider: P,
    view: P::View,
    records: GeometryCache<P::Data>,
    hover: Option<HoverMemo<P::Data>>,
    last_pinned: Option<HeaderRecord<P::Data>>,
    exclusion: Rect,
    scratch: Vec<VisibleItem>,
}

impl<P: StickyHeaderProvider> StickyDecoration<P> {
    /// Creates an engine with default options. The provider's header view is created here.
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, StickyOptions::default())
    }

    pub fn with_options(mut provider: P, options: StickyOptions) -> Self {
        sdebug!(
            enabled = options.enabled,
            intercept_touches = options.intercept_touches,
            "StickyDecoration::new"
        );
        let view = provider.create_view();
        Self {
            options,
            provider,
            view,
            records: GeometryCache::new(),
            hover: None,
            last_pinned: None,
            exclusion: Rect::EMPTY,
            scratch: Vec::new(),
        }
    }

    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    /// Applies new options. Toggling `enabled` invalidates all cached state, so the host must
    /// lay its items out again.
    pub fn set_options(&mut self, options: StickyOptions) {
        strace!(
            enabled = options.enabled,
            intercept_touches = options.intercept_touches,
            retain_last_header = options.retain_last_header,
            "StickyDecoration::set_options"
        );
        let toggled = options.enabled != self.options.enabled;
        self.options = options;
        if toggled {
            // Spacing answered while in the other state is stale.
            self.notify_data_invalidated();
        }
        if !options.enabled || !options.intercept_touches {
            self.exclusion = Rect::EMPTY;
        }
        if !options.retain_last_header {
            self.last_pinned = None;
        }
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut StickyOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn view(&self) -> &P::View {
        &self.view
    }

    /// Extra spacing the host must reserve above item `index`.
    ///
    /// The first call for an index asks the provider for an inline header and, if there is one,
    /// determines its height (the data's definite height, or a measurement of the header view at
    /// `width`). The result is cached until the next invalidation, including "no header" answers.
    pub fn top_inset(&mut self, index: usize, width: u32) -> u32 {
        if !self.options.enabled {
            return 0;
        }
        if let Some(record) = self.records.get(index) {
            return record.height;
        }

        let record = match self.provider.inline_header(index) {
            Some(data) => HeaderRecord {
                height: self.header_height(&data, width),
                width,
                data: Some(data),
            },
            None => HeaderRecord::empty(width),
        };
        strace!(
            index,
            height = record.height,
            has_header = record.has_header(),
            "top_inset: cached"
        );
        let height = record.height;
        self.records.insert(index, record);
        height
    }

    /// Drops every cached record, the hover memo and the retained pinned header.
    ///
    /// Call this for any mutation of the underlying data (reset, insert, remove, move, update):
    /// indexes are not stable identities, so nothing cached per index survives.
    pub fn notify_data_invalidated(&mut self) {
        sdebug!(cached = self.records.len(), "notify_data_invalidated");
        self.records.clear();
        self.hover = None;
        self.last_pinned = None;
    }

    /// The band currently covered by the pinned header; pointer-downs inside it belong to the
    /// overlay, not to the list. Empty when no header is pinned.
    pub fn touch_exclusion(&self) -> Rect {
        self.exclusion
    }

    pub fn excludes_point(&self, x: i32, y: i32) -> bool {
        self.exclusion.contains(x, y)
    }

    /// Returns the number of cached geometry records (with or without a header).
    pub fn cached_len(&self) -> usize {
        self.records.len()
    }

    pub fn cached_record(&self, index: usize) -> Option<&HeaderRecord<P::Data>> {
        self.records.get(index)
    }

    /// The index of the last hover lookup, if it is still memoized.
    pub fn hover_memo_index(&self) -> Option<usize> {
        self.hover.as_ref().map(|memo| memo.index)
    }

    /// The header data most recently drawn as the pinned header.
    pub fn last_pinned(&self) -> Option<&P::Data> {
        self.last_pinned.as_ref().and_then(|r| r.data.as_ref())
    }

    /// Draws inline header strips and the pinned header for the host's current visible window.
    ///
    /// Call once per frame, after the list content. `top_inset` must already have been called for
    /// every visible index during layout; visible items without a cached record are treated as
    /// header-less and items outside `0..item_count` are skipped.
    pub fn render_overlay<H, C>(&mut self, host: &H, canvas: &mut C) -> OverlayFrame
    where
        H: HostList + ?Sized,
        C: HeaderCanvas<P::View> + ?Sized,
    {
        let mut frame = OverlayFrame {
            exclusion: self.exclusion,
            ..OverlayFrame::default()
        };
        if !self.options.enabled {
            return frame;
        }
        let count = host.item_count();
        if count == 0 {
            return frame;
        }
        let width = host.width();
        self.exclusion = Rect::EMPTY;

        let mut items = mem::take(&mut self.scratch);
        items.clear();
        host.for_each_visible_item(&mut |item| items.push(item));

        let mut pin_seeded = false;
        for (pos, item) in items.iter().enumerate() {
            if item.index >= count {
                swarn!(
                    index = item.index,
                    count,
                    "render_overlay: visible item out of bounds"
                );
                continue;
            }
            let Some(record) = self.header_record(item.index) else {
                continue;
            };

            let strip_top = item.top.saturating_sub(clamp_i32(record.height));
            if self.draw(canvas, &record, strip_top, width) {
                frame.inline_headers += 1;
            }

            // Only the first header-owning item may seed the pin.
            if pin_seeded {
                continue;
            }
            pin_seeded = true;

            // A strip still below the viewport top means the previous group owns the top.
            let (source, pinned) = if strip_top > 0 {
                let Some(query) = item.index.checked_sub(1) else {
                    continue;
                };
                match self.hover_record(query, record.width) {
                    Some(hover) => (PinSource::Hover(query), hover),
                    None => continue,
                }
            } else {
                (PinSource::Inline(item.index), record)
            };

            let height = pinned.height;
            let offset = handoff_offset(strip_top, height)
                .or_else(|| {
                    self.next_strip_top(&items[pos + 1..], count)
                        .and_then(|next| handoff_offset(next, height))
                })
                .unwrap_or(0);

            let visible = height - offset;
            self.draw(canvas, &pinned, -clamp_i32(offset), width);
            if self.options.intercept_touches {
                self.exclusion = Rect::top_band(width, visible);
            }
            strace!(?source, height, offset, "render_overlay: pinned");
            frame.pinned = Some(PinnedHeader {
                source,
                height,
                offset,
            });
            self.last_pinned = Some(pinned);
        }

        if !pin_seeded && self.options.retain_last_header {
            if let Some(retained) = self.last_pinned.take() {
                self.draw(canvas, &retained, 0, width);
                if self.options.intercept_touches {
                    self.exclusion = Rect::top_band(width, retained.height);
                }
                frame.pinned = Some(PinnedHeader {
                    source: PinSource::Retained,
                    height: retained.height,
                    offset: 0,
                });
                self.last_pinned = Some(retained);
            }
        }

        self.scratch = items;
        frame.exclusion = self.exclusion;
        frame
    }

    fn header_record(&self, index: usize) -> Option<HeaderRecord<P::Data>> {
        match self.records.get(index) {
            Some(record) if record.has_header() => Some(record.clone()),
            Some(_) => None,
            None => {
                swarn!(index, "render_overlay: no cached geometry");
                None
            }
        }
    }

    /// Strip top of the next header-owning item in `rest`, if any.
    fn next_strip_top(&self, rest: &[VisibleItem], count: usize) -> Option<i32> {
        rest.iter()
            .filter(|item| item.index < count)
            .find_map(|item| {
                let record = self.records.get(item.index)?;
                record
                    .has_header()
                    .then(|| item.top.saturating_sub(clamp_i32(record.height)))
            })
    }

    fn hover_record(&mut self, index: usize, width: u32) -> Option<HeaderRecord<P::Data>> {
        if let Some(memo) = &self.hover {
            if memo.index == index {
                return memo.record.clone();
            }
        }

        sdebug!(index, "hover lookup");
        let record = self
            .provider
            .hovering_header(index)
            .map(|data| HeaderRecord {
                height: self.header_height(&data, width),
                width,
                data: Some(data),
            });
        self.hover = Some(HoverMemo {
            index,
            record: record.clone(),
        });
        record
    }

    fn header_height(&mut self, data: &P::Data, width: u32) -> u32 {
        let definite = data.definite_height();
        if definite > 0 {
            return definite;
        }
        self.provider.bind_view(&mut self.view, data);
        self.view.measure(width)
    }

    /// Binds `record` and draws it with its top edge at `top`. Zero-height headers are skipped.
    fn draw<C>(&mut self, canvas: &mut C, record: &HeaderRecord<P::Data>, top: i32, width: u32) -> bool
    where
        C: HeaderCanvas<P::View> + ?Sized,
    {
        let Some(data) = &record.data else {
            return false;
        };
        if record.height == 0 {
            return false;
        }
        self.provider.bind_view(&mut self.view, data);
        let rect = Rect::new(
            0,
            top,
            clamp_i32(width),
            top.saturating_add(clamp_i32(record.height)),
        );
        canvas.draw_header(&self.view, rect);
        true
    }
}

/// How far a pinned header of `height` is pushed up by a strip whose top is at `strip_top`.
fn handoff_offset(strip_top: i32, height: u32) -> Option<u32> {
    (strip_top > 0 && strip_top <= clamp_i32(height)).then(|| height - strip_top as u32)
}

impl<P: StickyHeaderProvider> core::fmt::Debug for StickyDecoration<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyDecoration")
            .field("options", &self.options)
            .field("cached", &self.records.len())
            .field("hover_memo_index", &self.hover_memo_index())
            .field("has_last_pinned", &self.last_pinned.is_some())
            .field("exclusion", &self.exclusion)
            .finish_non_exhaustive()
    }
}
