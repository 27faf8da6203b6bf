use crate::*;

use std::collections::BTreeMap;
use std::format;
use std::string::{String, ToString};
use std::vec;
use std::vec::Vec;

const WIDTH: u32 = 100;
const LINE: u32 = 10;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as u32
    }

    fn gen_bool(&mut self, one_in: u64) -> bool {
        self.next_u64() % one_in == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Week {
    title: String,
    lines: u32,
    definite: u32,
}

impl HeaderData for Week {
    fn definite_height(&self) -> u32 {
        self.definite
    }
}

#[derive(Debug, Default)]
struct Label {
    text: String,
    lines: u32,
    measure_calls: usize,
}

impl HeaderView for Label {
    fn measure(&mut self, _width: u32) -> u32 {
        self.measure_calls += 1;
        self.lines * LINE
    }
}

#[derive(Debug, Default)]
struct Weeks {
    starts: BTreeMap<usize, Week>,
    inline_calls: usize,
    hover_calls: usize,
}

impl Weeks {
    fn new() -> Self {
        Self::default()
    }

    fn header(mut self, index: usize, lines: u32) -> Self {
        self.starts.insert(
            index,
            Week {
                title: format!("week {index}"),
                lines,
                definite: 0,
            },
        );
        self
    }

    fn definite(mut self, index: usize, height: u32) -> Self {
        self.starts.insert(
            index,
            Week {
                title: format!("week {index}"),
                lines: 1,
                definite: height,
            },
        );
        self
    }
}

impl StickyHeaderProvider for Weeks {
    type View = Label;
    type Data = Week;

    fn create_view(&mut self) -> Label {
        Label::default()
    }

    fn bind_view(&mut self, view: &mut Label, data: &Week) {
        view.text = data.title.clone();
        view.lines = data.lines;
    }

    fn inline_header(&mut self, index: usize) -> Option<Week> {
        self.inline_calls += 1;
        self.starts.get(&index).cloned()
    }

    fn hovering_header(&mut self, index: usize) -> Option<Week> {
        self.hover_calls += 1;
        self.starts
            .range(..=index)
            .next_back()
            .map(|(_, week)| week.clone())
    }
}

#[derive(Debug, Default)]
struct Recorder {
    draws: Vec<(String, Rect)>,
}

impl HeaderCanvas<Label> for Recorder {
    fn draw_header(&mut self, view: &Label, rect: Rect) {
        self.draws.push((view.text.clone(), rect));
    }
}

/// Lays out `count` items of `item_size` like a host would: every item is measured through
/// `top_inset` and positioned below the previous one, then the window `[scroll, scroll+viewport)`
/// is cut out.
fn layout(
    d: &mut StickyDecoration<Weeks>,
    count: usize,
    item_size: i32,
    scroll: i32,
    viewport: i32,
) -> Vec<VisibleItem> {
    let mut out = Vec::new();
    let mut start = 0i32;
    for index in 0..count {
        let inset = d.top_inset(index, WIDTH) as i32;
        let top = start + inset - scroll;
        let bottom = top + item_size;
        start += inset + item_size;
        if bottom <= 0 {
            continue;
        }
        if top - inset >= viewport {
            break;
        }
        out.push(VisibleItem { index, top, bottom });
    }
    out
}

fn render(
    d: &mut StickyDecoration<Weeks>,
    count: usize,
    items: &[VisibleItem],
) -> (OverlayFrame, Recorder) {
    let mut canvas = Recorder::default();
    let frame = d.render_overlay(&ListFrame::new(count, WIDTH, items), &mut canvas);
    (frame, canvas)
}

fn pinned_title(d: &StickyDecoration<Weeks>) -> Option<String> {
    d.last_pinned().map(|w| w.title.to_string())
}

#[test]
fn top_inset_reserves_header_height_and_caches_answers() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 3).header(5, 2));

    assert_eq!(d.top_inset(0, WIDTH), 30);
    assert_eq!(d.top_inset(1, WIDTH), 0);
    assert_eq!(d.top_inset(5, WIDTH), 20);
    assert_eq!(d.provider().inline_calls, 3);
    assert_eq!(d.view().measure_calls, 2);

    // Repeated layout passes hit the cache, including for header-less items.
    for _ in 0..3 {
        assert_eq!(d.top_inset(0, WIDTH), 30);
        assert_eq!(d.top_inset(1, WIDTH), 0);
        assert_eq!(d.top_inset(5, WIDTH), 20);
    }
    assert_eq!(d.provider().inline_calls, 3);
    assert_eq!(d.view().measure_calls, 2);
    assert_eq!(d.cached_len(), 3);

    let record = d.cached_record(5).unwrap();
    assert_eq!(record.height, 20);
    assert_eq!(record.width, WIDTH);
    assert!(record.has_header());
    assert!(!d.cached_record(1).unwrap().has_header());
}

#[test]
fn invalidation_forces_recomputation() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 3).header(5, 2));
    for i in 0..8 {
        d.top_inset(i, WIDTH);
    }
    let items = layout(&mut d, 8, 20, 60, 100);
    let (frame, _) = render(&mut d, 8, &items);
    assert!(frame.pinned.is_some());
    assert!(d.last_pinned().is_some());
    assert!(d.hover_memo_index().is_some());
    let calls = d.provider().inline_calls;

    d.notify_data_invalidated();
    assert_eq!(d.cached_len(), 0);
    assert_eq!(d.hover_memo_index(), None);
    assert_eq!(d.last_pinned(), None);

    // The provider now reports a different shape; nothing stale may survive.
    d.provider_mut().starts.remove(&0);
    assert_eq!(d.top_inset(0, WIDTH), 0);
    assert_eq!(d.top_inset(5, WIDTH), 20);
    assert_eq!(d.provider().inline_calls, calls + 2);
}

#[test]
fn definite_height_skips_measurement() {
    let mut d = StickyDecoration::new(Weeks::new().definite(0, 50));
    assert_eq!(d.top_inset(0, WIDTH), 50);
    assert_eq!(d.view().measure_calls, 0);

    let items = layout(&mut d, 5, 20, 10, 100);
    let (frame, canvas) = render(&mut d, 5, &items);
    let pinned = frame.pinned.unwrap();
    assert_eq!(pinned.source, PinSource::Inline(0));
    assert_eq!(pinned.height, 50);
    assert_eq!(d.view().measure_calls, 0);
    assert_eq!(
        canvas.draws.last(),
        Some(&("week 0".to_string(), Rect::new(0, 0, 100, 50)))
    );
}

#[test]
fn inline_strips_use_reserved_spacing() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 3).header(5, 3));
    // item5 strip spans [130, 160) in content space; at scroll 120 it sits 10px below the top.
    let items = layout(&mut d, 12, 20, 120, 100);
    let (frame, canvas) = render(&mut d, 12, &items);

    let item5 = items.iter().find(|it| it.index == 5).unwrap();
    assert_eq!(item5.top, 40);
    let inset = d.top_inset(5, WIDTH) as i32;
    assert_eq!(
        canvas.draws[0],
        ("week 5".to_string(), Rect::new(0, item5.top - inset, 100, item5.top))
    );
    assert_eq!(canvas.draws[0].1.height() as i32, inset);

    // The previous group's header is pinned and pushed up by the arriving strip.
    let pinned = frame.pinned.unwrap();
    assert_eq!(pinned.source, PinSource::Hover(4));
    assert_eq!(pinned.offset, 20);
    assert_eq!(
        canvas.draws[1],
        ("week 0".to_string(), Rect::new(0, -20, 100, 10))
    );
}

#[test]
fn only_first_header_owning_item_seeds_the_pin() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 1).header(3, 1).header(6, 1));
    let items = layout(&mut d, 10, 20, 0, 300);
    assert_eq!(items.len(), 10);

    let (frame, canvas) = render(&mut d, 10, &items);
    assert_eq!(frame.inline_headers, 3);
    assert_eq!(frame.pinned.unwrap().source, PinSource::Inline(0));
    assert_eq!(canvas.draws.len(), 4);
    let pins = canvas
        .draws
        .iter()
        .filter(|(_, rect)| rect.top <= 0)
        .count();
    assert_eq!(pins, 2); // item0's inline strip and the pin share the top edge
}

#[test]
fn handoff_is_continuous_across_a_group_boundary() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 3).header(5, 3));
    let mut last_offset = 0u32;
    let mut switched = false;

    for scroll in 0..=200 {
        let items = layout(&mut d, 12, 20, scroll, 100);
        let (frame, _) = render(&mut d, 12, &items);
        let pinned = frame.pinned.unwrap();
        let title = pinned_title(&d).unwrap();

        assert!(pinned.offset < pinned.height);
        assert_eq!(frame.exclusion.height(), pinned.height - pinned.offset);
        assert_eq!(frame.exclusion.width(), WIDTH);

        if title == "week 0" {
            assert!(!switched, "pin went back to the previous group at {scroll}");
            assert!(pinned.offset >= last_offset, "offset jumped back at {scroll}");
            last_offset = pinned.offset;
        } else {
            assert_eq!(title, "week 5");
            if !switched {
                assert_eq!(pinned.offset, 0);
                assert_eq!(scroll, 130);
                switched = true;
            }
        }
    }
    assert!(switched);
    assert_eq!(last_offset, 29);
}

#[test]
fn touching_strip_top_pins_own_header_flush() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2).header(4, 2));
    // item4 strip starts at 20 + 4*20 = 100.
    let items = layout(&mut d, 10, 20, 100, 100);
    let (frame, _) = render(&mut d, 10, &items);
    let pinned = frame.pinned.unwrap();
    assert_eq!(pinned.source, PinSource::Inline(4));
    assert_eq!(pinned.offset, 0);
    assert_eq!(d.provider().hover_calls, 0);
}

#[test]
fn short_next_strip_pushes_a_tall_pinned_header() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 5).header(1, 1));
    // item0 strip [0,50) content [50,70); item1 strip [70,80) content [80,100).
    let items = layout(&mut d, 6, 20, 40, 100);
    let (frame, canvas) = render(&mut d, 6, &items);
    let pinned = frame.pinned.unwrap();
    assert_eq!(pinned.source, PinSource::Inline(0));
    assert_eq!(pinned.offset, 20);
    assert_eq!(frame.exclusion, Rect::new(0, 0, 100, 30));
    assert!(canvas
        .draws
        .contains(&("week 0".to_string(), Rect::new(0, -20, 100, 30))));
}

#[test]
fn last_header_persists_past_final_boundary() {
    let mut d = StickyDecoration::new(
        Weeks::new()
            .header(0, 2)
            .header(7, 2)
            .header(14, 2)
            .header(21, 2),
    );
    // total = 30*20 + 4*20 = 680, max scroll = 580.
    let mut last = OverlayFrame::default();
    let mut last_items = Vec::new();
    for scroll in (0..=580).step_by(10) {
        let items = layout(&mut d, 30, 20, scroll, 100);
        let (frame, _) = render(&mut d, 30, &items);
        last = frame;
        last_items = items;
    }

    let indexes: Vec<usize> = last_items.iter().map(|it| it.index).collect();
    assert_eq!(indexes, vec![25, 26, 27, 28, 29]);
    let pinned = last.pinned.unwrap();
    assert_eq!(pinned.source, PinSource::Retained);
    assert_eq!(pinned.offset, 0);
    assert_eq!(pinned.height, 20);
    assert_eq!(pinned_title(&d).as_deref(), Some("week 21"));
    assert_eq!(last.exclusion, Rect::new(0, 0, 100, 20));

    let (_, canvas) = render(&mut d, 30, &last_items);
    assert_eq!(
        canvas.draws,
        vec![("week 21".to_string(), Rect::new(0, 0, 100, 20))]
    );
}

#[test]
fn retained_header_can_be_disabled() {
    let mut d = StickyDecoration::with_options(
        Weeks::new().header(0, 2),
        StickyOptions::new().with_retain_last_header(false),
    );
    let items = layout(&mut d, 10, 20, 0, 100);
    assert!(render(&mut d, 10, &items).0.pinned.is_some());

    let items = layout(&mut d, 10, 20, 100, 100);
    let (frame, canvas) = render(&mut d, 10, &items);
    assert_eq!(frame.pinned, None);
    assert!(frame.exclusion.is_empty());
    assert!(canvas.draws.is_empty());
}

#[test]
fn hover_lookup_walks_back_to_previous_group() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2).header(10, 2));
    // item3 starts at 20 + 3*20 = 80.
    let items = layout(&mut d, 20, 20, 80, 200);
    assert_eq!(items[0].index, 3);
    assert_eq!(items[0].top, 0);

    let (frame, canvas) = render(&mut d, 20, &items);
    let pinned = frame.pinned.unwrap();
    assert_eq!(pinned.source, PinSource::Hover(9));
    assert_eq!(pinned.offset, 0);
    assert_eq!(pinned_title(&d).as_deref(), Some("week 0"));
    assert_eq!(
        canvas.draws.last(),
        Some(&("week 0".to_string(), Rect::new(0, 0, 100, 20)))
    );
}

#[test]
fn hover_lookup_is_memoized_per_index() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2).header(10, 2));
    for scroll in [80, 80, 85, 90, 120] {
        let items = layout(&mut d, 20, 20, scroll, 200);
        render(&mut d, 20, &items);
    }
    assert_eq!(d.provider().hover_calls, 1);
    assert_eq!(d.hover_memo_index(), Some(9));
    assert_eq!(d.view().measure_calls, 3);
}

#[test]
fn missing_hover_header_skips_the_pin() {
    let mut d = StickyDecoration::new(Weeks::new().header(5, 2));
    let items = layout(&mut d, 10, 20, 20, 200);
    let (frame, canvas) = render(&mut d, 10, &items);
    assert_eq!(frame.pinned, None);
    assert_eq!(frame.inline_headers, 1);
    assert!(frame.exclusion.is_empty());
    assert_eq!(canvas.draws.len(), 1);

    // The negative answer is memoized too.
    render(&mut d, 10, &items);
    assert_eq!(d.provider().hover_calls, 1);
}

#[test]
fn header_at_first_index_below_top_has_nothing_to_hover() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2));
    d.top_inset(0, WIDTH);
    // Host padding pushes item0's strip below the viewport top.
    let items = [VisibleItem {
        index: 0,
        top: 30,
        bottom: 50,
    }];
    let (frame, _) = render(&mut d, 1, &items);
    assert_eq!(frame.pinned, None);
    assert_eq!(frame.inline_headers, 1);
    assert_eq!(d.provider().hover_calls, 0);
}

#[test]
fn empty_list_leaves_exclusion_untouched() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2));
    let items = layout(&mut d, 5, 20, 0, 100);
    let (frame, _) = render(&mut d, 5, &items);
    let exclusion = frame.exclusion;
    assert!(!exclusion.is_empty());

    let (frame, canvas) = render(&mut d, 0, &[]);
    assert_eq!(frame.pinned, None);
    assert!(canvas.draws.is_empty());
    assert_eq!(d.touch_exclusion(), exclusion);
    assert_eq!(frame.exclusion, exclusion);
}

#[test]
fn out_of_bounds_visible_items_are_skipped() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2).header(3, 2));
    for i in 0..5 {
        d.top_inset(i, WIDTH);
    }
    // The host still shows index 3 while the data set already shrank to 3 items.
    let items = [
        VisibleItem {
            index: 1,
            top: 0,
            bottom: 20,
        },
        VisibleItem {
            index: 3,
            top: 40,
            bottom: 60,
        },
    ];
    let (frame, canvas) = render(&mut d, 3, &items);
    assert_eq!(frame.inline_headers, 0);
    assert_eq!(frame.pinned, None);
    assert!(canvas.draws.is_empty());
}

#[test]
fn zero_height_header_reserves_nothing_and_draws_nothing() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 0));
    assert_eq!(d.top_inset(0, WIDTH), 0);
    assert!(d.cached_record(0).unwrap().has_header());

    let items = layout(&mut d, 5, 20, 0, 100);
    let (frame, canvas) = render(&mut d, 5, &items);
    assert_eq!(frame.inline_headers, 0);
    assert!(canvas.draws.is_empty());
    assert!(frame.exclusion.is_empty());
}

#[test]
fn disabled_decoration_is_inert() {
    let mut d = StickyDecoration::with_options(
        Weeks::new().header(0, 2),
        StickyOptions::new().with_enabled(false),
    );
    assert_eq!(d.top_inset(0, WIDTH), 0);
    let items = [VisibleItem {
        index: 0,
        top: 0,
        bottom: 20,
    }];
    let (frame, canvas) = render(&mut d, 1, &items);
    assert_eq!(frame, OverlayFrame::default());
    assert!(canvas.draws.is_empty());
    assert_eq!(d.provider().inline_calls, 0);

    d.update_options(|o| o.enabled = true);
    assert_eq!(d.top_inset(0, WIDTH), 20);
}

#[test]
fn toggling_enabled_drops_cached_spacing() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2).header(3, 1));
    let items = layout(&mut d, 6, 20, 0, 100);
    render(&mut d, 6, &items);
    assert_eq!(d.cached_len(), 5);
    assert!(d.last_pinned().is_some());

    d.update_options(|o| o.enabled = false);
    assert_eq!(d.cached_len(), 0);
    assert_eq!(d.last_pinned(), None);
    assert_eq!(d.top_inset(0, WIDTH), 0);

    let calls = d.provider().inline_calls;
    d.update_options(|o| o.enabled = true);
    assert_eq!(d.top_inset(0, WIDTH), 20);
    assert_eq!(d.provider().inline_calls, calls + 1);

    // Other option changes keep the cache.
    d.update_options(|o| o.intercept_touches = false);
    assert_eq!(d.cached_len(), 1);
}

#[test]
fn touch_exclusion_follows_intercept_option() {
    let mut d = StickyDecoration::new(Weeks::new().header(0, 2));
    let items = layout(&mut d, 5, 20, 0, 100);
    render(&mut d, 5, &items);
    assert!(d.excludes_point(50, 0));
    assert!(d.excludes_point(99, 19));
    assert!(!d.excludes_point(50, 20));
    assert!(!d.excludes_point(100, 5));

    d.update_options(|o| o.intercept_touches = false);
    assert!(d.touch_exclusion().is_empty());
    let (frame, canvas) = render(&mut d, 5, &items);
    assert!(frame.pinned.is_some());
    assert!(frame.exclusion.is_empty());
    assert_eq!(canvas.draws.len(), 2);
}

#[test]
fn random_scrolls_keep_frame_invariants() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..20 {
        let count = rng.gen_range_u32(1, 60) as usize;
        let mut weeks = Weeks::new();
        for i in 0..count {
            if i == 0 || rng.gen_bool(5) {
                weeks = weeks.header(i, rng.gen_range_u32(1, 6));
            }
        }
        let item_size = rng.gen_range_u32(5, 40) as i32;
        let viewport = rng.gen_range_u32(20, 200) as i32;
        let mut d = StickyDecoration::new(weeks);

        for _ in 0..40 {
            let scroll = rng.gen_range_u32(0, 2000) as i32;
            let items = layout(&mut d, count, item_size, scroll, viewport);
            let (frame, canvas) = render(&mut d, count, &items);

            let pins = usize::from(frame.pinned.is_some());
            assert_eq!(canvas.draws.len(), frame.inline_headers + pins);
            match frame.pinned {
                Some(pinned) => {
                    assert!(pinned.offset < pinned.height);
                    assert_eq!(frame.exclusion.height(), pinned.visible_height());
                }
                None => assert!(frame.exclusion.is_empty()),
            }
            assert!(d.cached_len() <= count);
        }
    }
}
