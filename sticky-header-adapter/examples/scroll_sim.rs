use std::collections::BTreeMap;

use sticky_header::{HeaderCanvas, HeaderData, HeaderView, Rect, StickyHeaderProvider};
use sticky_header_adapter::{DataChange, PointerEvent, StickyList};

#[derive(Clone)]
struct Section(String);

impl HeaderData for Section {
    fn definite_height(&self) -> u32 {
        20
    }
}

#[derive(Default)]
struct Label(String);

impl HeaderView for Label {
    fn measure(&mut self, _width: u32) -> u32 {
        20
    }
}

struct Contacts {
    sections: BTreeMap<usize, String>,
}

impl StickyHeaderProvider for Contacts {
    type View = Label;
    type Data = Section;

    fn create_view(&mut self) -> Label {
        Label::default()
    }

    fn bind_view(&mut self, view: &mut Label, data: &Section) {
        view.0.clone_from(&data.0);
    }

    fn inline_header(&mut self, index: usize) -> Option<Section> {
        self.sections.get(&index).cloned().map(Section)
    }

    fn hovering_header(&mut self, index: usize) -> Option<Section> {
        self.sections
            .range(..=index)
            .next_back()
            .map(|(_, s)| Section(s.clone()))
    }
}

struct Log;

impl HeaderCanvas<Label> for Log {
    fn draw_header(&mut self, view: &Label, rect: Rect) {
        println!("  draw {:?} y={}..{}", view.0, rect.top, rect.bottom);
    }
}

fn main() {
    // Example: a contact list with one section per initial, driven like a real host would.
    let sections = BTreeMap::from([
        (0, "A".to_string()),
        (6, "B".to_string()),
        (9, "C".to_string()),
        (20, "D".to_string()),
    ]);
    let mut list = StickyList::new(Contacts { sections }, 24, |_| 32).with_footer_height(48);
    list.on_viewport(360, 160);

    for _ in 0..16 {
        let frame = list.frame(&mut Log);
        println!(
            "scroll={} pinned={:?} exclusion={:?}",
            list.layout().scroll_offset(),
            frame.pinned,
            frame.exclusion
        );
        list.scroll_by(64);
    }

    // A tap on the pinned header never reaches the list.
    println!("tap header: {:?}", list.dispatch_pointer(PointerEvent::down(10.0, 4.0)));
    println!("release: {:?}", list.dispatch_pointer(PointerEvent::up(10.0, 4.0)));

    list.on_data_change(DataChange::Removed { start: 20, count: 4 });
    list.on_scroll(0);
    let frame = list.frame(&mut Log);
    println!(
        "after removal: count={} pinned={:?} trailing={}",
        list.layout().count(),
        frame.pinned,
        list.layout().trailing_inset()
    );
}
