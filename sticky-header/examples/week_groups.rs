// Example: a weekday list grouped by week, scrolled past every group boundary.
use std::collections::BTreeMap;

use sticky_header::{
    HeaderCanvas, HeaderData, HeaderView, ListFrame, Rect, StickyDecoration, StickyHeaderProvider,
    VisibleItem,
};

const WIDTH: u32 = 320;
const ROW: i32 = 24;
const LINE: u32 = 18;

#[derive(Clone)]
struct WeekTitle(String);

impl HeaderData for WeekTitle {}

#[derive(Default)]
struct TextView {
    text: String,
}

impl HeaderView for TextView {
    fn measure(&mut self, _width: u32) -> u32 {
        // One line of text per '\n'-separated segment, plus padding.
        self.text.lines().count() as u32 * LINE + 8
    }
}

struct Weeks {
    titles: BTreeMap<usize, String>,
}

impl StickyHeaderProvider for Weeks {
    type View = TextView;
    type Data = WeekTitle;

    fn create_view(&mut self) -> TextView {
        TextView::default()
    }

    fn bind_view(&mut self, view: &mut TextView, data: &WeekTitle) {
        view.text.clone_from(&data.0);
    }

    fn inline_header(&mut self, index: usize) -> Option<WeekTitle> {
        self.titles.get(&index).cloned().map(WeekTitle)
    }

    fn hovering_header(&mut self, index: usize) -> Option<WeekTitle> {
        self.titles
            .range(..=index)
            .next_back()
            .map(|(_, t)| WeekTitle(t.clone()))
    }
}

struct Printer;

impl HeaderCanvas<TextView> for Printer {
    fn draw_header(&mut self, view: &TextView, rect: Rect) {
        println!(
            "  header {:?} at y={} h={}",
            view.text.replace('\n', " / "),
            rect.top,
            rect.height()
        );
    }
}

fn main() {
    let days = ["Thu", "Fri", "Sat", "Sun"]
        .into_iter()
        .chain(
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .into_iter()
                .cycle()
                .take(26),
        )
        .collect::<Vec<_>>();
    let titles = BTreeMap::from([
        (4, "Week 1".to_string()),
        (11, "Week 2\nWeek 2".to_string()),
        (18, "Week 3\nWeek 3\nWeek 3".to_string()),
        (25, "Week 4\nWeek 4\nWeek 4".to_string()),
    ]);

    let count = days.len();
    let mut d = StickyDecoration::new(Weeks { titles });
    let viewport = 200;

    for scroll in (0..=700).step_by(50) {
        // Host layout pass.
        let mut items = Vec::new();
        let mut start = 0i32;
        for index in 0..count {
            let inset = d.top_inset(index, WIDTH) as i32;
            let top = start + inset - scroll;
            start += inset + ROW;
            if top + ROW > 0 && top - inset < viewport {
                items.push(VisibleItem {
                    index,
                    top,
                    bottom: top + ROW,
                });
            }
        }

        println!(
            "scroll={scroll} rows={:?}",
            items.iter().map(|it| days[it.index]).collect::<Vec<_>>()
        );
        let frame = d.render_overlay(&ListFrame::new(count, WIDTH, &items), &mut Printer);
        println!("  pinned={:?} exclusion={:?}", frame.pinned, frame.exclusion);
    }
}
