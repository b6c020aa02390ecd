use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

/// Keys and what they do, in the order shown
static BINDINGS: &[(&str, &str)] = &[
    ("h, p, LEFT, PAGE UP", "Previous month"),
    ("l, n, RIGHT, PAGE DOWN", "Next month"),
    ("0, HOME", "Jump to this month"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

/// Columns given to the keys before the description starts
const KEY_COLUMN: usize = 24;

const FOOTER: &str = "Press the Any Key to dismiss.";

/// Columns and lines taken up by the border plus the padding inside it
const FRAME_WIDTH: u16 = 4;
const FRAME_HEIGHT: u16 = 2;

/// The key binding overlay, drawn in a box in the middle of the screen
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    fn text() -> Text<'static> {
        BINDINGS
            .iter()
            .map(|&(keys, action)| Line::raw(format!("{keys:<KEY_COLUMN$}{action}")))
            .chain([Line::default(), Line::raw(FOOTER)])
            .collect()
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Self::text();
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(FRAME_WIDTH);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(FRAME_HEIGHT);
        let box_area = centered(area, width, height);
        Clear.render(box_area, buf);
        Paragraph::new(text)
            .style(self.0)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::horizontal(1)),
            )
            .render(box_area, buf);
    }
}

// Shrinks to fit if `area` is too small
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
