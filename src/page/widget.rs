use super::{Page, Transcript};
use crate::calendar::{Cell, CellKind};
use crate::theme::{
    BASE_STYLE, DIAGNOSTICS_STYLE, EMPTY_CELL_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget},
};

/// Number of cells per row of the grid
const ROW_CELLS: u16 = 7;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Number of columns drawn for each cell; the rest of `DAY_WIDTH` is gutter
const CELL_WIDTH: u16 = 4;

/// Width of the grid in columns
const GRID_WIDTH: u16 = DAY_WIDTH * (ROW_CELLS - 1) + CELL_WIDTH;

const TITLE_LINE: u16 = 0;

const HEADER_LINE: u16 = 2;

const RULE_LINE: u16 = 3;

const FIRST_WEEK_LINE: u16 = 4;

/// Number of lines taken up by each week of the calendar
const WEEK_LINES: u16 = 2;

/// A month touches at most this many weeks
const MAX_WEEKS: u16 = 6;

/// Number of lines reserved for the title and grid, including a blank line
/// after the last week
const GRID_LINES: u16 = FIRST_WEEK_LINE + MAX_WEEKS * WEEK_LINES;

/// The diagnostics pane is only drawn if it has room for its borders and at
/// least one line of text
const MIN_PANE_HEIGHT: u16 = 3;

const ACS_HLINE: char = '─';

/// Draws a [`Page`]: the title centered over a seven-column grid of cells,
/// followed by the diagnostic transcript if the page has one
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PageWidget<'a>(pub(crate) &'a Page);

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let left = area.width.saturating_sub(GRID_WIDTH) / 2;
        let grid_area = Rect {
            x: area.x + left,
            y: area.y,
            width: GRID_WIDTH.min(area.width),
            height: GRID_LINES.min(area.height),
        };
        let mut canvas = BufferCanvas::new(grid_area, buf);
        if let Some(title) = self.0.title() {
            canvas.draw_title(title);
        }
        if let Some(cells) = self.0.grid() {
            canvas.hline(RULE_LINE, 0, ACS_HLINE, GRID_WIDTH);
            for (i, cell) in std::iter::zip(0u16.., cells) {
                canvas.draw_cell(i / ROW_CELLS, i % ROW_CELLS, cell);
            }
        }
        if let Some(transcript) = self.0.diagnostics() {
            let pane = Rect {
                x: area.x,
                y: area.y.saturating_add(GRID_LINES),
                width: area.width,
                height: area.height.saturating_sub(GRID_LINES),
            };
            if pane.height >= MIN_PANE_HEIGHT {
                draw_diagnostics(transcript, pane, buf);
            }
        }
    }
}

// Shows as many of the most recent transcript lines as fit
fn draw_diagnostics(transcript: &Transcript, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .title(" Diagnostics ")
        .style(DIAGNOSTICS_STYLE);
    let room = usize::from(block.inner(area).height);
    let skip = transcript.len().saturating_sub(room);
    let text = transcript
        .iter()
        .skip(skip)
        .map(|s| Line::raw(s.as_str()))
        .collect::<Text<'_>>();
    Paragraph::new(text).block(block).render(area, buf);
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, title: &str) {
        let width = u16::try_from(Text::raw(title).width()).unwrap_or(u16::MAX);
        self.mvprint(
            TITLE_LINE,
            self.area.width.saturating_sub(width) / 2,
            title,
            Some(TITLE_STYLE),
        );
    }

    // `row` 0 holds the weekday headers; every later row is one week
    fn draw_cell(&mut self, row: u16, col: u16, cell: &Cell) {
        let y = match row.checked_sub(1) {
            None => HEADER_LINE,
            Some(week_no) => week_no
                .saturating_mul(WEEK_LINES)
                .saturating_add(FIRST_WEEK_LINE),
        };
        let (s, style) = match cell.kind {
            CellKind::Header => (format!("{:>4}", cell.label), WEEKDAY_STYLE),
            CellKind::Empty => (" ".repeat(CELL_WIDTH.into()), EMPTY_CELL_STYLE),
            CellKind::Day(_) if cell.is_today => (format!("[{:>2}]", cell.label), TODAY_STYLE),
            CellKind::Day(_) => (format!(" {:>2} ", cell.label), BASE_STYLE),
        };
        self.mvprint(y, DAY_WIDTH * col, s, Some(style));
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // grid's area, though we need to be sure that the Rect passed to
            // the Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::LogRecorder;
    use crate::view::CalendarView;
    use time::macros::date;

    fn set_grid_styles(expected: &mut Buffer) {
        expected.set_style(Rect::new(25, 0, 10, 1), TITLE_STYLE);
        for col in 0..7 {
            expected.set_style(Rect::new(7 + 7 * col, 2, 4, 1), WEEKDAY_STYLE);
        }
        for col in 0..5 {
            expected.set_style(Rect::new(7 + 7 * col, 4, 4, 1), EMPTY_CELL_STYLE);
        }
        expected.set_style(Rect::new(42, 8, 4, 1), TODAY_STYLE);
    }

    #[test]
    fn test_march_2024() {
        let mut view = CalendarView::new(Page::new(), LogRecorder, date!(2024 - 03 - 15));
        view.initialize();
        let area = Rect::new(0, 0, 60, 16);
        let mut buffer = Buffer::empty(area);
        PageWidget(view.surface()).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                         March 2024                         ",
            "                                                            ",
            "        Sun    Mon    Tue    Wed    Thu    Fri    Sat       ",
            "       ──────────────────────────────────────────────       ",
            "                                            1      2        ",
            "                                                            ",
            "         3      4      5      6      7      8      9        ",
            "                                                            ",
            "        10     11     12     13     14    [15]    16        ",
            "                                                            ",
            "        17     18     19     20     21     22     23        ",
            "                                                            ",
            "        24     25     26     27     28     29     30        ",
            "                                                            ",
            "        31                                                  ",
            "                                                            ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        set_grid_styles(&mut expected);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_diagnostics_pane() {
        let page = Page::new().with_diagnostics();
        let mut view = CalendarView::new(page, LogRecorder, date!(2024 - 03 - 15));
        view.initialize();
        let area = Rect::new(0, 0, 60, 20);
        let mut buffer = Buffer::empty(area);
        PageWidget(view.surface()).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                         March 2024                         ",
            "                                                            ",
            "        Sun    Mon    Tue    Wed    Thu    Fri    Sat       ",
            "       ──────────────────────────────────────────────       ",
            "                                            1      2        ",
            "                                                            ",
            "         3      4      5      6      7      8      9        ",
            "                                                            ",
            "        10     11     12     13     14    [15]    16        ",
            "                                                            ",
            "        17     18     19     20     21     22     23        ",
            "                                                            ",
            "        24     25     26     27     28     29     30        ",
            "                                                            ",
            "        31                                                  ",
            "                                                            ",
            "┌ Diagnostics ─────────────────────────────────────────────┐",
            "│Calendar rendered                                         │",
            "│Calendar initialization complete                          │",
            "└──────────────────────────────────────────────────────────┘",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        set_grid_styles(&mut expected);
        expected.set_style(Rect::new(0, 16, 60, 4), DIAGNOSTICS_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_no_room_for_diagnostics() {
        let page = Page::new().with_diagnostics();
        let mut view = CalendarView::new(page, LogRecorder, date!(2024 - 03 - 15));
        view.initialize();
        let area = Rect::new(0, 0, 60, 18);
        let mut buffer = Buffer::empty(area);
        PageWidget(view.surface()).render(area, &mut buffer);
        assert!((0..60u16).all(|x| buffer[(x, 16u16)].symbol() == " "));
    }

    #[test]
    fn test_narrow_terminal() {
        let mut view = CalendarView::new(Page::new(), LogRecorder, date!(2024 - 03 - 15));
        view.initialize();
        let area = Rect::new(0, 0, 20, 5);
        let mut buffer = Buffer::empty(area);
        PageWidget(view.surface()).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "     March 2024     ",
            "                    ",
            " Sun    Mon    Tue  ",
            "────────────────────",
            "                    ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(5, 0, 10, 1), TITLE_STYLE);
        for col in 0..3 {
            expected.set_style(Rect::new(7 * col, 2, 4, 1), WEEKDAY_STYLE);
        }
        expected.set_style(Rect::new(0, 4, 4, 1), EMPTY_CELL_STYLE);
        expected.set_style(Rect::new(7, 4, 4, 1), EMPTY_CELL_STYLE);
        expected.set_style(Rect::new(14, 4, 4, 1), EMPTY_CELL_STYLE);
        assert_eq!(buffer, expected);
    }
}
