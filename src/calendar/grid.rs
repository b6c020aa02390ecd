use super::month::{YearMonth, DAYS_IN_WEEK};
use time::{error::ComponentRange, Date};

static WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CellKind {
    Header,
    Empty,
    Day(u8),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    pub(crate) kind: CellKind,
    pub(crate) label: String,
    pub(crate) is_today: bool,
}

impl Cell {
    fn header(label: &str) -> Cell {
        Cell {
            kind: CellKind::Header,
            label: label.to_owned(),
            is_today: false,
        }
    }

    fn empty() -> Cell {
        Cell {
            kind: CellKind::Empty,
            label: String::new(),
            is_today: false,
        }
    }

    fn day(day: u8, is_today: bool) -> Cell {
        Cell {
            kind: CellKind::Day(day),
            label: day.to_string(),
            is_today,
        }
    }
}

/// The cells of a single month laid out for a seven-column grid: the weekday
/// headers, then one empty cell for each weekday before the first of the
/// month, then one cell per day.  The last week is not padded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month: YearMonth,
    first_weekday: u8,
    day_count: u8,
    cells: Vec<Cell>,
}

impl MonthGrid {
    pub(crate) fn compute(month: YearMonth, today: Date) -> Result<MonthGrid, ComponentRange> {
        let first_weekday = month.first_weekday()?;
        let day_count = month.day_count();
        let mut cells =
            Vec::with_capacity(DAYS_IN_WEEK + usize::from(first_weekday) + usize::from(day_count));
        cells.extend(WEEKDAY_LABELS.iter().map(|&label| Cell::header(label)));
        cells.extend((0..first_weekday).map(|_| Cell::empty()));
        let today_here = month.contains(today).then_some(today.day());
        cells.extend((1..=day_count).map(|day| Cell::day(day, today_here == Some(day))));
        Ok(MonthGrid {
            month,
            first_weekday,
            day_count,
            cells,
        })
    }

    pub(crate) fn month(&self) -> YearMonth {
        self.month
    }

    pub(crate) fn first_weekday(&self) -> u8 {
        self.first_weekday
    }

    pub(crate) fn day_count(&self) -> u8 {
        self.day_count
    }

    /// The `"<Month> <Year>"` label for the grid's title
    pub(crate) fn title(&self) -> String {
        self.month.to_string()
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells after the weekday headers
    #[cfg(test)]
    pub(crate) fn body(&self) -> &[Cell] {
        self.cells.get(DAYS_IN_WEEK..).unwrap_or_default()
    }

    pub(crate) fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
