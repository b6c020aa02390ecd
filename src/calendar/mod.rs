mod grid;
mod month;
pub(crate) use self::grid::{Cell, CellKind, MonthGrid};
pub(crate) use self::month::{OutOfTimeError, YearMonth};
