use crate::calendar::{MonthGrid, OutOfTimeError, YearMonth};
use crate::clock::Clock;
use crate::diagnostics::Recorder;
use crate::page::{Region, Surface};
use log::Level;
use thiserror::Error;
use time::{error::ComponentRange, Date};

const REQUIRED_REGIONS: [Region; 2] = [Region::Title, Region::Grid];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ViewState {
    Uninitialized,
    Ready,
}

#[derive(Debug, Error)]
pub(crate) enum ViewError {
    #[error("required {0} region not found")]
    MissingSurface(Region),
    #[error(transparent)]
    Unexpected(#[from] ComponentRange),
}

/// A month calendar bound to a [`Surface`].
///
/// The view owns the month being displayed.  Every render asks the [`Clock`]
/// for the current date, recomputes the whole [`MonthGrid`], and replaces the
/// surface's title and grid wholesale.
/// Failures while initializing or rendering are recorded and then dropped;
/// they never reach the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarView<S, R, C> {
    surface: S,
    recorder: R,
    clock: C,
    start: Option<YearMonth>,
    reference: YearMonth,
    state: ViewState,
}

impl<S: Surface, R: Recorder, C: Clock> CalendarView<S, R, C> {
    pub(crate) fn new(surface: S, recorder: R, clock: C) -> Self {
        let reference = YearMonth::containing(clock.today());
        CalendarView {
            surface,
            recorder,
            clock,
            start: None,
            reference,
            state: ViewState::Uninitialized,
        }
    }

    /// Show the month containing `date` on initialization instead of the
    /// current month
    pub(crate) fn start_date(mut self, date: Date) -> Self {
        self.start = Some(YearMonth::containing(date));
        self
    }

    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn recorder(&self) -> &R {
        &self.recorder
    }

    pub(crate) fn reference(&self) -> YearMonth {
        self.reference
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ViewState {
        self.state
    }

    pub(crate) fn initialize(&mut self) {
        if let Err(e) = self.try_initialize() {
            self.report(&e);
        }
    }

    pub(crate) fn render(&mut self) {
        if let Err(e) = self.try_render() {
            self.report(&e);
        }
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), OutOfTimeError> {
        if self.state == ViewState::Ready {
            self.reference = self.reference.previous()?;
            self.render();
        }
        Ok(())
    }

    pub(crate) fn next_month(&mut self) -> Result<(), OutOfTimeError> {
        if self.state == ViewState::Ready {
            self.reference = self.reference.next()?;
            self.render();
        }
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        if self.state == ViewState::Ready {
            self.reference = YearMonth::containing(self.clock.today());
            self.render();
        }
    }

    fn try_initialize(&mut self) -> Result<(), ViewError> {
        self.note("Calendar initializing");
        self.check_regions()?;
        let found = [Region::Title, Region::Grid, Region::Diagnostics]
            .map(|r| {
                let yn = if self.surface.has_region(r) { "yes" } else { "no" };
                format!("{r} {yn}")
            })
            .join(", ");
        self.note(&format!("Display regions found: {found}"));
        self.reference = self
            .start
            .unwrap_or_else(|| YearMonth::containing(self.clock.today()));
        self.try_render()?;
        self.state = ViewState::Ready;
        self.note("Calendar initialization complete");
        Ok(())
    }

    fn try_render(&mut self) -> Result<(), ViewError> {
        self.note("Rendering calendar...");
        // Check up front so that a failure never leaves the title updated
        // but the grid stale
        self.check_regions()?;
        let grid = MonthGrid::compute(self.reference, self.clock.today())?;
        self.note(&format!(
            "Calendar parameters: year={}, month={}, starting weekday={}, total days={}",
            grid.month().year(),
            u8::from(grid.month().month()),
            grid.first_weekday(),
            grid.day_count(),
        ));
        let title = grid.title();
        if let Some(region) = self.surface.title_region() {
            *region = title;
        }
        if let Some(region) = self.surface.grid_region() {
            *region = grid.into_cells();
        }
        self.note("Calendar rendered");
        Ok(())
    }

    fn check_regions(&self) -> Result<(), ViewError> {
        match REQUIRED_REGIONS
            .into_iter()
            .find(|&r| !self.surface.has_region(r))
        {
            Some(r) => Err(ViewError::MissingSurface(r)),
            None => Ok(()),
        }
    }

    fn note(&mut self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn report(&mut self, err: &ViewError) {
        self.emit(Level::Error, &format!("Error: {err}"));
    }

    fn emit(&mut self, level: Level, message: &str) {
        self.recorder.record(level, message);
        if let Some(transcript) = self.surface.diagnostic_region() {
            transcript.push(message.to_owned());
        }
    }
}
