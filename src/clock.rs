use time::{error::IndeterminateOffset, Date, OffsetDateTime, UtcOffset};

/// Source of the current date, consulted every time a calendar is rendered
pub(crate) trait Clock {
    fn today(&self) -> Date;
}

/// A fixed date is a clock that never moves
impl Clock for Date {
    fn today(&self) -> Date {
        *self
    }
}

/// The system clock in the local time zone.
///
/// The local offset can only be determined reliably while the process is
/// single-threaded, so the offset found at startup is kept as a fallback for
/// when a later lookup fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LocalClock {
    offset: UtcOffset,
}

impl LocalClock {
    pub(crate) fn new() -> Result<LocalClock, IndeterminateOffset> {
        Ok(LocalClock {
            offset: UtcOffset::current_local_offset()?,
        })
    }
}

impl Clock for LocalClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc().to_offset(self.offset))
            .date()
    }
}
