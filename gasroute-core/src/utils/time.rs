use time::OffsetDateTime;

/// Provides the way to read wall clock time in generic way.
///
/// Traffic multipliers are bucketed by hour and weekday, so production reads the real clock
/// while tests pin a fixed instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;

    /// Returns the current hour of day in [0, 23].
    fn hour(&self) -> u8 {
        self.now().hour()
    }

    /// Returns the current weekday index, zero based from Monday.
    fn weekday(&self) -> u8 {
        self.now().weekday().number_days_from_monday()
    }
}

/// A default clock implementation reading UTC wall time.
#[derive(Default)]
pub struct DefaultClock {}

impl Clock for DefaultClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
