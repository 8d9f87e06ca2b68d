use std::fmt;

/// A calendar date as written in the source text.
///
/// The parser does not validate calendar correctness: `2015-02-30` parses
/// successfully, since that is a downstream concern (see [`Date::to_naive_date`]
/// for an opt-in, fallible way to get a validated date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Date {
        Date { year, month, day }
    }

    /// Attempts to convert to a calendar-validated [`chrono::NaiveDate`].
    ///
    /// Returns `None` for dates that were accepted by the grammar but do not
    /// exist on the calendar (e.g. `2015-02-30`). The parser itself never
    /// calls this; it exists purely as a convenience for downstream
    /// consumers that do want calendar validation.
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
