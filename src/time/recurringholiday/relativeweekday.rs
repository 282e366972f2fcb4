use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Deserialize,
    Serialize
};

/// Direction in which a weekday is searched from an anchor date.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum WeekdayDirection {
    /// The anchor itself or one of the six days after it.
    #[default]
    NextOrSame,
    /// One of the seven days after the anchor.
    StrictlyNext,
    /// The anchor itself or one of the six days before it.
    PreviousOrSame,
    /// One of the seven days before the anchor.
    StrictlyPrevious
}

impl WeekdayDirection {
    /// First and last day of the search window, as day offsets from the anchor.
    pub fn window(&self) -> (i64, i64) {
        match self {
            WeekdayDirection::NextOrSame => (0, 6),
            WeekdayDirection::StrictlyNext => (1, 7),
            WeekdayDirection::PreviousOrSame => (-6, 0),
            WeekdayDirection::StrictlyPrevious => (-7, -1)
        }
    }
}

fn shift_days(d: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        d.checked_add_days(Days::new(days as u64))
    } else {
        d.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Resolves `weekday` relative to `anchor`.
///
/// The naive candidate is the `weekday` of the anchor's own Monday-based
/// week. When it falls outside the direction's 7-day window it is moved by
/// exactly one week towards the window, so the result is always inside
/// `anchor + window()`. The result may lie in another year than the anchor.
pub fn resolve_weekday(anchor: NaiveDate, weekday: Weekday, direction: WeekdayDirection) -> Option<NaiveDate> {
    let (first, last) = direction.window();
    let window_start = shift_days(anchor, first)?;
    let window_end = shift_days(anchor, last)?;

    let offset = weekday.num_days_from_monday() as i64 - anchor.weekday().num_days_from_monday() as i64;
    let candidate = shift_days(anchor, offset)?;

    if candidate < window_start {
        shift_days(candidate, 7)
    } else if candidate > window_end {
        shift_days(candidate, -7)
    } else {
        Some(candidate)
    }
}
