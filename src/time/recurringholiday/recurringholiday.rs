use std::fmt::Debug;

use chrono::{Datelike, NaiveDate};

/// A yearly date rule. Rules are pure: the same year always yields the same
/// date.
pub trait RecurringHoliday: Debug + Send + Sync {

    /// Date of the rule's holiday for `year`, or `None` when the rule yields
    /// no date that year (Feb 29 outside leap years, a 5th weekday that does
    /// not exist, a year outside the computable range).
    fn get_date(&self, year: i32) -> Option<NaiveDate>;

    /// Only dates anchored in `d`'s own year are considered.
    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_date(d.year()) == Some(*d)
    }
}
