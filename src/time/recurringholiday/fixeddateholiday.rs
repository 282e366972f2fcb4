use chrono::NaiveDate;

use crate::holiday::holidayerror::HolidayError;

use super::recurringholiday::RecurringHoliday;

// Leap year, so that Feb 29 passes validation.
const VALIDATION_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Result<FixedDateHoliday, HolidayError> {
        NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day)
            .map(|_| FixedDateHoliday { month, day })
            .ok_or_else(|| HolidayError::invalid_month_day(month, day))
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
