use crate::holiday::holidayerror::HolidayError;

use super::holidayrule::HolidayRule;

pub fn new_years_day() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("newYearsDay", 1, 1)
}

/// 1 May, Labour Day in much of Europe.
pub fn international_workers_day() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("internationalWorkersDay", 5, 1)
}
