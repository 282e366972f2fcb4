use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holiday::holidayerror::HolidayError;

use super::recurringholiday::RecurringHoliday;

/// The last `weekday` of `month`, e.g. the last Monday of May.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Result<LastWeekdayHoliday, HolidayError> {
        if !(1..=12).contains(&month) {
            Err(HolidayError::InvalidArgument(format!("month {} is not within 1..=12", month)))
        } else {
            Ok(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_date(&self, year: i32) -> Option<NaiveDate> {
        let first_of_next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, self.month + 1, 1)?
        };

        let current_weekday = first_of_next_month.weekday();
        let days_back = (current_weekday.num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7;

        // Same weekday as the 1st of next month: one full week back
        let days_back = if days_back == 0 { 7 } else { days_back as u64 };

        first_of_next_month.checked_sub_days(Days::new(days_back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_last_occurrence() {
        let memorial_day = LastWeekdayHoliday::new(5, Weekday::Mon).unwrap();
        assert_eq!(memorial_day.get_date(2021), NaiveDate::from_ymd_opt(2021, 5, 31));
        assert_eq!(memorial_day.get_date(2020), NaiveDate::from_ymd_opt(2020, 5, 25));
    }

    #[test]
    fn handles_december_and_month_starting_on_target_weekday() {
        // 2022-01-01 is a Saturday
        let last_saturday = LastWeekdayHoliday::new(12, Weekday::Sat).unwrap();
        assert_eq!(last_saturday.get_date(2021), NaiveDate::from_ymd_opt(2021, 12, 25));
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(LastWeekdayHoliday::new(13, Weekday::Mon).is_err());
    }
}
