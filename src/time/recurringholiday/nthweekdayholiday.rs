use chrono::{
    NaiveDate, 
    Weekday
};

use crate::holiday::holidayerror::HolidayError;

use super::recurringholiday::RecurringHoliday;

/// The `n`-th `weekday` of `month`, e.g. the 4th Thursday of November.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayHoliday, HolidayError> {
        if !(1..=12).contains(&month) {
            Err(HolidayError::InvalidArgument(format!("month {} is not within 1..=12", month)))
        } else if !(1..=5).contains(&n) {
            Err(HolidayError::InvalidArgument(format!("weekday occurrence {} is not within 1..=5", n)))
        } else {
            Ok(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nth_occurrence() {
        let thanksgiving = NthWeekdayHoliday::new(11, 4, Weekday::Thu).unwrap();
        assert_eq!(thanksgiving.get_date(2021), NaiveDate::from_ymd_opt(2021, 11, 25));
        assert_eq!(thanksgiving.get_date(2020), NaiveDate::from_ymd_opt(2020, 11, 26));

        let labour_day = NthWeekdayHoliday::new(9, 1, Weekday::Mon).unwrap();
        assert_eq!(labour_day.get_date(2021), NaiveDate::from_ymd_opt(2021, 9, 6));
    }

    #[test]
    fn missing_fifth_occurrence_yields_nothing() {
        // February 2021 has exactly four Mondays
        let fifth_monday = NthWeekdayHoliday::new(2, 5, Weekday::Mon).unwrap();
        assert_eq!(fifth_monday.get_date(2021), None);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(NthWeekdayHoliday::new(0, 1, Weekday::Mon).is_err());
        assert!(NthWeekdayHoliday::new(1, 0, Weekday::Mon).is_err());
        assert!(NthWeekdayHoliday::new(1, 6, Weekday::Mon).is_err());
    }
}
