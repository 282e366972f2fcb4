use chrono::{
    NaiveDate,
    Weekday
};

use crate::holiday::holidayerror::HolidayError;

use super::fixeddateholiday::FixedDateHoliday;
use super::recurringholiday::RecurringHoliday;
use super::relativeweekday::{
    WeekdayDirection,
    resolve_weekday
};

/// A weekday searched from a fixed anchor date, e.g. "the Saturday between
/// 20 and 26 June" is `(6, 20, Saturday, NextOrSame)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayInWindowHoliday {
    anchor: FixedDateHoliday,
    weekday: Weekday,
    direction: WeekdayDirection
}

impl WeekdayInWindowHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday, direction: WeekdayDirection) -> Result<WeekdayInWindowHoliday, HolidayError> {
        Ok(WeekdayInWindowHoliday {
            anchor: FixedDateHoliday::new(month, day)?,
            weekday,
            direction
        })
    }

    pub fn month(&self) -> u32 {
        self.anchor.month()
    }

    pub fn day(&self) -> u32 {
        self.anchor.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn direction(&self) -> WeekdayDirection {
        self.direction
    }
}

impl RecurringHoliday for WeekdayInWindowHoliday {
    fn get_date(&self, year: i32) -> Option<NaiveDate> {
        let anchor = self.anchor.get_date(year)?;
        resolve_weekday(anchor, self.weekday, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn midsummer_saturday() {
        let midsummer = WeekdayInWindowHoliday::new(6, 20, Weekday::Sat, WeekdayDirection::NextOrSame).unwrap();
        assert_eq!(midsummer.get_date(2020), Some(date(2020, 6, 20)));
        assert_eq!(midsummer.get_date(2021), Some(date(2021, 6, 26)));
        assert_eq!(midsummer.get_date(2022), Some(date(2022, 6, 25)));
    }

    #[test]
    fn all_saints_saturday_may_fall_in_november() {
        let all_saints = WeekdayInWindowHoliday::new(10, 31, Weekday::Sat, WeekdayDirection::NextOrSame).unwrap();
        assert_eq!(all_saints.get_date(2020), Some(date(2020, 10, 31)));
        assert_eq!(all_saints.get_date(2021), Some(date(2021, 11, 6)));
    }

    #[test]
    fn invalid_anchor_is_rejected() {
        assert!(WeekdayInWindowHoliday::new(2, 30, Weekday::Sat, WeekdayDirection::NextOrSame).is_err());
    }
}
