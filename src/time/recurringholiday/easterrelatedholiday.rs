use chrono::{
    Days,
    NaiveDate
};
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

/// First year of the Gregorian computus. Earlier Western Easter dates use the
/// Julian computus.
pub const FIRST_GREGORIAN_EASTER_YEAR: i32 = 1583;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum EasterType {
    #[default]
    Western,
    Orthodox
}

/// Days between 21 March and Easter Sunday in the Julian calendar.
fn julian_days_after_march_21(year: i32) -> i64 {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    (d + e + 1) as i64
}

/// Anonymous Gregorian computus, returns (month, day).
fn gregorian_easter(year: i32) -> (u32, u32) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    (month as u32, day as u32)
}

/// Easter Sunday of `year` as a (proleptic) Gregorian date.
///
/// Western Easter before 1583 counts the Julian days after 21 March from
/// 21 March of the Gregorian calendar. Orthodox Easter is the Julian date
/// shifted by the Julian/Gregorian difference of its century.
pub fn easter_sunday(year: i32, easter_type: EasterType) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }

    let march_21 = NaiveDate::from_ymd_opt(year, 3, 21)?;
    match easter_type {
        EasterType::Western if year >= FIRST_GREGORIAN_EASTER_YEAR => {
            let (month, day) = gregorian_easter(year);
            NaiveDate::from_ymd_opt(year, month, day)
        },
        EasterType::Western => {
            march_21.checked_add_days(Days::new(julian_days_after_march_21(year) as u64))
        },
        EasterType::Orthodox => {
            let century = year / 100;
            let calendar_gap = (century - century / 4 - 2) as i64;
            let shift = julian_days_after_march_21(year) + calendar_gap;
            if shift >= 0 {
                march_21.checked_add_days(Days::new(shift as u64))
            } else {
                march_21.checked_sub_days(Days::new(shift.unsigned_abs()))
            }
        }
    }
}

/// A day `shift_days` away from Easter Sunday: Good Friday is -2,
/// Ascension +39, Pentecost +49.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            easter_type,
            shift_days
        }
    }

    pub fn western(shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday::new(EasterType::Western, shift_days)
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_date(&self, year: i32) -> Option<NaiveDate> {
        let easter_day = easter_sunday(year, self.easter_type)?;
        if self.shift_days >= 0 {
            easter_day.checked_add_days(Days::new(self.shift_days as u64))
        } else {
            easter_day.checked_sub_days(Days::new(self.shift_days.unsigned_abs()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn western_easter_known_dates() {
        let known = [
            (1583, date(1583, 4, 10)),
            (1818, date(1818, 3, 22)),
            (1943, date(1943, 4, 25)),
            (2000, date(2000, 4, 23)),
            (2008, date(2008, 3, 23)),
            (2019, date(2019, 4, 21)),
            (2020, date(2020, 4, 12)),
            (2024, date(2024, 3, 31)),
            (2038, date(2038, 4, 25))
        ];
        for (year, expected) in known {
            assert_eq!(easter_sunday(year, EasterType::Western), Some(expected), "year {}", year);
        }
    }

    #[test]
    fn orthodox_easter_known_dates() {
        assert_eq!(easter_sunday(2021, EasterType::Orthodox), Some(date(2021, 5, 2)));
        assert_eq!(easter_sunday(2023, EasterType::Orthodox), Some(date(2023, 4, 16)));
        assert_eq!(easter_sunday(2024, EasterType::Orthodox), Some(date(2024, 5, 5)));
        // Same day as Western Easter
        assert_eq!(easter_sunday(2017, EasterType::Orthodox), Some(date(2017, 4, 16)));
    }

    #[test]
    fn julian_computus_before_1583() {
        // Julian Easter 1500 fell on 19 April (Julian), 21 March + 29 days
        assert_eq!(easter_sunday(1500, EasterType::Western), Some(date(1500, 4, 19)));
        assert_eq!(easter_sunday(0, EasterType::Western), None);
    }

    #[test]
    fn shifts_cross_month_boundaries() {
        let good_friday = EasterRelatedHoliday::western(-2);
        let ascension = EasterRelatedHoliday::western(39);
        let pentecost = EasterRelatedHoliday::western(49);
        // Easter 2008 was on 23 March
        assert_eq!(good_friday.get_date(2008), Some(date(2008, 3, 21)));
        assert_eq!(ascension.get_date(2008), Some(date(2008, 5, 1)));
        assert_eq!(pentecost.get_date(2008), Some(date(2008, 5, 11)));
        // Easter 2038 was on 25 April
        assert_eq!(pentecost.get_date(2038), Some(date(2038, 6, 13)));
    }
}
