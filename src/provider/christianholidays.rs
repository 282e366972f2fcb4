use chrono::Weekday;

use crate::holiday::holiday::HolidayType;
use crate::holiday::holidayerror::HolidayError;
use crate::time::recurringholiday::relativeweekday::WeekdayDirection;

use super::holidayrule::HolidayRule;

pub fn easter() -> HolidayRule {
    HolidayRule::easter_related("easter", 0)
}

pub fn maundy_thursday() -> HolidayRule {
    HolidayRule::easter_related("maundyThursday", -3)
}

pub fn good_friday() -> HolidayRule {
    HolidayRule::easter_related("goodFriday", -2)
}

pub fn easter_monday() -> HolidayRule {
    HolidayRule::easter_related("easterMonday", 1)
}

pub fn ascension_day() -> HolidayRule {
    HolidayRule::easter_related("ascensionDay", 39)
}

pub fn pentecost() -> HolidayRule {
    HolidayRule::easter_related("pentecost", 49)
}

pub fn pentecost_monday() -> HolidayRule {
    HolidayRule::easter_related("pentecostMonday", 50)
}

pub fn corpus_christi() -> HolidayRule {
    HolidayRule::easter_related("corpusChristi", 60)
}

pub fn epiphany() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("epiphany", 1, 6)
}

pub fn assumption_of_mary() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("assumptionOfMary", 8, 15)
}

pub fn all_saints_day() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("allSaintsDay", 11, 1)
}

/// Nordic All Saints' Day: the Saturday between 31 October and 6 November.
pub fn all_saints_saturday() -> Result<HolidayRule, HolidayError> {
    HolidayRule::weekday_in_window("allSaintsDay", 10, 31, Weekday::Sat, WeekdayDirection::NextOrSame)
}

pub fn st_johns_day() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("stJohnsDay", 6, 24)
}

/// Nordic Midsummer Day: the Saturday between 20 and 26 June.
pub fn st_johns_saturday() -> Result<HolidayRule, HolidayError> {
    HolidayRule::weekday_in_window("stJohnsDay", 6, 20, Weekday::Sat, WeekdayDirection::NextOrSame)
}

pub fn immaculate_conception() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("immaculateConception", 12, 8)
}

/// An observance by default.
pub fn christmas_eve() -> Result<HolidayRule, HolidayError> {
    Ok(HolidayRule::fixed_date("christmasEve", 12, 24)?.with_type(HolidayType::Observance))
}

pub fn christmas_day() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("christmasDay", 12, 25)
}

pub fn second_christmas_day() -> Result<HolidayRule, HolidayError> {
    HolidayRule::fixed_date("secondChristmasDay", 12, 26)
}
