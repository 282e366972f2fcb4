use std::collections::HashMap;

use chrono::Weekday;

use crate::holiday::holiday::HolidayType;
use crate::holiday::holidayerror::HolidayError;
use crate::provider::christianholidays;
use crate::provider::commonholidays;
use crate::provider::holidayrule::HolidayRule;
use crate::provider::jurisdiction::Jurisdiction;
use crate::provider::substitution::SubstitutionRule;
use crate::provider::yeargate::YearGate;
use crate::time::recurringholiday::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

pub const ID: &str = "US";
pub const NAME: &str = "United States";
pub const TIMEZONE: &str = "America/New_York";

// Uniform Monday Holiday Act
const MONDAY_HOLIDAYS_FROM: i32 = 1968;

fn washingtons_birthday() -> Result<Vec<HolidayRule>, HolidayError> {
    Ok(vec![
        HolidayRule::fixed_date("washingtonsBirthday", 2, 22)?.with_gate(YearGate::Between(1879, MONDAY_HOLIDAYS_FROM - 1)),
        HolidayRule::nth_weekday("washingtonsBirthday", 2, 3, Weekday::Mon)?.since(MONDAY_HOLIDAYS_FROM)
    ])
}

fn memorial_day() -> Result<Vec<HolidayRule>, HolidayError> {
    Ok(vec![
        HolidayRule::fixed_date("memorialDay", 5, 30)?.with_gate(YearGate::Between(1865, MONDAY_HOLIDAYS_FROM - 1)),
        HolidayRule::last_weekday("memorialDay", 5, Weekday::Mon)?.since(MONDAY_HOLIDAYS_FROM)
    ])
}

fn columbus_day() -> Result<Vec<HolidayRule>, HolidayError> {
    Ok(vec![
        HolidayRule::fixed_date("columbusDay", 10, 12)?.with_gate(YearGate::Between(1937, 1969)),
        HolidayRule::nth_weekday("columbusDay", 10, 2, Weekday::Mon)?.since(1970)
    ])
}

fn veterans_day() -> Result<HolidayRule, HolidayError> {
    Ok(HolidayRule::fixed_date("veteransDay", 11, 11)?
        .since(1919)
        .renamed(YearGate::Until(1953), &[("en_US", "Armistice Day")]))
}

pub fn substitution() -> Result<SubstitutionRule, HolidayError> {
    let adjustment = WeekendAdjustmentRule::new(&HashMap::from([
        (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
        (Weekday::Sun, WeekendAdjustment::NextWeekday)
    ]))?;
    Ok(SubstitutionRule::new(adjustment, vec![HolidayType::Official]))
}

/// Federal holidays. Official holidays on a Saturday are observed the
/// Friday before, on a Sunday the Monday after.
pub fn jurisdiction() -> Result<Jurisdiction, HolidayError> {
    let mut rules = vec![
        commonholidays::new_years_day()?,
        HolidayRule::nth_weekday("martinLutherKingDay", 1, 3, Weekday::Mon)?.since(1986)
    ];
    rules.extend(washingtons_birthday()?);
    rules.extend(memorial_day()?);
    rules.extend([
        HolidayRule::fixed_date("independenceDay", 7, 4)?.since(1776),
        HolidayRule::nth_weekday("labourDay", 9, 1, Weekday::Mon)?.since(1887)
    ]);
    rules.extend(columbus_day()?);
    rules.extend([
        veterans_day()?,
        HolidayRule::nth_weekday("thanksgivingDay", 11, 4, Weekday::Thu)?.since(1863),
        christianholidays::christmas_day()?
    ]);
    Ok(Jurisdiction::new(ID, NAME, TIMEZONE, rules)?.with_substitution(substitution()?))
}
