use chrono::{
    NaiveDate,
    Weekday
};

use crate::holiday::holiday::{
    Holiday,
    HolidayType
};
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::translations::{
    Translations,
    global_translations
};
use crate::provider::context::ProviderContext;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::relativeweekday::{
    WeekdayDirection,
    resolve_weekday
};

pub fn holiday_at(
    ctx: &ProviderContext,
    key: &str,
    translations: Translations,
    date: NaiveDate,
    holiday_type: HolidayType
) -> Result<Holiday, HolidayError> {
    Holiday::new(key, translations, date, ctx.timezone(), ctx.locale(), holiday_type)
}

/// Evaluates a date rule for the context's year. `Ok(None)` when the rule
/// has no date that year.
pub fn from_recurring_holiday(
    ctx: &ProviderContext,
    key: &str,
    rule: &dyn RecurringHoliday,
    translations: Translations,
    holiday_type: HolidayType
) -> Result<Option<Holiday>, HolidayError> {
    rule.get_date(ctx.year())
        .map(|date| holiday_at(ctx, key, translations, date, holiday_type))
        .transpose()
}

/// Holiday on `month`/`day` of the context's year. Fails with
/// `InvalidDate` for dates that do not exist in that year.
pub fn fixed_date(
    ctx: &ProviderContext,
    key: &str,
    month: u32,
    day: u32,
    holiday_type: HolidayType
) -> Result<Holiday, HolidayError> {
    let date = NaiveDate::from_ymd_opt(ctx.year(), month, day)
        .ok_or_else(|| HolidayError::invalid_date(ctx.year(), month, day))?;
    holiday_at(ctx, key, global_translations(key), date, holiday_type)
}

/// Holiday `shift_days` away from (Western) Easter Sunday.
pub fn easter_relative(
    ctx: &ProviderContext,
    key: &str,
    shift_days: i64,
    holiday_type: HolidayType
) -> Result<Holiday, HolidayError> {
    let date = EasterRelatedHoliday::western(shift_days)
        .get_date(ctx.year())
        .ok_or_else(|| HolidayError::InvalidDate(format!("Easter {:+} days in {}", shift_days, ctx.year())))?;
    holiday_at(ctx, key, global_translations(key), date, holiday_type)
}

/// Holiday on the `weekday` found from `month`/`day` in `direction`.
pub fn relative_weekday(
    ctx: &ProviderContext,
    key: &str,
    month: u32,
    day: u32,
    weekday: Weekday,
    direction: WeekdayDirection,
    holiday_type: HolidayType
) -> Result<Holiday, HolidayError> {
    let anchor = NaiveDate::from_ymd_opt(ctx.year(), month, day)
        .ok_or_else(|| HolidayError::invalid_date(ctx.year(), month, day))?;
    let date = resolve_weekday(anchor, weekday, direction)
        .ok_or_else(|| HolidayError::InvalidDate(format!("{:?} {:?} from {}", weekday, direction, anchor)))?;
    holiday_at(ctx, key, global_translations(key), date, holiday_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(year: i32) -> ProviderContext {
        ProviderContext::new(year, chrono_tz::Europe::Stockholm, "sv_SE").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_date_builds_a_named_holiday() {
        let holiday = fixed_date(&ctx(2020), "christmasEve", 12, 24, HolidayType::Official).unwrap();
        assert_eq!(holiday.date(), date(2020, 12, 24));
        assert_eq!(holiday.name(), "julafton");
        assert_eq!(holiday.timezone(), chrono_tz::Europe::Stockholm);
        assert_eq!(holiday.holiday_type(), HolidayType::Official);
    }

    #[test]
    fn fixed_date_rejects_impossible_dates() {
        assert_eq!(
            fixed_date(&ctx(2020), "x", 2, 30, HolidayType::Official),
            Err(HolidayError::InvalidDate("2020-02-30".to_owned()))
        );
        assert!(fixed_date(&ctx(2021), "x", 2, 29, HolidayType::Official).is_err());
        assert!(fixed_date(&ctx(2020), "x", 2, 29, HolidayType::Official).is_ok());
    }

    #[test]
    fn easter_relative_offsets() {
        let ctx = ctx(2020);
        assert_eq!(easter_relative(&ctx, "goodFriday", -2, HolidayType::Official).unwrap().date(), date(2020, 4, 10));
        assert_eq!(easter_relative(&ctx, "ascensionDay", 39, HolidayType::Official).unwrap().date(), date(2020, 5, 21));
        assert_eq!(easter_relative(&ctx, "pentecost", 49, HolidayType::Official).unwrap().date(), date(2020, 5, 31));
    }

    #[test]
    fn relative_weekday_stays_in_window() {
        let holiday = relative_weekday(&ctx(2021), "allSaintsDay", 10, 31, Weekday::Sat, WeekdayDirection::NextOrSame, HolidayType::Official).unwrap();
        assert_eq!(holiday.date(), date(2021, 11, 6));
        assert_eq!(holiday.name(), "alla helgons dag");
    }

    #[test]
    fn missing_rule_date_is_none() {
        let leap_day = crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday::new(2, 29).unwrap();
        let result = from_recurring_holiday(&ctx(2021), "leapDay", &leap_day, Translations::new(), HolidayType::Other);
        assert_eq!(result, Ok(None));
    }
}
