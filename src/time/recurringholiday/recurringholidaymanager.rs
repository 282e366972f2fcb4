use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use serde_json;

use crate::manager::managererror::{ManagerError, parse_json_value};

use super::easterrelatedholiday::{
    EasterRelatedHoliday,
    EasterType
};
use super::fixeddateholiday::FixedDateHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;
use super::relativeweekday::WeekdayDirection;
use super::weekdayinwindowholiday::WeekdayInWindowHoliday;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    #[serde(default)]
    easter_type: EasterType,
    shift_days: i64
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.easter_type, json_prop.shift_days)))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday
}

fn last_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(FixedDateHoliday::new(json_prop.month, json_prop.day)?))
}

#[derive(Deserialize)]
struct WeekdayInWindowHolidayJsonProp {
    month: u32,
    day: u32,
    weekday: Weekday,
    #[serde(default)]
    direction: WeekdayDirection
}

fn weekday_in_window_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: WeekdayInWindowHolidayJsonProp = parse_json_value(json)?;
    let holiday = WeekdayInWindowHoliday::new(
        json_prop.month,
        json_prop.day,
        json_prop.weekday,
        json_prop.direction
    )?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum RuleType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday,
    WeekdayInWindow
}

#[derive(Deserialize)]
struct RuleTypedObject {
    rule_type: RuleType
}

/// Builds a date rule from a JSON object tagged with `rule_type`.
pub fn recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let rule_type_obj: RuleTypedObject = parse_json_value(json.clone())?;
    match rule_type_obj.rule_type {
        RuleType::EasterRelated   => easter_related_holiday_from_json(json),
        RuleType::FixedDate       => fixed_date_holiday_from_json(json),
        RuleType::LastWeekday     => last_weekday_from_json(json),
        RuleType::NthWeekday      => nth_weekday_from_json(json),
        RuleType::WeekdayInWindow => weekday_in_window_from_json(json)
    }
}
