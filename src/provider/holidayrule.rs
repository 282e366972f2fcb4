use std::sync::Arc;

use chrono::Weekday;

use crate::holiday::holiday::{
    Holiday,
    HolidayType
};
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::translations::{
    Translations,
    global_translations
};
use crate::time::calculator;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::relativeweekday::WeekdayDirection;
use crate::time::recurringholiday::weekdayinwindowholiday::WeekdayInWindowHoliday;

use super::context::ProviderContext;
use super::yeargate::YearGate;

/// Names that replace the base names in the years admitted by `gate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    gate: YearGate,
    names: Translations
}

impl Rename {
    pub fn new(gate: YearGate, names: Translations) -> Rename {
        Rename { gate, names }
    }

    pub fn gate(&self) -> &YearGate {
        &self.gate
    }

    pub fn names(&self) -> &Translations {
        &self.names
    }
}

/// One entry of a jurisdiction: which date, which type, in which years, under
/// which names.
#[derive(Debug, Clone)]
pub struct HolidayRule {
    key: String,
    date_rule: Arc<dyn RecurringHoliday>,
    holiday_type: HolidayType,
    gate: YearGate,
    names: Translations,
    renames: Vec<Rename>
}

impl HolidayRule {
    pub fn new(key: &str, date_rule: Arc<dyn RecurringHoliday>) -> HolidayRule {
        HolidayRule {
            key: key.to_owned(),
            date_rule,
            holiday_type: HolidayType::Official,
            gate: YearGate::Always,
            names: Translations::new(),
            renames: Vec::new()
        }
    }

    pub fn fixed_date(key: &str, month: u32, day: u32) -> Result<HolidayRule, HolidayError> {
        Ok(HolidayRule::new(key, Arc::new(FixedDateHoliday::new(month, day)?)))
    }

    pub fn easter_related(key: &str, shift_days: i64) -> HolidayRule {
        HolidayRule::new(key, Arc::new(EasterRelatedHoliday::western(shift_days)))
    }

    pub fn nth_weekday(key: &str, month: u32, n: u8, weekday: Weekday) -> Result<HolidayRule, HolidayError> {
        Ok(HolidayRule::new(key, Arc::new(NthWeekdayHoliday::new(month, n, weekday)?)))
    }

    pub fn last_weekday(key: &str, month: u32, weekday: Weekday) -> Result<HolidayRule, HolidayError> {
        Ok(HolidayRule::new(key, Arc::new(LastWeekdayHoliday::new(month, weekday)?)))
    }

    pub fn weekday_in_window(
        key: &str,
        month: u32,
        day: u32,
        weekday: Weekday,
        direction: WeekdayDirection
    ) -> Result<HolidayRule, HolidayError> {
        let date_rule = WeekdayInWindowHoliday::new(month, day, weekday, direction)?;
        Ok(HolidayRule::new(key, Arc::new(date_rule)))
    }

    pub fn with_type(mut self, holiday_type: HolidayType) -> HolidayRule {
        self.holiday_type = holiday_type;
        self
    }

    /// Narrows the years the rule applies to.
    pub fn with_gate(mut self, gate: YearGate) -> HolidayRule {
        self.gate = self.gate.and(gate);
        self
    }

    pub fn since(self, year: i32) -> HolidayRule {
        self.with_gate(YearGate::Since(year))
    }

    pub fn until(self, year: i32) -> HolidayRule {
        self.with_gate(YearGate::Until(year))
    }

    pub fn with_names(mut self, names: &[(&str, &str)]) -> HolidayRule {
        self.names = self.names.merged_with(&Translations::from_pairs(names));
        self
    }

    pub fn renamed(mut self, gate: YearGate, names: &[(&str, &str)]) -> HolidayRule {
        self.renames.push(Rename::new(gate, Translations::from_pairs(names)));
        self
    }

    pub(crate) fn with_translations(mut self, names: Translations, renames: Vec<Rename>) -> HolidayRule {
        self.names = self.names.merged_with(&names);
        self.renames.extend(renames);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn date_rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.date_rule
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    pub fn gate(&self) -> &YearGate {
        &self.gate
    }

    pub fn renames(&self) -> &[Rename] {
        &self.renames
    }

    pub fn is_active(&self, year: i32) -> bool {
        self.gate.admits(year)
    }

    /// Global names, overridden by the rule's own names, overridden by the
    /// first rename admitting `year`.
    pub fn translations_for(&self, year: i32) -> Translations {
        let base = global_translations(&self.key).merged_with(&self.names);
        match self.renames.iter().find(|r| r.gate.admits(year)) {
            Some(rename) => base.merged_with(&rename.names),
            None => base
        }
    }

    /// The rule's holiday in the context's year, `None` when gated out or
    /// when the date rule yields nothing.
    pub fn calculate(&self, ctx: &ProviderContext) -> Result<Option<Holiday>, HolidayError> {
        if !self.is_active(ctx.year()) {
            return Ok(None);
        }
        calculator::from_recurring_holiday(
            ctx,
            &self.key,
            self.date_rule.as_ref(),
            self.translations_for(ctx.year()),
            self.holiday_type
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ctx(year: i32, locale: &str) -> ProviderContext {
        ProviderContext::new(year, chrono_tz::Europe::Stockholm, locale).unwrap()
    }

    fn flag_day() -> HolidayRule {
        HolidayRule::fixed_date("nationalDay", 6, 6)
            .unwrap()
            .since(1916)
            .renamed(YearGate::Until(1982), &[("sv_SE", "Svenska flaggans dag")])
            .renamed(YearGate::Since(1983), &[("sv_SE", "Sveriges nationaldag")])
    }

    #[test]
    fn gated_rule_emits_nothing() {
        assert_eq!(flag_day().calculate(&ctx(1915, "sv_SE")), Ok(None));
    }

    #[test]
    fn rename_depends_on_year() {
        let holiday = flag_day().calculate(&ctx(1950, "sv_SE")).unwrap().unwrap();
        assert_eq!(holiday.name(), "Svenska flaggans dag");
        assert_eq!(holiday.date(), NaiveDate::from_ymd_opt(1950, 6, 6).unwrap());

        let holiday = flag_day().calculate(&ctx(1983, "sv_SE")).unwrap().unwrap();
        assert_eq!(holiday.name(), "Sveriges nationaldag");

        let holiday = flag_day().calculate(&ctx(1950, "en_US")).unwrap().unwrap();
        assert_eq!(holiday.name(), "National Day");
    }

    #[test]
    fn builders_keep_defaults_unless_overridden() {
        let rule = HolidayRule::easter_related("corpusChristi", 60)
            .with_type(HolidayType::Other)
            .with_gate(YearGate::Outside(2013, 2015));
        assert_eq!(rule.holiday_type(), HolidayType::Other);
        assert!(rule.is_active(2012));
        assert!(!rule.is_active(2014));

        let custom = HolidayRule::fixed_date("foundersDay", 3, 14).unwrap().with_names(&[("en_US", "Founders' Day")]);
        assert_eq!(custom.holiday_type(), HolidayType::Official);
        assert_eq!(custom.translations_for(2020).get("en_US"), Some("Founders' Day"));
    }
}
