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
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;

use super::context::ProviderContext;

pub const SUBSTITUTE_KEY_PREFIX: &str = "substituteHoliday:";

/// Emits an observed day for holidays falling on a day the adjustment rule
/// moves (typically a weekend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    adjustment: WeekendAdjustmentRule,
    applies_to: Vec<HolidayType>,
    // "{0}" stands for the substituted holiday's name
    templates: Translations
}

impl SubstitutionRule {
    pub fn new(adjustment: WeekendAdjustmentRule, applies_to: Vec<HolidayType>) -> SubstitutionRule {
        SubstitutionRule {
            adjustment,
            applies_to,
            templates: global_translations("substituteHoliday")
        }
    }

    pub fn with_templates(mut self, templates: Translations) -> SubstitutionRule {
        self.templates = self.templates.merged_with(&templates);
        self
    }

    pub fn adjustment(&self) -> &WeekendAdjustmentRule {
        &self.adjustment
    }

    pub fn applies_to(&self) -> &[HolidayType] {
        &self.applies_to
    }

    fn translations_for(&self, holiday: &Holiday) -> Translations {
        let mut names = Translations::new();
        for (locale, template) in self.templates.iter() {
            names.insert(locale, &template.replace("{0}", holiday.name_in(locale)));
        }
        names
    }

    /// The substitute for `holiday`, keyed `substituteHoliday:<key>` and of the
    /// same type. It stays with the original's year even when the observed
    /// date falls into the previous or next one.
    pub fn substitute(&self, holiday: &Holiday, ctx: &ProviderContext) -> Result<Option<Holiday>, HolidayError> {
        if !self.applies_to.contains(&holiday.holiday_type()) {
            return Ok(None);
        }
        match self.adjustment.adjust(holiday.date()) {
            Some(observed) => {
                let key = format!("{}{}", SUBSTITUTE_KEY_PREFIX, holiday.key());
                let substitute = calculator::holiday_at(
                    ctx,
                    &key,
                    self.translations_for(holiday),
                    observed,
                    holiday.holiday_type()
                )?;
                Ok(Some(substitute))
            },
            None => Ok(None)
        }
    }
}
