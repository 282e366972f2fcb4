use chrono_tz::Tz;
use tracing::{
    debug,
    trace
};

use crate::holiday::holidayerror::HolidayError;
use crate::time::calendar::weekendmask::WeekendMask;

use super::context::{
    ProviderContext,
    parse_timezone
};
use super::holidayrule::HolidayRule;
use super::holidayset::HolidaySet;
use super::substitution::SubstitutionRule;

/// A country (or region) provider: its rules, default timezone, weekend and
/// optional substitution policy.
#[derive(Debug, Clone)]
pub struct Jurisdiction {
    id: String,
    name: String,
    timezone: Tz,
    weekends: WeekendMask,
    rules: Vec<HolidayRule>,
    substitution: Option<SubstitutionRule>
}

impl Jurisdiction {
    pub fn new(id: &str, name: &str, timezone: &str, rules: Vec<HolidayRule>) -> Result<Jurisdiction, HolidayError> {
        if id.is_empty() {
            return Err(HolidayError::InvalidArgument("jurisdiction id must not be empty".to_owned()));
        }
        Ok(Jurisdiction {
            id: id.to_owned(),
            name: name.to_owned(),
            timezone: parse_timezone(timezone)?,
            weekends: WeekendMask::default(),
            rules,
            substitution: None
        })
    }

    pub fn with_weekends(mut self, weekends: WeekendMask) -> Jurisdiction {
        self.weekends = weekends;
        self
    }

    pub fn with_substitution(mut self, substitution: SubstitutionRule) -> Jurisdiction {
        self.substitution = Some(substitution);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    pub fn substitution(&self) -> Option<&SubstitutionRule> {
        self.substitution.as_ref()
    }

    /// Holidays of `year` in the jurisdiction's own timezone.
    pub fn holidays(&self, year: i32, locale: &str) -> Result<HolidaySet, HolidayError> {
        self.holidays_in(year, locale, None)
    }

    /// Holidays of `year`, evaluated in `timezone` when given. The same
    /// inputs always produce the same set.
    pub fn holidays_in(&self, year: i32, locale: &str, timezone: Option<&str>) -> Result<HolidaySet, HolidayError> {
        let timezone = match timezone {
            Some(name) => parse_timezone(name)?,
            None => self.timezone
        };
        let ctx = ProviderContext::new(year, timezone, locale)?;
        debug!(jurisdiction = %self.id, year, locale, timezone = %timezone, "computing holidays");

        let mut set = HolidaySet::new(&self.id, &ctx, self.weekends);
        for rule in self.rules.iter() {
            if let Some(holiday) = rule.calculate(&ctx)? {
                trace!(key = holiday.key(), date = %holiday.date(), "holiday");
                set.insert(holiday)?;
            }
        }

        if let Some(substitution) = self.substitution.as_ref() {
            let mut substitutes = Vec::new();
            for holiday in set.iter() {
                if let Some(substitute) = substitution.substitute(holiday, &ctx)? {
                    substitutes.push(substitute);
                }
            }
            for substitute in substitutes {
                trace!(key = substitute.key(), date = %substitute.date(), "substitute");
                set.insert(substitute)?;
            }
        }

        debug!(jurisdiction = %self.id, year, count = set.count(), "holidays computed");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::holiday::holiday::HolidayType;
    use crate::provider::commonholidays;
    use crate::provider::yeargate::YearGate;
    use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Jurisdiction {
        let rules = vec![
            commonholidays::new_years_day().unwrap(),
            HolidayRule::fixed_date("foundersDay", 3, 14)
                .unwrap()
                .since(1950)
                .with_names(&[("en_US", "Founders' Day")])
        ];
        Jurisdiction::new("XX", "Example", "UTC", rules).unwrap()
    }

    #[test]
    fn evaluates_active_rules() {
        let set = sample().holidays(2020, "en_US").unwrap();
        assert_eq!(set.count(), 2);
        assert_eq!(set.get("foundersDay").unwrap().name(), "Founders' Day");
        assert_eq!(set.jurisdiction_id(), "XX");

        let set = sample().holidays(1949, "en_US").unwrap();
        assert_eq!(set.holiday_names(), vec!["newYearsDay"]);
    }

    #[test]
    fn timezone_override_is_applied() {
        let set = sample().holidays_in(2020, "en_US", Some("Asia/Tokyo")).unwrap();
        assert_eq!(set.timezone(), chrono_tz::Asia::Tokyo);
        assert_eq!(set.get("newYearsDay").unwrap().timezone(), chrono_tz::Asia::Tokyo);
        assert!(matches!(
            sample().holidays_in(2020, "en_US", Some("Mars/Olympus")),
            Err(HolidayError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(matches!(sample().holidays(999, "en_US"), Err(HolidayError::InvalidArgument(_))));
        assert!(matches!(sample().holidays(2020, "xx_YY"), Err(HolidayError::UnknownLocale(_))));
        assert!(Jurisdiction::new("XX", "Example", "Not/AZone", Vec::new()).is_err());
    }

    #[test]
    fn duplicate_active_keys_fail() {
        let rules = vec![
            HolidayRule::fixed_date("foundersDay", 3, 14).unwrap(),
            HolidayRule::fixed_date("foundersDay", 3, 15).unwrap().with_gate(YearGate::Since(2000))
        ];
        let jurisdiction = Jurisdiction::new("XX", "Example", "UTC", rules).unwrap();
        assert!(jurisdiction.holidays(1999, "en_US").is_ok());
        assert!(matches!(jurisdiction.holidays(2000, "en_US"), Err(HolidayError::InvalidArgument(_))));
    }

    #[test]
    fn substitutes_join_the_set() {
        let jurisdiction = sample().with_substitution(SubstitutionRule::new(
            WeekendAdjustmentRule::nearest_weekday(),
            vec![HolidayType::Official]
        ));
        // 2022-01-01 was a Saturday
        let set = jurisdiction.holidays(2022, "en_US").unwrap();
        assert_eq!(set.when_is("substituteHoliday:newYearsDay"), Ok(date(2021, 12, 31)));
        assert_eq!(set.count(), 3);
    }
}
