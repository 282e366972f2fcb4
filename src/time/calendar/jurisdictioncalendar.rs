use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{
    Datelike,
    Days,
    NaiveDate
};

use crate::holiday::holiday::HolidayType;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::locale::DEFAULT_LOCALE;
use crate::provider::context::{
    MAX_YEAR,
    MIN_YEAR
};
use crate::provider::holidayset::NON_WORKING_TYPES;
use crate::provider::jurisdiction::Jurisdiction;

use super::holidaycalendar::HolidayCalendar;

const SEVEN_DAYS: Days = Days::new(7);

/// Business-day calendar of one jurisdiction: its weekend days plus the
/// holidays of the non-working types.
#[derive(Debug, Clone)]
pub struct JurisdictionCalendar {
    jurisdiction: Arc<Jurisdiction>,
    non_working_types: Vec<HolidayType>
}

impl JurisdictionCalendar {
    pub fn new(jurisdiction: Arc<Jurisdiction>) -> JurisdictionCalendar {
        JurisdictionCalendar {
            jurisdiction,
            non_working_types: NON_WORKING_TYPES.to_vec()
        }
    }

    pub fn with_non_working_types(mut self, non_working_types: Vec<HolidayType>) -> JurisdictionCalendar {
        self.non_working_types = non_working_types;
        self
    }

    pub fn jurisdiction(&self) -> &Arc<Jurisdiction> {
        &self.jurisdiction
    }

    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.jurisdiction.weekends().is_weekend(d.weekday())
    }

    /// Non-working holiday dates emitted for `year`. Substitutes may fall
    /// into the neighbouring years.
    fn non_working_dates(&self, year: i32) -> Result<Vec<NaiveDate>, HolidayError> {
        let set = self.jurisdiction.holidays(year, DEFAULT_LOCALE)?;
        Ok(set
            .iter()
            .filter(|h| self.non_working_types.contains(&h.holiday_type()))
            .map(|h| h.date())
            .collect())
    }

    /// Years whose holiday sets may contain a date of `year`.
    fn source_years(year: i32) -> impl Iterator<Item = i32> {
        (year - 1..=year + 1).filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
    }
}

impl HolidayCalendar for JurisdictionCalendar {
    fn is_holiday(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        if self.is_weekend(d) {
            return Ok(true);
        }
        let years: Vec<i32> = match d.month() {
            1 => vec![d.year() - 1, d.year()],
            12 => vec![d.year(), d.year() + 1],
            _ => vec![d.year()]
        };
        for year in years.into_iter().filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y)) {
            if self.non_working_dates(year)?.contains(&d) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Weekend days and non-working holidays of `year`.
    fn get_holiday_set(&self, year: i32) -> Result<BTreeSet<NaiveDate>, HolidayError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| HolidayError::invalid_date(year, 1, 1))?;
        let year_end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| HolidayError::invalid_date(year, 12, 31))?;

        let mut holiday_set = BTreeSet::new();
        for target_weekday in self.jurisdiction.weekends().weekend_list() {
            let offset = (7 + target_weekday.num_days_from_monday() - start.weekday().num_days_from_monday()) % 7;
            let mut current = start + Days::new(offset as u64);
            while current <= year_end {
                holiday_set.insert(current);
                current = current + SEVEN_DAYS;
            }
        }

        for source_year in JurisdictionCalendar::source_years(year) {
            holiday_set.extend(
                self.non_working_dates(source_year)?
                    .into_iter()
                    .filter(|d| d.year() == year)
            );
        }
        Ok(holiday_set)
    }
}
