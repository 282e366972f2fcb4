use std::collections::BTreeMap;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use chrono_tz::Tz;

use crate::holiday::holiday::{
    Holiday,
    HolidayRecord,
    HolidayType
};
use crate::holiday::holidayerror::HolidayError;
use crate::time::calendar::weekendmask::WeekendMask;

use super::context::ProviderContext;

/// Holiday types that make a day non-working.
pub const NON_WORKING_TYPES: [HolidayType; 2] = [HolidayType::Official, HolidayType::Bank];

/// All holidays of one jurisdiction for one year, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    jurisdiction_id: String,
    year: i32,
    locale: String,
    timezone: Tz,
    weekends: WeekendMask,
    holidays: BTreeMap<String, Holiday>
}

impl HolidaySet {
    pub(crate) fn new(jurisdiction_id: &str, ctx: &ProviderContext, weekends: WeekendMask) -> HolidaySet {
        HolidaySet {
            jurisdiction_id: jurisdiction_id.to_owned(),
            year: ctx.year(),
            locale: ctx.locale().to_owned(),
            timezone: ctx.timezone(),
            weekends,
            holidays: BTreeMap::new()
        }
    }

    /// Rejects a second holiday with the same key.
    pub(crate) fn insert(&mut self, holiday: Holiday) -> Result<(), HolidayError> {
        if self.holidays.contains_key(holiday.key()) {
            return Err(HolidayError::duplicate_key(holiday.key(), self.year));
        }
        self.holidays.insert(holiday.key().to_owned(), holiday);
        Ok(())
    }

    pub fn jurisdiction_id(&self) -> &str {
        &self.jurisdiction_id
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn count(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.holidays.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Result<&Holiday, HolidayError> {
        self.holidays
            .get(key)
            .ok_or_else(|| HolidayError::NotFound(key.to_owned()))
    }

    /// Holidays ordered by date, then key.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        let mut holidays: Vec<&Holiday> = self.holidays.values().collect();
        holidays.sort_by(|h1, h2| h1.date().cmp(&h2.date()).then_with(|| h1.key().cmp(h2.key())));
        holidays.into_iter()
    }

    pub fn by_type(&self, holiday_type: HolidayType) -> Vec<&Holiday> {
        self.iter().filter(|h| h.holiday_type() == holiday_type).collect()
    }

    pub fn on(&self, date: NaiveDate) -> Vec<&Holiday> {
        self.iter().filter(|h| h.date() == date).collect()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.values().any(|h| h.date() == date)
    }

    /// Holidays between `start` and `end`, bounds included when `inclusive`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate, inclusive: bool) -> Result<Vec<&Holiday>, HolidayError> {
        if end < start {
            return Err(HolidayError::InvalidArgument(format!("end date {} is before start date {}", end, start)));
        }
        let in_range = |d: NaiveDate| if inclusive {
            start <= d && d <= end
        } else {
            start < d && d < end
        };
        Ok(self.iter().filter(|h| in_range(h.date())).collect())
    }

    pub fn when_is(&self, key: &str) -> Result<NaiveDate, HolidayError> {
        self.get(key).map(Holiday::date)
    }

    pub fn what_week_day_is(&self, key: &str) -> Result<Weekday, HolidayError> {
        self.get(key).map(Holiday::weekday)
    }

    /// Keys in date order.
    pub fn holiday_names(&self) -> Vec<&str> {
        self.iter().map(Holiday::key).collect()
    }

    /// Distinct dates in ascending order.
    pub fn holiday_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.holidays.values().map(Holiday::date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    pub fn is_weekend_day(&self, date: NaiveDate) -> bool {
        self.weekends.is_weekend(date.weekday())
    }

    /// Not a weekend day and not an official or bank holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend_day(date)
            && !self.holidays
                .values()
                .any(|h| h.date() == date && NON_WORKING_TYPES.contains(&h.holiday_type()))
    }

    pub fn to_records(&self) -> Vec<HolidayRecord> {
        self.iter().map(Holiday::to_record).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_records())
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Holiday;
    type IntoIter = std::vec::IntoIter<&'a Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}
