use chrono::{
    DateTime,
    NaiveDate,
    TimeZone,
    Weekday,
    Datelike
};
use chrono_tz::Tz;
use serde::{
    Deserialize,
    Serialize
};
use tracing::trace;

use super::holidayerror::HolidayError;
use super::locale;
use super::translations::Translations;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    Official,
    Observance,
    Season,
    Bank,
    Other
}

impl HolidayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::Official => "official",
            HolidayType::Observance => "observance",
            HolidayType::Season => "season",
            HolidayType::Bank => "bank",
            HolidayType::Other => "other"
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One holiday of one jurisdiction in one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    key: String,
    translations: Translations,
    date: NaiveDate,
    timezone: Tz,
    holiday_type: HolidayType,
    display_locale: String
}

impl Holiday {
    pub fn new(
        key: &str,
        translations: Translations,
        date: NaiveDate,
        timezone: Tz,
        display_locale: &str,
        holiday_type: HolidayType
    ) -> Result<Holiday, HolidayError> {
        if key.trim().is_empty() {
            return Err(HolidayError::InvalidArgument("holiday key must not be empty".to_owned()));
        }
        locale::validate(display_locale)?;

        Ok(Holiday {
            key: key.to_owned(),
            translations,
            date,
            timezone,
            holiday_type,
            display_locale: display_locale.to_owned()
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    pub fn display_locale(&self) -> &str {
        &self.display_locale
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Name in the display locale.
    pub fn name(&self) -> &str {
        self.name_in(&self.display_locale)
    }

    /// Name in `locale`, falling back to the language, to `en_US` and
    /// finally to the key.
    pub fn name_in(&self, locale: &str) -> &str {
        match self.translations.resolve(locale) {
            Some(name) => name,
            None => {
                trace!(key = %self.key, locale, "no translation, using key as name");
                &self.key
            }
        }
    }

    /// Local midnight in the holiday's timezone. `None` when midnight does
    /// not exist there (a DST gap at 00:00).
    pub fn start_of_day(&self) -> Option<DateTime<Tz>> {
        let midnight = self.date.and_hms_opt(0, 0, 0)?;
        self.timezone.from_local_datetime(&midnight).earliest()
    }

    pub fn to_record(&self) -> HolidayRecord {
        HolidayRecord {
            key: self.key.clone(),
            name: self.name().to_owned(),
            date: self.date,
            holiday_type: self.holiday_type
        }
    }
}

/// External representation of a [`Holiday`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub key: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType
}

#[cfg(test)]
mod tests {
    use super::*;

    fn christmas(locale: &str) -> Result<Holiday, HolidayError> {
        Holiday::new(
            "christmasDay",
            Translations::from_pairs(&[("en_US", "Christmas"), ("sv_SE", "juldagen")]),
            NaiveDate::from_ymd_opt(2020, 12, 25).unwrap(),
            chrono_tz::Europe::Stockholm,
            locale,
            HolidayType::Official
        )
    }

    #[test]
    fn name_uses_display_locale_with_fallback() {
        assert_eq!(christmas("sv_SE").unwrap().name(), "juldagen");
        assert_eq!(christmas("de_DE").unwrap().name(), "Christmas");
        assert_eq!(christmas("sv_SE").unwrap().name_in("en_US"), "Christmas");
    }

    #[test]
    fn name_falls_back_to_key_without_translations() {
        let holiday = Holiday::new(
            "foundersDay",
            Translations::new(),
            NaiveDate::from_ymd_opt(2020, 3, 14).unwrap(),
            chrono_tz::UTC,
            "en_US",
            HolidayType::Observance
        ).unwrap();
        assert_eq!(holiday.name(), "foundersDay");
    }

    #[test]
    fn construction_validates_key_and_locale() {
        assert_eq!(christmas("xx_XX"), Err(HolidayError::UnknownLocale("xx_XX".to_owned())));
        let empty_key = Holiday::new(
            " ",
            Translations::new(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            chrono_tz::UTC,
            "en_US",
            HolidayType::Official
        );
        assert!(matches!(empty_key, Err(HolidayError::InvalidArgument(_))));
    }

    #[test]
    fn record_serializes_with_iso_date_and_lowercase_type() {
        let record = christmas("sv_SE").unwrap().to_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["key"], "christmasDay");
        assert_eq!(json["name"], "juldagen");
        assert_eq!(json["date"], "2020-12-25");
        assert_eq!(json["type"], "official");
    }

    #[test]
    fn start_of_day_is_local_midnight() {
        let start = christmas("en_US").unwrap().start_of_day().unwrap();
        assert_eq!(start.naive_local(), NaiveDate::from_ymd_opt(2020, 12, 25).unwrap().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(start.naive_utc().format("%H").to_string(), "23");
    }
}
