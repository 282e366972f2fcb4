use chrono_tz::Tz;

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::locale;

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

pub fn parse_timezone(name: &str) -> Result<Tz, HolidayError> {
    name.parse::<Tz>()
        .map_err(|_| HolidayError::InvalidArgument(format!("unknown timezone '{}'", name)))
}

pub fn validate_year(year: i32) -> Result<(), HolidayError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(HolidayError::InvalidArgument(
            format!("year {} is outside the supported range {}..={}", year, MIN_YEAR, MAX_YEAR)
        ))
    }
}

/// Everything a holiday rule is evaluated against. Validated on
/// construction, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderContext {
    year: i32,
    timezone: Tz,
    locale: String
}

impl ProviderContext {
    pub fn new(year: i32, timezone: Tz, locale: &str) -> Result<ProviderContext, HolidayError> {
        validate_year(year)?;
        locale::validate(locale)?;
        Ok(ProviderContext {
            year,
            timezone,
            locale: locale.to_owned()
        })
    }

    pub fn from_timezone_name(year: i32, timezone: &str, locale: &str) -> Result<ProviderContext, HolidayError> {
        ProviderContext::new(year, parse_timezone(timezone)?, locale)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_year_range() {
        assert!(ProviderContext::new(MIN_YEAR, chrono_tz::UTC, "en_US").is_ok());
        assert!(ProviderContext::new(MAX_YEAR, chrono_tz::UTC, "en_US").is_ok());
        assert!(matches!(
            ProviderContext::new(999, chrono_tz::UTC, "en_US"),
            Err(HolidayError::InvalidArgument(_))
        ));
        assert!(matches!(
            ProviderContext::new(10_000, chrono_tz::UTC, "en_US"),
            Err(HolidayError::InvalidArgument(_))
        ));
    }

    #[test]
    fn validates_locale_and_timezone() {
        assert_eq!(
            ProviderContext::new(2020, chrono_tz::UTC, "klingon"),
            Err(HolidayError::UnknownLocale("klingon".to_owned()))
        );
        assert!(matches!(
            ProviderContext::from_timezone_name(2020, "Europe/Atlantis", "en_US"),
            Err(HolidayError::InvalidArgument(_))
        ));
        let ctx = ProviderContext::from_timezone_name(2020, "Europe/Stockholm", "sv_SE").unwrap();
        assert_eq!(ctx.timezone(), chrono_tz::Europe::Stockholm);
        assert_eq!(ctx.locale(), "sv_SE");
    }
}
