use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    #[error("invalid date {0}")]
    InvalidDate(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),
    #[error("holiday '{0}' not found")]
    NotFound(String),
    #[error("holiday provider '{0}' not found")]
    ProviderNotFound(String)
}

impl HolidayError {
    pub fn invalid_date(year: i32, month: u32, day: u32) -> HolidayError {
        HolidayError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
    }

    /// For rules that are not bound to a year yet (`--MM-DD`, as in ISO 8601).
    pub fn invalid_month_day(month: u32, day: u32) -> HolidayError {
        HolidayError::InvalidDate(format!("--{:02}-{:02}", month, day))
    }

    pub fn duplicate_key(key: &str, year: i32) -> HolidayError {
        HolidayError::InvalidArgument(format!("holiday '{}' emitted twice for year {}", key, year))
    }
}
