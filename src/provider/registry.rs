use tracing::debug;

use crate::holiday::holidayerror::HolidayError;

use super::countries::{
    finland,
    norway,
    portugal,
    sweden,
    unitedstates
};
use super::holidayset::HolidaySet;
use super::jurisdiction::Jurisdiction;

type JurisdictionFactory = fn() -> Result<Jurisdiction, HolidayError>;

static BUILTINS: [(&str, &str, JurisdictionFactory); 5] = [
    (finland::ID, finland::NAME, finland::jurisdiction),
    (norway::ID, norway::NAME, norway::jurisdiction),
    (portugal::ID, portugal::NAME, portugal::jurisdiction),
    (sweden::ID, sweden::NAME, sweden::jurisdiction),
    (unitedstates::ID, unitedstates::NAME, unitedstates::jurisdiction)
];

/// Lookup form of a provider name or code: case, spaces, `_` and `-` ignored.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().replace([' ', '_', '-'], "").to_lowercase()
}

/// Names of the built-in providers.
pub fn provider_names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(_, name, _)| *name).collect()
}

/// ISO 3166-1 codes of the built-in providers.
pub fn provider_ids() -> Vec<&'static str> {
    BUILTINS.iter().map(|(id, _, _)| *id).collect()
}

/// A built-in jurisdiction by name or code, case-insensitive
/// (`"Sweden"`, `"sweden"`, `"SE"`, `"UnitedStates"`).
pub fn builtin(name: &str) -> Result<Jurisdiction, HolidayError> {
    let wanted = normalize(name);
    let (_, _, factory) = BUILTINS
        .iter()
        .find(|(id, full_name, _)| normalize(id) == wanted || normalize(full_name) == wanted)
        .ok_or_else(|| HolidayError::ProviderNotFound(name.to_owned()))?;
    factory()
}

pub fn create(provider: &str, year: i32, locale: &str) -> Result<HolidaySet, HolidayError> {
    debug!(provider, year, locale, "create");
    builtin(provider)?.holidays(year, locale)
}

pub fn create_with_timezone(provider: &str, year: i32, locale: &str, timezone: &str) -> Result<HolidaySet, HolidayError> {
    debug!(provider, year, locale, timezone, "create with timezone");
    builtin(provider)?.holidays_in(year, locale, Some(timezone))
}

/// Accepts an ISO 3166-2 subdivision code (`"US-NY"`) or a bare country
/// code; only the country part selects the provider.
pub fn create_by_iso3166_2(code: &str, year: i32, locale: &str) -> Result<HolidaySet, HolidayError> {
    let country = code.split('-').next().unwrap_or(code);
    if country.len() != 2 {
        return Err(HolidayError::InvalidArgument(format!("'{}' is not an ISO 3166-2 code", code)));
    }
    create(country, year, locale)
}
