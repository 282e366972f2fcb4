use super::holidayerror::HolidayError;

/// Locale used when a holiday has no name for the requested one.
pub const DEFAULT_LOCALE: &str = "en_US";

// Sorted, searched with binary_search.
const SUPPORTED_LOCALES: [&str; 44] = [
    "bg_BG", "cs_CZ", "da_DK", "de_AT", "de_CH", "de_DE", "el_GR", "en_AU",
    "en_CA", "en_GB", "en_IE", "en_NZ", "en_US", "en_ZA", "es_ES", "es_MX",
    "et_EE", "fi_FI", "fr_BE", "fr_CA", "fr_CH", "fr_FR", "hr_HR", "hu_HU",
    "it_CH", "it_IT", "ja_JP", "ko_KR", "lt_LT", "lv_LV", "nb_NO", "nl_BE",
    "nl_NL", "nn_NO", "pl_PL", "pt_BR", "pt_PT", "ro_RO", "ru_RU", "sk_SK",
    "sl_SI", "sv_FI", "sv_SE", "uk_UA"
];

pub fn supported_locales() -> &'static [&'static str] {
    &SUPPORTED_LOCALES
}

#[inline]
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.binary_search(&locale).is_ok()
}

pub fn validate(locale: &str) -> Result<(), HolidayError> {
    if is_supported(locale) {
        Ok(())
    } else {
        Err(HolidayError::UnknownLocale(locale.to_owned()))
    }
}

/// Language part of a locale code: `sv` for `sv_SE`.
pub fn language(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}
