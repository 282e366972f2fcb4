use crate::holiday::holiday::HolidayType;
use crate::holiday::holidayerror::HolidayError;
use crate::provider::christianholidays;
use crate::provider::commonholidays;
use crate::provider::holidayrule::HolidayRule;
use crate::provider::jurisdiction::Jurisdiction;
use crate::provider::yeargate::YearGate;

pub const ID: &str = "SE";
pub const NAME: &str = "Sweden";
pub const TIMEZONE: &str = "Europe/Stockholm";

fn national_day() -> Result<HolidayRule, HolidayError> {
    Ok(HolidayRule::fixed_date("nationalDay", 6, 6)?
        .since(1916)
        .renamed(YearGate::Until(1982), &[("sv_SE", "Svenska flaggans dag")])
        .renamed(YearGate::Since(1983), &[("sv_SE", "Sveriges nationaldag")]))
}

/// Midsummer and All Saints' Day fall on Saturdays, Christmas Eve is
/// observed as a holiday.
pub fn jurisdiction() -> Result<Jurisdiction, HolidayError> {
    let rules = vec![
        commonholidays::new_years_day()?,
        christianholidays::epiphany()?,
        christianholidays::good_friday(),
        christianholidays::easter(),
        christianholidays::easter_monday(),
        commonholidays::international_workers_day()?,
        christianholidays::ascension_day(),
        christianholidays::pentecost(),
        national_day()?,
        christianholidays::st_johns_saturday()?,
        christianholidays::all_saints_saturday()?,
        christianholidays::christmas_eve()?.with_type(HolidayType::Official),
        christianholidays::christmas_day()?,
        christianholidays::second_christmas_day()?
    ];
    Jurisdiction::new(ID, NAME, TIMEZONE, rules)
}
