use crate::holiday::holidayerror::HolidayError;
use crate::provider::christianholidays;
use crate::provider::commonholidays;
use crate::provider::holidayrule::HolidayRule;
use crate::provider::jurisdiction::Jurisdiction;

pub const ID: &str = "FI";
pub const NAME: &str = "Finland";
pub const TIMEZONE: &str = "Europe/Helsinki";

const SATURDAY_REFORM: i32 = 1955;

/// Midsummer and All Saints' Day moved to Saturdays in 1955.
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
        christianholidays::st_johns_day()?.until(SATURDAY_REFORM - 1),
        christianholidays::st_johns_saturday()?.since(SATURDAY_REFORM),
        christianholidays::all_saints_day()?.until(SATURDAY_REFORM - 1),
        christianholidays::all_saints_saturday()?.since(SATURDAY_REFORM),
        HolidayRule::fixed_date("independenceDay", 12, 6)?.since(1917),
        christianholidays::christmas_day()?,
        christianholidays::second_christmas_day()?
    ];
    Jurisdiction::new(ID, NAME, TIMEZONE, rules)
}
