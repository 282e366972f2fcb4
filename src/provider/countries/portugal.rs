use crate::holiday::holiday::HolidayType;
use crate::holiday::holidayerror::HolidayError;
use crate::provider::christianholidays;
use crate::provider::commonholidays;
use crate::provider::holidayrule::HolidayRule;
use crate::provider::jurisdiction::Jurisdiction;
use crate::provider::yeargate::YearGate;

pub const ID: &str = "PT";
pub const NAME: &str = "Portugal";
pub const TIMEZONE: &str = "Europe/Lisbon";

const SUSPENDED: YearGate = YearGate::Outside(2013, 2015);

/// Several holidays were suspended between 2013 and 2015.
pub fn jurisdiction() -> Result<Jurisdiction, HolidayError> {
    let rules = vec![
        commonholidays::new_years_day()?,
        christianholidays::good_friday(),
        christianholidays::easter(),
        HolidayRule::fixed_date("25thApril", 4, 25)?.since(1974),
        commonholidays::international_workers_day()?,
        christianholidays::corpus_christi()
            .with_type(HolidayType::Other)
            .with_gate(SUSPENDED),
        HolidayRule::fixed_date("portugalDay", 6, 10)?
            .with_gate(YearGate::AnyOf(vec![YearGate::Until(1932), YearGate::Since(1974)])),
        christianholidays::assumption_of_mary()?,
        HolidayRule::fixed_date("portugueseRepublic", 10, 5)?
            .since(1910)
            .with_gate(SUSPENDED),
        christianholidays::all_saints_day()?.with_gate(SUSPENDED),
        HolidayRule::fixed_date("restorationOfIndependence", 12, 1)?
            .since(1640)
            .with_gate(SUSPENDED),
        christianholidays::immaculate_conception()?,
        christianholidays::christmas_day()?
    ];
    Jurisdiction::new(ID, NAME, TIMEZONE, rules)
}
