use crate::holiday::holidayerror::HolidayError;
use crate::provider::christianholidays;
use crate::provider::commonholidays;
use crate::provider::holidayrule::HolidayRule;
use crate::provider::jurisdiction::Jurisdiction;

pub const ID: &str = "NO";
pub const NAME: &str = "Norway";
pub const TIMEZONE: &str = "Europe/Oslo";

pub fn jurisdiction() -> Result<Jurisdiction, HolidayError> {
    let rules = vec![
        commonholidays::new_years_day()?,
        christianholidays::maundy_thursday(),
        christianholidays::good_friday(),
        christianholidays::easter(),
        christianholidays::easter_monday(),
        commonholidays::international_workers_day()?,
        HolidayRule::fixed_date("constitutionDay", 5, 17)?.since(1836),
        christianholidays::ascension_day(),
        christianholidays::pentecost(),
        christianholidays::pentecost_monday(),
        christianholidays::christmas_day()?,
        christianholidays::second_christmas_day()?
    ];
    Jurisdiction::new(ID, NAME, TIMEZONE, rules)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn easter_block_2021() {
        let set = jurisdiction().unwrap().holidays(2021, "nb_NO").unwrap();
        assert_eq!(set.when_is("maundyThursday"), Ok(NaiveDate::from_ymd_opt(2021, 4, 1).unwrap()));
        assert_eq!(set.when_is("pentecostMonday"), Ok(NaiveDate::from_ymd_opt(2021, 5, 24).unwrap()));
        assert_eq!(set.get("constitutionDay").unwrap().name(), "Grunnlovsdag");
        assert_eq!(set.count(), 12);
    }

    #[test]
    fn constitution_day_from_1836() {
        let norway = jurisdiction().unwrap();
        assert!(!norway.holidays(1835, "nb_NO").unwrap().contains_key("constitutionDay"));
        assert!(norway.holidays(1836, "nb_NO").unwrap().contains_key("constitutionDay"));
    }
}
