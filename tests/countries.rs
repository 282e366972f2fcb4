use chrono::{NaiveDate, Weekday};

use holidayprovider::{
    HolidayError,
    HolidayType,
    create,
    create_with_timezone
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn sweden_national_day_naming() {
    assert!(!create("Sweden", 1900, "sv_SE").unwrap().contains_key("nationalDay"));

    let set = create("sweden", 1950, "sv_SE").unwrap();
    assert_eq!(set.get("nationalDay").unwrap().name(), "Svenska flaggans dag");
    assert_eq!(set.when_is("nationalDay"), Ok(date(1950, 6, 6)));

    let set = create("SE", 2000, "sv_SE").unwrap();
    assert_eq!(set.get("nationalDay").unwrap().name(), "Sveriges nationaldag");
}

#[test]
fn sweden_2020() {
    let set = create("Sweden", 2020, "sv_SE").unwrap();
    let expected = [
        ("newYearsDay", date(2020, 1, 1)),
        ("epiphany", date(2020, 1, 6)),
        ("goodFriday", date(2020, 4, 10)),
        ("easter", date(2020, 4, 12)),
        ("easterMonday", date(2020, 4, 13)),
        ("internationalWorkersDay", date(2020, 5, 1)),
        ("ascensionDay", date(2020, 5, 21)),
        ("pentecost", date(2020, 5, 31)),
        ("nationalDay", date(2020, 6, 6)),
        ("stJohnsDay", date(2020, 6, 20)),
        ("allSaintsDay", date(2020, 10, 31)),
        ("christmasEve", date(2020, 12, 24)),
        ("christmasDay", date(2020, 12, 25)),
        ("secondChristmasDay", date(2020, 12, 26))
    ];
    assert_eq!(set.count(), expected.len());
    for (key, day) in expected {
        assert_eq!(set.when_is(key), Ok(day), "{}", key);
    }
    assert_eq!(set.get("stJohnsDay").unwrap().name(), "midsommardagen");
    assert_eq!(set.what_week_day_is("stJohnsDay"), Ok(Weekday::Sat));
}

#[test]
fn portugal_corpus_christi() {
    assert!(!create("Portugal", 2014, "pt_PT").unwrap().contains_key("corpusChristi"));
    let set = create("Portugal", 2010, "pt_PT").unwrap();
    let corpus_christi = set.get("corpusChristi").unwrap();
    assert_eq!(corpus_christi.date(), date(2010, 6, 3));
    assert_eq!(corpus_christi.holiday_type(), HolidayType::Other);
    assert_eq!(corpus_christi.name(), "Corpo de Deus");
}

#[test]
fn portugal_suspended_holidays() {
    let set = create("PT", 2014, "en_US").unwrap();
    for key in ["portugueseRepublic", "restorationOfIndependence", "allSaintsDay"] {
        assert!(!set.contains_key(key), "{}", key);
    }
    let set = create("PT", 2016, "en_US").unwrap();
    assert_eq!(set.when_is("portugueseRepublic"), Ok(date(2016, 10, 5)));
    assert_eq!(set.when_is("restorationOfIndependence"), Ok(date(2016, 12, 1)));
    assert_eq!(set.get("25thApril").unwrap().name(), "Freedom Day");
}

#[test]
fn finland_and_norway() {
    let finland = create("Finland", 2021, "fi_FI").unwrap();
    assert_eq!(finland.when_is("stJohnsDay"), Ok(date(2021, 6, 26)));
    assert_eq!(finland.get("easterMonday").unwrap().name(), "2. pääsiäispäivä");

    let norway = create("Norway", 2021, "nb_NO").unwrap();
    assert_eq!(norway.when_is("constitutionDay"), Ok(date(2021, 5, 17)));
    assert_eq!(norway.get("easter").unwrap().name(), "Første påskedag");
}

#[test]
fn united_states_substitutes() {
    let set = create("US", 2020, "en_US").unwrap();
    let observed = set.get("substituteHoliday:independenceDay").unwrap();
    assert_eq!(observed.date(), date(2020, 7, 3));
    assert_eq!(observed.weekday(), Weekday::Fri);

    let set = create("United States", 2021, "en_US").unwrap();
    assert_eq!(set.count(), 12);
    assert_eq!(set.when_is("substituteHoliday:independenceDay"), Ok(date(2021, 7, 5)));
    assert_eq!(set.when_is("substituteHoliday:christmasDay"), Ok(date(2021, 12, 24)));

    // observed in the previous calendar year, but part of 2022
    let set = create("US", 2022, "en_US").unwrap();
    assert_eq!(set.when_is("substituteHoliday:newYearsDay"), Ok(date(2021, 12, 31)));
}

#[test]
fn timezone_override() {
    let set = create_with_timezone("Sweden", 2020, "sv_SE", "Asia/Tokyo").unwrap();
    let holiday = set.get("christmasEve").unwrap();
    assert_eq!(holiday.timezone(), chrono_tz::Asia::Tokyo);
    assert_eq!(holiday.start_of_day().unwrap().to_rfc3339(), "2020-12-24T00:00:00+09:00");
}

#[test]
fn invalid_inputs() {
    assert!(matches!(create("Sweden", 999, "sv_SE"), Err(HolidayError::InvalidArgument(_))));
    assert!(matches!(create("Sweden", 10_000, "sv_SE"), Err(HolidayError::InvalidArgument(_))));
    assert!(matches!(create("Sweden", 2020, "xx_XX"), Err(HolidayError::UnknownLocale(_))));
    assert!(matches!(
        create_with_timezone("Sweden", 2020, "sv_SE", "Not/AZone"),
        Err(HolidayError::InvalidArgument(_))
    ));
    assert!(matches!(create("Atlantis", 2020, "en_US"), Err(HolidayError::ProviderNotFound(_))));
}
