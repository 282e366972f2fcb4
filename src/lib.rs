pub mod configuration;

pub mod holiday {
    pub mod holidayerror;
    pub mod locale;
    pub mod translations;
    pub mod holiday;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod provider {
    pub mod context;
    pub mod yeargate;
    pub mod holidayrule;
    pub mod commonholidays;
    pub mod christianholidays;
    pub mod substitution;
    pub mod holidayset;
    pub mod jurisdiction;
    pub mod jurisdictionmanager;
    pub mod registry;

    pub mod countries {
        pub mod finland;
        pub mod norway;
        pub mod portugal;
        pub mod sweden;
        pub mod unitedstates;
    }
}

pub mod time {
    pub mod calculator;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod relativeweekday;
        pub mod weekdayinwindowholiday;
        pub mod recurringholidaymanager;
    }

    pub mod calendar {
        pub mod weekendmask;
        pub mod holidaycalendar;
        pub mod jurisdictioncalendar;
    }
}

pub use holiday::holiday::{
    Holiday,
    HolidayRecord,
    HolidayType
};
pub use holiday::holidayerror::HolidayError;
pub use provider::holidayset::HolidaySet;
pub use provider::jurisdiction::Jurisdiction;
pub use provider::registry::{
    create,
    create_by_iso3166_2,
    create_with_timezone
};
