use std::collections::BTreeSet;

use chrono::{
    Days,
    Months,
    NaiveDate
};

use crate::holiday::holidayerror::HolidayError;

const ONE_DAY: Days = Days::new(1);

fn out_of_range(d: NaiveDate, direction: &str) -> HolidayError {
    HolidayError::InvalidArgument(format!("no {} day after {}", direction, d))
}

/// A working-day calendar. "Holiday" here means any non-business day,
/// weekends included.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> Result<bool, HolidayError>;

    fn get_holiday_set(&self, year: i32) -> Result<BTreeSet<NaiveDate>, HolidayError>;

    fn is_business_day(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        Ok(!self.is_holiday(d)?)
    }

    /// Moves `n` business days away from `horizon`, backwards for negative
    /// `n`. `horizon` itself is never counted.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate, HolidayError> {
        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY).ok_or_else(|| out_of_range(d, "next"))
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY).ok_or_else(|| out_of_range(d, "previous"))
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            m -= self.is_business_day(d)? as u32;
        }
        Ok(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, HolidayError> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, HolidayError> {
        self.shift_n_business_day(d, -1)
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate, HolidayError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| HolidayError::invalid_date(year, month, 1))?;
        let first_of_next = first
            .checked_add_months(Months::new(1))
            .ok_or_else(|| out_of_range(first, "next"))?;
        let eom = first_of_next
            .checked_sub_days(ONE_DAY)
            .ok_or_else(|| out_of_range(first_of_next, "previous"))?;
        if self.is_business_day(eom)? {
            Ok(eom)
        } else {
            self.previous_business_day(eom)
        }
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate, HolidayError> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| HolidayError::invalid_date(year, month, 1))?;
        if self.is_business_day(fom)? {
            Ok(fom)
        } else {
            self.next_business_day(fom)
        }
    }
}
