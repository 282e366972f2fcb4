use std::collections::HashMap;

use chrono::{
    Datelike, 
    Days,
    NaiveDate, 
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::holiday::holidayerror::HolidayError;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Where a date falling on a given weekday is observed instead.
///
/// Built from a weekday → adjustment map. Every weekday in the map counts as
/// a weekend day, so a Saturday moved forward skips Sunday if Sunday is in
/// the map too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    // Indexed by Weekday::num_days_from_monday(), signed day shift
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Result<WeekendAdjustmentRule, HolidayError> {
        if adjustment_map.len() >= 7 {
            return Err(HolidayError::InvalidArgument(
                "weekend adjustment must leave at least one weekday unadjusted".to_owned()
            ));
        }

        let mut rule: [Option<i64>; 7] = [None; 7];
        
        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let step = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };
            
            let mut to_weekday = weekday;
            let mut shift_days = 0;
            while adjustment_map.contains_key(&to_weekday) {
                to_weekday = step(&to_weekday);
                shift_days += adj as i64;
            }
            
            rule[weekday.num_days_from_monday() as usize] = Some(shift_days);
        }
        
        Ok(WeekendAdjustmentRule { rule })
    }

    /// Saturday to the Friday before, Sunday to the Monday after.
    pub fn nearest_weekday() -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];
        rule[Weekday::Sat.num_days_from_monday() as usize] = Some(-1);
        rule[Weekday::Sun.num_days_from_monday() as usize] = Some(1);
        WeekendAdjustmentRule { rule }
    }

    pub fn adjustment_map(&self) -> HashMap<Weekday, WeekendAdjustment> {
        let mut result: HashMap<Weekday, WeekendAdjustment> = HashMap::new();
        
        for (day_offset, shift) in self.rule.iter().enumerate() {
            if let (Some(shift), Ok(weekday)) = (shift, Weekday::try_from(day_offset as u8)) {
                let adjustment = match shift {
                    n if *n > 0 => WeekendAdjustment::NextWeekday,
                    n if *n < 0 => WeekendAdjustment::PreviousWeekday,
                    _ => WeekendAdjustment::Unadjusted,
                };
                result.insert(weekday, adjustment);
            }
        }
        
        result
    }

    /// The observed date, or `None` when `d` is not moved.
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self.rule[d.weekday().num_days_from_monday() as usize] {
            Some(shift) if shift > 0 => d.checked_add_days(Days::new(shift as u64)),
            Some(shift) if shift < 0 => d.checked_sub_days(Days::new(shift.unsigned_abs())),
            _ => None,
        }
    }
}
