use chrono::Weekday;

/// Weekend days as a bitmask, bit n for `Weekday::num_days_from_monday() == n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendMask(u8);

impl WeekendMask {
    pub fn new(weekends: &[Weekday]) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    pub fn weekend_list(&self) -> Vec<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

impl Default for WeekendMask {
    fn default() -> Self {
        WeekendMask::new(&[Weekday::Sat, Weekday::Sun])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weekend_is_saturday_and_sunday() {
        let mask = WeekendMask::default();
        assert!(mask.is_weekend(Weekday::Sat));
        assert!(mask.is_weekend(Weekday::Sun));
        assert!(!mask.is_weekend(Weekday::Fri));
        assert_eq!(mask.weekend_list(), vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn custom_weekend() {
        let mask = WeekendMask::new(&[Weekday::Fri, Weekday::Sat]);
        assert!(mask.is_weekend(Weekday::Fri));
        assert!(!mask.is_weekend(Weekday::Sun));
    }
}
