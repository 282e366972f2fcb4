use serde::{
    Deserialize,
    Serialize
};

/// A pure predicate on the year deciding whether a rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearGate {
    #[default]
    Always,
    /// From the given year on.
    Since(i32),
    /// Up to and including the given year.
    Until(i32),
    /// Inclusive on both ends.
    Between(i32, i32),
    /// Any year not in the inclusive range.
    Outside(i32, i32),
    AnyOf(Vec<YearGate>),
    AllOf(Vec<YearGate>)
}

impl YearGate {
    pub fn admits(&self, year: i32) -> bool {
        match self {
            YearGate::Always => true,
            YearGate::Since(first) => year >= *first,
            YearGate::Until(last) => year <= *last,
            YearGate::Between(first, last) => (*first..=*last).contains(&year),
            YearGate::Outside(first, last) => !(*first..=*last).contains(&year),
            YearGate::AnyOf(gates) => gates.iter().any(|g| g.admits(year)),
            YearGate::AllOf(gates) => gates.iter().all(|g| g.admits(year))
        }
    }

    pub fn and(self, other: YearGate) -> YearGate {
        match (self, other) {
            (YearGate::Always, g) | (g, YearGate::Always) => g,
            (YearGate::AllOf(mut gates), g) => {
                gates.push(g);
                YearGate::AllOf(gates)
            },
            (g1, g2) => YearGate::AllOf(vec![g1, g2])
        }
    }
}
