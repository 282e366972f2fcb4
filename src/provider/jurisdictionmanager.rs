use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use serde_json;
use tracing::{
    debug,
    warn
};

use crate::holiday::holiday::HolidayType;
use crate::holiday::translations::Translations;
use crate::manager::manager::IManager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::recurringholiday::recurringholidaymanager::recurring_holiday_from_json;
use crate::time::recurringholiday::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

use super::holidayrule::{
    HolidayRule,
    Rename
};
use super::jurisdiction::Jurisdiction;
use super::registry::{
    self,
    normalize
};
use super::substitution::SubstitutionRule;
use super::yeargate::YearGate;

fn default_weekends() -> Vec<Weekday> {
    vec![Weekday::Sat, Weekday::Sun]
}

fn default_applies_to() -> Vec<HolidayType> {
    vec![HolidayType::Official]
}

fn default_holiday_type() -> HolidayType {
    HolidayType::Official
}

#[derive(Deserialize)]
struct RenameJsonProp {
    gate: YearGate,
    names: Translations
}

#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    key: String,
    #[serde(rename = "type", default = "default_holiday_type")]
    holiday_type: HolidayType,
    #[serde(default)]
    gate: YearGate,
    #[serde(default)]
    names: Translations,
    #[serde(default)]
    renames: Vec<RenameJsonProp>
}

/// One holiday entry; the date rule fields sit beside the entry's own
/// fields and are parsed by `recurring_holiday_from_json`.
fn holiday_rule_from_json(json_value: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: HolidayRuleJsonProp = parse_json_value(json_value.clone())?;
    let date_rule = recurring_holiday_from_json(json_value)?;
    let renames = json_prop.renames
        .into_iter()
        .map(|r| Rename::new(r.gate, r.names))
        .collect();
    Ok(HolidayRule::new(&json_prop.key, date_rule)
        .with_type(json_prop.holiday_type)
        .with_gate(json_prop.gate)
        .with_translations(json_prop.names, renames))
}

#[derive(Deserialize)]
struct SubstitutionJsonProp {
    weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>,
    #[serde(default = "default_applies_to")]
    applies_to: Vec<HolidayType>,
    #[serde(default)]
    templates: Translations
}

fn substitution_from_json(json_prop: SubstitutionJsonProp) -> Result<SubstitutionRule, ManagerError> {
    let adjustment = WeekendAdjustmentRule::new(&json_prop.weekend_adjustment_map)?;
    Ok(SubstitutionRule::new(adjustment, json_prop.applies_to).with_templates(json_prop.templates))
}

#[derive(Deserialize)]
struct JurisdictionJsonProp {
    name: String,
    id: String,
    timezone: String,
    #[serde(default = "default_weekends")]
    weekends: Vec<Weekday>,
    #[serde(default)]
    substitution: Option<SubstitutionJsonProp>,
    holidays: Vec<serde_json::Value>
}

pub fn jurisdiction_from_json(json_value: serde_json::Value) -> Result<Jurisdiction, ManagerError> {
    let json_prop: JurisdictionJsonProp = parse_json_value(json_value)?;
    let mut rules = Vec::with_capacity(json_prop.holidays.len());
    for holiday_json in json_prop.holidays.into_iter() {
        rules.push(holiday_rule_from_json(holiday_json)?);
    }

    let mut jurisdiction = Jurisdiction::new(&json_prop.id, &json_prop.name, &json_prop.timezone, rules)?
        .with_weekends(WeekendMask::new(&json_prop.weekends));
    if let Some(substitution) = json_prop.substitution {
        jurisdiction = jurisdiction.with_substitution(substitution_from_json(substitution)?);
    }
    Ok(jurisdiction)
}

/// Jurisdictions by name, reachable through their name or id. Lookups
/// ignore case, spaces, `_` and `-`.
#[derive(Debug, Clone, Default)]
pub struct JurisdictionManager {
    jurisdictions: HashMap<String, Arc<Jurisdiction>>,
    aliases: HashMap<String, String>
}

impl JurisdictionManager {
    pub fn new() -> JurisdictionManager {
        JurisdictionManager::default()
    }

    pub fn with_builtins() -> Result<JurisdictionManager, ManagerError> {
        let mut manager = JurisdictionManager::new();
        for name in registry::provider_names() {
            manager.insert(registry::builtin(name)?);
        }
        Ok(manager)
    }

    /// Replaces any jurisdiction already registered under the same name or id.
    pub fn insert(&mut self, jurisdiction: Jurisdiction) {
        let name = normalize(jurisdiction.name());
        let id = normalize(jurisdiction.id());
        if self.jurisdictions.contains_key(&name) {
            warn!(name = jurisdiction.name(), "replacing jurisdiction");
        }
        debug!(name = jurisdiction.name(), id = jurisdiction.id(), "registering jurisdiction");
        self.aliases.insert(id, name.clone());
        self.jurisdictions.insert(name, Arc::new(jurisdiction));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Registered display names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.jurisdictions
            .values()
            .map(|j| j.name().to_owned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.jurisdictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jurisdictions.is_empty()
    }
}

impl IManager<Arc<Jurisdiction>> for JurisdictionManager {
    fn get(&self, name: &str) -> Result<Arc<Jurisdiction>, ManagerError> {
        let key = normalize(name);
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.jurisdictions
            .get(key)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let jurisdiction = jurisdiction_from_json(json_value)?;
        self.insert(jurisdiction);
        Ok(())
    }
}
