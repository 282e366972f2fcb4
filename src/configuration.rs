use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::IManager;
use crate::provider::holidayset::HolidaySet;
use crate::provider::jurisdiction::Jurisdiction;
use crate::provider::jurisdictionmanager::JurisdictionManager;
use crate::time::calendar::jurisdictioncalendar::JurisdictionCalendar;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    jurisdictions: Vec<serde_json::Value>
}

/// Entry point holding every known jurisdiction: the built-ins plus any
/// loaded from JSON.
#[derive(Debug, Clone)]
pub struct Configuration {
    jurisdiction_manager: JurisdictionManager
}

impl Configuration {
    pub fn new() -> Result<Configuration, ManagerError> {
        Ok(Configuration {
            jurisdiction_manager: JurisdictionManager::with_builtins()?
        })
    }

    pub fn jurisdiction_manager(&self) -> &JurisdictionManager {
        &self.jurisdiction_manager
    }

    pub fn jurisdiction_manager_mut(&mut self) -> &mut JurisdictionManager {
        &mut self.jurisdiction_manager
    }

    /// Reads `{"jurisdictions": [...]}` from a JSON file.
    pub fn from_reader<P: AsRef<Path>>(&mut self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        debug!(path = %file_path.as_ref().display(), count = json_prop.jurisdictions.len(), "loading configuration");
        self.jurisdiction_manager.insert_obj_from_json_vec(&json_prop.jurisdictions)
    }

    pub fn from_json_str(&mut self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        debug!(count = json_prop.jurisdictions.len(), "loading configuration");
        self.jurisdiction_manager.insert_obj_from_json_vec(&json_prop.jurisdictions)
    }

    pub fn jurisdiction(&self, name: &str) -> Result<Arc<Jurisdiction>, ManagerError> {
        self.jurisdiction_manager.get(name)
    }

    pub fn holidays(&self, provider: &str, year: i32, locale: &str) -> Result<HolidaySet, ManagerError> {
        Ok(self.jurisdiction(provider)?.holidays(year, locale)?)
    }

    pub fn holidays_in(&self, provider: &str, year: i32, locale: &str, timezone: &str) -> Result<HolidaySet, ManagerError> {
        Ok(self.jurisdiction(provider)?.holidays_in(year, locale, Some(timezone))?)
    }

    pub fn calendar(&self, provider: &str) -> Result<JurisdictionCalendar, ManagerError> {
        Ok(JurisdictionCalendar::new(self.jurisdiction(provider)?))
    }
}
