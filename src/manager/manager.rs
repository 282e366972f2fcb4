use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json;
use tracing::debug;

use super::managererror::{ManagerError, parse_json_value};

/// A name-keyed store of objects that can also be filled from JSON.
pub trait IManager<V> {
    fn get(&self, name: &str) -> Result<V, ManagerError>;

    fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Reads one object or an array of objects.
    fn from_json_value(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            debug!(count = json_array.len(), "inserting objects from json array");
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }

    fn from_reader<P: AsRef<Path>>(&mut self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        debug!(path = %file_path.as_ref().display(), "loaded json file");
        self.from_json_value(json_value)
    }
}
