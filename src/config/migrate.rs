//! Config file migrations: add fields introduced after the file was first
//! written, without clobbering user edits.

use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;

/// Fields every current config file must carry.
const REQUIRED_FIELDS: [&str; 4] = [
    "database",
    "company_name",
    "default_shop",
    "recent_entries",
];

/// Report which required fields are missing from the config file.
pub fn missing_fields() -> AppResult<Vec<String>> {
    let path = super::Config::config_file();
    if !path.exists() {
        return Err(AppError::ConfigLoad);
    }

    let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for field in REQUIRED_FIELDS {
            if !map.contains_key(Value::String(field.to_string())) {
                missing.push(field.to_string());
            }
        }
    }

    Ok(missing)
}

/// Insert defaults for any missing field and rewrite the file.
/// Returns the fields that were added.
pub fn run_config_migration() -> AppResult<Vec<String>> {
    let path = super::Config::config_file();
    if !path.exists() {
        return Err(AppError::ConfigLoad);
    }

    let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
    let mut yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let defaults = super::Config::default();
    let mut added = Vec::new();

    if let Some(map) = yaml.as_mapping_mut() {
        let wanted: [(&str, Value); 3] = [
            ("company_name", Value::String(defaults.company_name.clone())),
            ("default_shop", Value::Number(defaults.default_shop.into())),
            (
                "recent_entries",
                Value::Number((defaults.recent_entries as u64).into()),
            ),
        ];

        for (field, default) in wanted {
            let key = Value::String(field.to_string());
            if !map.contains_key(&key) {
                map.insert(key, default);
                added.push(field.to_string());
            }
        }
    }

    if !added.is_empty() {
        let serialized =
            serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(&path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
