use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 5] = [
    "database",
    "default_priority",
    "rollover_on_new_day",
    "date_display_format",
    "separator_char",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
    }
}

/// Keys of [`KNOWN_KEYS`] absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Add every missing key with its default value and rewrite the file.
/// Returns the keys that were added; the file is untouched when none were.
pub fn migrate_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => m,
        _ => return Err(AppError::ConfigSave),
    };

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key);
        }
    }

    if added.is_empty() {
        info("Configuration already up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;

    // Document the rollover switch next to its line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("rollover_on_new_day:") && added.contains(&"rollover_on_new_day") {
            new_content.push_str(
                "# rollover_on_new_day options:\n\
                 #   true  → open items are carried into each new day entry\n\
                 #   false → new day entries start empty\n",
            );
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));
    Ok(added)
}
