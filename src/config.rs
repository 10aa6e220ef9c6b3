use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::{Calendar, Event};
use crate::date::Date;
use crate::error::{Error, ErrorKind, Result};
use crate::lang::{self, Language};

const CONFIG_PATH_ENV_VAR: &str = "PATRO_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("patro").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".patro.toml"));
    }

    locations
}

/// Loads `path` if given, otherwise the first config file found in the
/// default locations. Without any config file the defaults are used.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => {
            log::info!("using config file '{}'", location.display());
            Config::from_file(&location)
        }
        None => {
            log::info!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,
    /// Events keyed by `Y/M/D` date strings.
    pub events: BTreeMap<String, Event>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            language: "nepali".to_owned(),
            events: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorKind::Config,
                &format!("could not read '{}': {}", path.display(), err),
            )
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn language(&self) -> Result<Box<dyn Language>> {
        lang::language_from_name(&self.language)
    }

    /// Configured events that fall into `year`/`month`.
    ///
    /// Keys that are not valid dates are skipped with a warning.
    pub fn events_of_month(&self, year: i32, month: u32) -> Vec<(Date, &Event)> {
        self.events
            .iter()
            .filter_map(|(key, event)| match key.parse::<Date>() {
                Ok(date) => Some((date, event)),
                Err(err) => {
                    log::warn!("ignoring event '{}': {}", key, err);
                    None
                }
            })
            .filter(|(date, _)| date.year() == year && date.month() == month)
            .collect()
    }

    /// Attaches the configured events of the calendar's current month.
    pub fn apply_events(&self, calendar: &mut Calendar) -> Result<()> {
        let events = self
            .events_of_month(calendar.year(), calendar.month())
            .into_iter()
            .map(|(date, event)| (date, event.clone()));

        calendar.set_events(events)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
language = "english"

[events]
"2081/5/10" = "Teej"
"2081/5/20" = ["Puja", "Fair"]
"2081/6/1" = "Next month"
"not a date" = "ignored"
"#;

    #[test]
    fn defaults_without_content() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.language().unwrap().name(), "nepali");
    }

    #[test]
    fn parses_language_and_events() {
        let config = Config::from_toml(SAMPLE).unwrap();

        assert_eq!(config.language().unwrap().name(), "english");
        assert_eq!(config.events.len(), 4);
        assert_eq!(
            config.events.get("2081/5/20"),
            Some(&Event::from(vec!["Puja", "Fair"]))
        );
    }

    #[test]
    fn events_are_filtered_by_month() {
        let config = Config::from_toml(SAMPLE).unwrap();
        let days: Vec<u32> = config
            .events_of_month(2081, 5)
            .iter()
            .map(|(date, _)| date.day())
            .collect();

        assert_eq!(days, vec![10, 20]);
        assert_eq!(config.events_of_month(2081, 6).len(), 1);
        assert!(config.events_of_month(2081, 7).is_empty());
    }

    #[test]
    fn apply_events_to_calendar() {
        let config = Config::from_toml(SAMPLE).unwrap();
        let mut cal = Calendar::new("2081/5/1").unwrap();

        cal.set_events_with(|cal| config.apply_events(cal)).unwrap();

        assert_eq!(cal.event(10), Some(&Event::from("Teej")));
        assert!(cal.event(20).is_some());
        assert!(cal.event(1).is_none());
        assert_eq!(cal.events().count(), 2);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = Config::from_toml("language = [").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/patro.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config));
    }
}
