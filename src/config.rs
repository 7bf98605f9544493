use crate::cmds::Cmd;

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "DATEPICK_CONFIG_FILE";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip, default = "default_key_map")]
    pub key_map: KeyMap,
    pub tick_rate_ms: u64,
    pub show_today: bool,
    pub confirm_adjacent: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            key_map: default_key_map(),
            tick_rate_ms: 500,
            show_today: true,
            confirm_adjacent: false,
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_key_map() -> KeyMap {
    let mut key_map = HashMap::new();

    key_map.insert(Key::Left, Cmd::StepDay(-1));
    key_map.insert(Key::Char('h'), Cmd::StepDay(-1));
    key_map.insert(Key::Right, Cmd::StepDay(1));
    key_map.insert(Key::Char('l'), Cmd::StepDay(1));
    key_map.insert(Key::Up, Cmd::StepWeek(-1));
    key_map.insert(Key::Char('k'), Cmd::StepWeek(-1));
    key_map.insert(Key::Down, Cmd::StepWeek(1));
    key_map.insert(Key::Char('j'), Cmd::StepWeek(1));
    key_map.insert(Key::PageUp, Cmd::StepMonth(-1));
    key_map.insert(Key::PageDown, Cmd::StepMonth(1));
    key_map.insert(Key::Home, Cmd::JumpTo(1));
    key_map.insert(Key::End, Cmd::JumpTo(31));
    key_map.insert(Key::Char('\n'), Cmd::Confirm);
    key_map.insert(Key::Char('t'), Cmd::ConfirmToday);
    key_map.insert(Key::Char('q'), Cmd::Exit);

    key_map
}

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("datepick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".datepick.toml"));
    }

    locations
}

pub fn load_suitable_config(explicit: Option<&Path>) -> io::Result<Config> {
    let path = match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => find_configfile_locations()
            .into_iter()
            .find(|path| path.exists()),
    };

    match path {
        Some(path) => load_config(&path),
        None => Ok(Config::default()),
    }
}

fn load_config(path: &Path) -> io::Result<Config> {
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", path.display(), err),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert_eq!(config.tick_rate_ms, 500);
        assert!(config.show_today);
        assert!(!config.confirm_adjacent);
        assert_eq!(config.key_map.get(&Key::Char('\n')), Some(&Cmd::Confirm));
    }

    #[test]
    fn config_fields_override_defaults() {
        let raw = "show_today = false\nconfirm_adjacent = true\ntick_rate_ms = 100\n";
        let config: Config = toml::from_str(raw).expect("config parses");
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert!(!config.show_today);
        assert!(config.confirm_adjacent);
    }

    #[test]
    fn default_key_map_covers_all_navigation() {
        let key_map = default_key_map();
        assert_eq!(key_map.get(&Key::Left), Some(&Cmd::StepDay(-1)));
        assert_eq!(key_map.get(&Key::Down), Some(&Cmd::StepWeek(1)));
        assert_eq!(key_map.get(&Key::PageUp), Some(&Cmd::StepMonth(-1)));
        assert_eq!(key_map.get(&Key::Home), Some(&Cmd::JumpTo(1)));
        assert_eq!(key_map.get(&Key::End), Some(&Cmd::JumpTo(31)));
        assert_eq!(key_map.get(&Key::Char('t')), Some(&Cmd::ConfirmToday));
        assert_eq!(key_map.get(&Key::Char('q')), Some(&Cmd::Exit));
    }
}
