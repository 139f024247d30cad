use crate::data::accounts::{AccountColor, ACCOUNTS_STORAGE_KEY};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings lock poisoned")]
    Poisoned,
}

include!("settings/ini.rs");
include!("settings/store.rs");
include!("settings/paths.rs");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_ignores_comments_and_keys_outside_sections() {
        let ini = IniFile::parse(
            "stray=1\n# comment\n[General]\n; other\nLogLevel = debug\nEmpty=\n\n[WebServer]\nWebServerPort=9000\n",
        );

        let general = ini.get_section("General").unwrap();
        assert_eq!(general.get("LogLevel"), Some("debug"));
        assert!(!general.exists("Empty"));
        assert!(!general.exists("stray"));
        assert_eq!(
            ini.get_section("WebServer").unwrap().get("WebServerPort"),
            Some("9000")
        );
    }

    #[test]
    fn render_round_trips_through_parse() {
        let mut ini = IniFile::new();
        ini.section("General").set("StorageKey", "k", Some("note"));
        ini.section("Unused");

        let rendered = ini.render();
        assert_eq!(rendered, "[General]\n# note\nStorageKey=k\n\n");
        assert_eq!(
            IniFile::parse(&rendered).get_section("General").unwrap().get("StorageKey"),
            Some("k")
        );
    }

    #[test]
    fn in_memory_store_has_defaults() {
        let settings = SettingsStore::in_memory();
        assert_eq!(settings.storage_key(), ACCOUNTS_STORAGE_KEY);
        assert_eq!(settings.web_server_port(), 7964);
        assert_eq!(settings.default_color(), AccountColor::Blue);
        assert_eq!(settings.log_level(), tracing::Level::INFO);
        assert!(!settings.allow_external_connections());
    }

    #[test]
    fn invalid_values_fall_back() {
        let settings = SettingsStore::in_memory();
        settings.set(WEB_SERVER, "WebServerPort", "99999").unwrap();
        settings.set(GENERAL, "DefaultColor", "chartreuse").unwrap();
        settings.set(GENERAL, "LogLevel", "loud").unwrap();

        assert_eq!(settings.web_server_port(), 7964);
        assert_eq!(settings.default_color(), AccountColor::Blue);
        assert_eq!(settings.log_level(), tracing::Level::INFO);
    }
}
