pub mod api;
pub mod bot;
pub mod data;
pub mod form;
pub mod grid;
pub mod notify;
pub mod page;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use api::server::AppState;
use data::accounts::{AccountService, AccountStore};
use data::settings::{get_settings_path, get_storage_path, SettingsStore};
use data::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use notify::Notifier;
use page::Dashboard;

/// Everything a front end needs: settings plus the accounts page.
pub struct App {
    pub settings: Arc<SettingsStore>,
    pub dashboard: Arc<Dashboard>,
}

impl App {
    /// Opens the settings file and the storage file under `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        let settings = SettingsStore::new(get_settings_path(data_dir));
        let storage_path = get_storage_path(data_dir, &settings);
        tracing::debug!(path = %storage_path.display(), "using account storage");
        Self::with_storage(settings, Box::new(FileStorage::new(storage_path)))
    }

    /// Default settings and in-memory storage; nothing touches disk.
    pub fn ephemeral() -> Self {
        Self::with_storage(SettingsStore::in_memory(), Box::new(MemoryStorage::new()))
    }

    pub fn with_storage(settings: SettingsStore, storage: Box<dyn KeyValueStorage>) -> Self {
        let store = AccountStore::with_key(storage, settings.storage_key());
        let service = AccountService::new(store, Arc::new(Notifier::new()));
        Self {
            settings: Arc::new(settings),
            dashboard: Arc::new(Dashboard::new(service)),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            dashboard: self.dashboard.clone(),
            settings: self.settings.clone(),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    data::settings::get_runtime_data_dir()
}

pub fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
