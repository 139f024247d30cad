pub const GENERAL: &str = "General";
pub const WEB_SERVER: &str = "WebServer";

const DEFAULT_PORT: u16 = 7964;

pub struct SettingsStore {
    ini: Mutex<IniFile>,
    file_path: Option<PathBuf>,
}

impl SettingsStore {
    /// Loads `file_path`, fills in missing defaults and writes the result back.
    pub fn new(file_path: PathBuf) -> Self {
        let ini = if file_path.exists() {
            IniFile::load(&file_path).unwrap_or_else(|e| {
                tracing::warn!(path = %file_path.display(), error = %e, "failed to read settings, using defaults");
                IniFile::new()
            })
        } else {
            IniFile::new()
        };

        let store = Self {
            ini: Mutex::new(ini),
            file_path: Some(file_path),
        };
        store.apply_defaults();
        if let Err(e) = store.save() {
            tracing::warn!(error = %e, "failed to write settings file");
        }
        store
    }

    /// Defaults only, never written to disk.
    pub fn in_memory() -> Self {
        let store = Self {
            ini: Mutex::new(IniFile::new()),
            file_path: None,
        };
        store.apply_defaults();
        store
    }

    fn apply_defaults(&self) {
        let mut ini = self.ini.lock().unwrap_or_else(PoisonError::into_inner);

        let general_defaults: &[(&str, &str, Option<&str>)] = &[
            ("StorageFile", "RaceBotStorage.json", None),
            ("StorageKey", ACCOUNTS_STORAGE_KEY, None),
            (
                "DefaultColor",
                "blue",
                Some("One of: red orange amber yellow lime green emerald teal cyan sky blue indigo violet purple fuchsia pink rose"),
            ),
            ("LogLevel", "info", None),
        ];

        let general = ini.section(GENERAL);
        for (key, value, comment) in general_defaults {
            if !general.exists(key) {
                general.set(key, value, *comment);
            }
        }

        let ws_defaults: &[(&str, &str)] = &[
            ("WebServerPort", "7964"),
            ("AllowExternalConnections", "false"),
        ];

        let webserver = ini.section(WEB_SERVER);
        for (key, value) in ws_defaults {
            if !webserver.exists(key) {
                webserver.set(key, value, None);
            }
        }
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = self.file_path.as_deref() else {
            return Ok(());
        };
        let ini = self.ini.lock().map_err(|_| SettingsError::Poisoned)?;
        ini.save(path)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<String> {
        let ini = self.ini.lock().unwrap_or_else(PoisonError::into_inner);
        ini.get_section(section)
            .and_then(|s| s.get(key))
            .map(str::to_string)
    }

    pub fn get_bool(&self, section: &str, key: &str) -> bool {
        self.get(section, key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.get(section, key).and_then(|v| v.parse().ok())
    }

    pub fn set(&self, section: &str, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut ini = self.ini.lock().map_err(|_| SettingsError::Poisoned)?;
        ini.section(section).set(key, value, None);
        drop(ini);
        self.save()
    }

    pub fn storage_file(&self) -> String {
        self.get(GENERAL, "StorageFile")
            .unwrap_or_else(|| "RaceBotStorage.json".to_string())
    }

    pub fn storage_key(&self) -> String {
        self.get(GENERAL, "StorageKey")
            .unwrap_or_else(|| ACCOUNTS_STORAGE_KEY.to_string())
    }

    pub fn default_color(&self) -> AccountColor {
        self.get(GENERAL, "DefaultColor")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> tracing::Level {
        self.get(GENERAL, "LogLevel")
            .and_then(|v| v.parse().ok())
            .unwrap_or(tracing::Level::INFO)
    }

    pub fn web_server_port(&self) -> u16 {
        self.get_int(WEB_SERVER, "WebServerPort")
            .and_then(|p| u16::try_from(p).ok())
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn allow_external_connections(&self) -> bool {
        self.get_bool(WEB_SERVER, "AllowExternalConnections")
    }
}
