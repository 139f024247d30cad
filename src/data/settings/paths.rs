pub fn get_runtime_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

pub fn get_settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("RaceBotSettings.ini")
}

/// Relative storage file names resolve against the data directory.
pub fn get_storage_path(data_dir: &Path, settings: &SettingsStore) -> PathBuf {
    let file = PathBuf::from(settings.storage_file());
    if file.is_absolute() {
        file
    } else {
        data_dir.join(file)
    }
}
