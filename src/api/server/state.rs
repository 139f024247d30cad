static SERVER_STATE: std::sync::LazyLock<std::sync::Mutex<Option<ServerHandle>>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(None));

struct ServerHandle {
    shutdown_tx: watch::Sender<bool>,
    port: u16,
}

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub settings: Arc<SettingsStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Web server is already running")]
    AlreadyRunning,
    #[error("Web server is not running")]
    NotRunning,
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server state lock poisoned")]
    Poisoned,
}
