pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/Running", get(handle_running))
        .route("/accounts", get(handle_get_accounts).post(handle_create_account))
        .route("/accounts/order", put(handle_reorder_accounts))
        .route(
            "/accounts/{id}",
            put(handle_update_account).delete(handle_delete_account),
        )
        .route("/accounts/{id}/move", post(handle_move_account))
        .route("/cards", get(handle_get_cards))
        .route("/bot", get(handle_bot_status))
        .route("/bot/start", post(handle_bot_start))
        .route("/bot/stop", post(handle_bot_stop))
        .route("/notifications", get(handle_notifications))
        .layer(middleware::from_fn(external_check))
        .layer(Extension(state))
}

/// Binds and spawns the server; returns the bound port.
pub async fn start(state: AppState, port: u16) -> Result<u16, ServerError> {
    {
        let guard = SERVER_STATE.lock().map_err(|_| ServerError::Poisoned)?;
        if guard.is_some() {
            return Err(ServerError::AlreadyRunning);
        }
    }

    let bind_addr: SocketAddr = if state.settings.allow_external_connections() {
        ([0, 0, 0, 0], port).into()
    } else {
        ([127, 0, 0, 1], port).into()
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr,
            source,
        })?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(port);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        let served = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow_and_update() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await;
        if let Err(e) = served {
            tracing::error!(error = %e, "web server stopped with error");
        }
    });

    let mut guard = SERVER_STATE.lock().map_err(|_| ServerError::Poisoned)?;
    if guard.is_some() {
        // Lost a race with a concurrent start; shut this listener down again.
        ServerHandle { shutdown_tx, port }.shutdown();
        return Err(ServerError::AlreadyRunning);
    }
    *guard = Some(ServerHandle { shutdown_tx, port });
    tracing::info!(%port, "web server listening");

    Ok(port)
}

impl ServerHandle {
    fn shutdown(self) -> u16 {
        // The receiver is gone if the serve task already exited.
        let _ = self.shutdown_tx.send(true);
        self.port
    }
}

/// Signals the running server to shut down and returns the port it held.
pub fn stop() -> Result<u16, ServerError> {
    let handle = SERVER_STATE
        .lock()
        .map_err(|_| ServerError::Poisoned)?
        .take()
        .ok_or(ServerError::NotRunning)?;
    let port = handle.shutdown();
    tracing::info!(%port, "web server stopping");
    Ok(port)
}

/// What `/Running` reports; `port` is absent while stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub running: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

pub fn status() -> ServerStatus {
    let port = SERVER_STATE
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .as_ref()
        .map(|handle| handle.port);
    ServerStatus {
        running: port.is_some(),
        port,
    }
}
