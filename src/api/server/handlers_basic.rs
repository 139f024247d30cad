async fn handle_running() -> Response {
    reply_value(StatusCode::OK, status())
}

async fn handle_bot_status(Extension(state): Extension<AppState>) -> Response {
    reply_value(StatusCode::OK, state.dashboard.status())
}

async fn handle_bot_start(Extension(state): Extension<AppState>) -> Response {
    state.dashboard.start_bot();
    reply_value(StatusCode::OK, state.dashboard.status())
}

async fn handle_bot_stop(Extension(state): Extension<AppState>) -> Response {
    state.dashboard.stop_bot();
    reply_value(StatusCode::OK, state.dashboard.status())
}

async fn handle_notifications(Extension(state): Extension<AppState>) -> Response {
    reply_value(StatusCode::OK, state.dashboard.take_notifications())
}

async fn handle_get_accounts(Extension(state): Extension<AppState>) -> Response {
    state.dashboard.refresh();
    let mut accounts = state.dashboard.accounts();
    accounts.sort_by_key(|a| a.order);
    reply_value(StatusCode::OK, accounts)
}

async fn handle_get_cards(Extension(state): Extension<AppState>) -> Response {
    reply_value(StatusCode::OK, state.dashboard.cards())
}
