async fn external_check(
    Extension(state): Extension<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if !state.settings.allow_external_connections() {
        if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
            if !addr.ip().is_loopback() {
                tracing::warn!(peer = %addr, "rejected external connection");
                return reply(StatusCode::FORBIDDEN, "External connections are not allowed");
            }
        }
    }

    next.run(req).await
}
