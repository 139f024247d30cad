async fn handle_create_account(
    Extension(state): Extension<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_reply(rejection),
    };

    let mut form = request.into_form(state.settings.default_color());
    let Some(submission) = form.submit(None) else {
        return reply_value(StatusCode::UNPROCESSABLE_ENTITY, form.errors());
    };

    match state.dashboard.handle_save_account(submission) {
        Ok(account) => reply_value(StatusCode::CREATED, account),
        Err(e) => page_error_reply(&e),
    }
}

async fn handle_update_account(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Response {
    let Json(edit) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_reply(rejection),
    };

    state.dashboard.refresh();
    let Some(existing) = state.dashboard.find(&id) else {
        return reply(StatusCode::NOT_FOUND, "Account not found");
    };

    let mut form = edit.apply_to(&existing);
    let Some(submission) = form.submit(Some(&existing)) else {
        return reply_value(StatusCode::UNPROCESSABLE_ENTITY, form.errors());
    };

    match state.dashboard.handle_save_account(submission) {
        Ok(account) => reply_value(StatusCode::OK, account),
        Err(e) => page_error_reply(&e),
    }
}

async fn handle_delete_account(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.dashboard.handle_delete_account(&id) {
        Ok(()) => reply(StatusCode::OK, "Account deleted successfully"),
        Err(e) => page_error_reply(&e),
    }
}

async fn handle_reorder_accounts(
    Extension(state): Extension<AppState>,
    payload: Result<Json<Vec<Account>>, JsonRejection>,
) -> Response {
    let Json(accounts) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_reply(rejection),
    };

    match state.dashboard.handle_reorder_accounts(accounts) {
        Ok(()) => reply_value(StatusCode::OK, state.dashboard.accounts()),
        Err(e) => page_error_reply(&e),
    }
}

async fn handle_move_account(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_reply(rejection),
    };

    state.dashboard.refresh();
    if state.dashboard.find(&id).is_none() {
        return reply(StatusCode::NOT_FOUND, "Account not found");
    }

    match state
        .dashboard
        .handle_drag_end(&id, request.over.as_deref())
    {
        Ok(accounts) => reply_value(StatusCode::OK, accounts),
        Err(e) => page_error_reply(&e),
    }
}
