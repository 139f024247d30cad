#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope<T: Serialize> {
    success: bool,
    message: T,
}

fn reply(status: StatusCode, message: &str) -> Response {
    reply_value(status, message)
}

fn reply_value<T: Serialize>(status: StatusCode, message: T) -> Response {
    let body = Envelope {
        success: status.is_success(),
        message,
    };
    (status, Json(body)).into_response()
}

fn rejection_reply(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "rejected request body");
    reply(rejection.status(), &rejection.body_text())
}

fn page_error_status(error: &PageError) -> StatusCode {
    match error {
        PageError::BotRunning => StatusCode::CONFLICT,
        PageError::NothingMoved => StatusCode::BAD_REQUEST,
        PageError::Account(e) => account_error_status(e),
    }
}

fn account_error_status(error: &AccountError) -> StatusCode {
    match error {
        AccountError::DuplicateAlias | AccountError::DuplicateEmail => StatusCode::CONFLICT,
        AccountError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn page_error_reply(error: &PageError) -> Response {
    let status = page_error_status(error);
    let message = match error {
        PageError::Account(e) if !e.is_rejection() => "Storage operation failed".to_string(),
        other => other.to_string(),
    };
    reply(status, &message)
}
