use super::*;
use crate::data::accounts::{AccountService, AccountStore, NewAccount};
use crate::data::settings::GENERAL;
use crate::data::storage::{KeyValueStorage, MemoryStorage, StorageError};
use crate::notify::Notifier;
use axum::body::Body;
use axum::extract::FromRequest;
use pretty_assertions::assert_eq;

/// One storage seen by several services, like two processes on one file.
#[derive(Clone, Default)]
struct SharedStorage(Arc<MemoryStorage>);

impl KeyValueStorage for SharedStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove_item(key)
    }
}

fn service_over(storage: SharedStorage) -> AccountService {
    AccountService::new(
        AccountStore::new(Box::new(storage)),
        Arc::new(Notifier::new()),
    )
}

fn app_state() -> AppState {
    app_state_over(SharedStorage::default())
}

fn app_state_over(storage: SharedStorage) -> AppState {
    AppState {
        dashboard: Arc::new(Dashboard::new(service_over(storage))),
        settings: Arc::new(SettingsStore::in_memory()),
    }
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn form(alias: &str, email: &str) -> CreateRequest {
    serde_json::from_value(serde_json::json!({
        "alias": alias,
        "email": email,
        "password": "pw",
        "color": "green",
    }))
    .unwrap()
}

async fn create(state: &AppState, alias: &str) -> Account {
    let response = handle_create_account(
        Extension(state.clone()),
        Ok(Json(form(alias, &format!("{alias}@wolf.live")))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    serde_json::from_value(body["Message"].clone()).unwrap()
}

#[tokio::test]
async fn create_returns_created_account() {
    let state = app_state();
    let account = create(&state, "racer").await;

    assert_eq!(account.alias, "racer");
    assert_eq!(account.order, 0);

    let body = body_json(handle_get_accounts(Extension(state.clone())).await).await;
    assert_eq!(body["Success"], true);
    assert_eq!(body["Message"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_form_is_unprocessable_with_field_errors() {
    let state = app_state();
    let response =
        handle_create_account(Extension(state.clone()), Ok(Json(form("", "nope")))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["Success"], false);
    assert_eq!(body["Message"]["alias"], "Alias is required");
    assert_eq!(body["Message"]["email"], "Invalid email format");
}

#[tokio::test]
async fn duplicate_alias_conflicts() {
    let state = app_state();
    create(&state, "racer").await;

    let response = handle_create_account(
        Extension(state.clone()),
        Ok(Json(form("racer", "other@wolf.live"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["Message"], "An account with this alias already exists");
}

#[tokio::test]
async fn delete_conflicts_while_bot_runs() {
    let state = app_state();
    let account = create(&state, "racer").await;
    handle_bot_start(Extension(state.clone())).await;

    let response =
        handle_delete_account(Extension(state.clone()), Path(account.id.clone())).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    handle_bot_stop(Extension(state.clone())).await;
    let response =
        handle_delete_account(Extension(state.clone()), Path(account.id.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = handle_delete_account(Extension(state.clone()), Path(account.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_keeps_unset_fields() {
    let state = app_state();
    let account = create(&state, "racer").await;

    let edit = EditRequest {
        alias: Some("renamed".to_string()),
        ..Default::default()
    };
    let response =
        handle_update_account(Extension(state.clone()), Path(account.id.clone()), Ok(Json(edit)))
            .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = state.dashboard.find(&account.id).unwrap();
    assert_eq!(stored.alias, "renamed");
    assert_eq!(stored.email, account.email);

    let response = handle_update_account(
        Extension(state.clone()),
        Path("missing".to_string()),
        Ok(Json(EditRequest::default())),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn move_reorders_and_notifications_drain() {
    let state = app_state();
    let a = create(&state, "a").await;
    let b = create(&state, "b").await;

    let response = handle_move_account(
        Extension(state.clone()),
        Path(a.id.clone()),
        Ok(Json(MoveRequest {
            over: Some(b.id.clone()),
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let ids: Vec<_> = state.dashboard.accounts().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    let body = body_json(handle_notifications(Extension(state.clone())).await).await;
    assert_eq!(body["Message"].as_array().unwrap().len(), 2);
    let body = body_json(handle_notifications(Extension(state)).await).await;
    assert!(body["Message"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn server_starts_once_and_stops() {
    let state = app_state();
    let port = start(state.clone(), 0).await.unwrap();
    assert!(port > 0);
    assert_eq!(
        status(),
        ServerStatus {
            running: true,
            port: Some(port),
        }
    );
    assert!(matches!(
        start(state, 0).await,
        Err(ServerError::AlreadyRunning)
    ));

    assert_eq!(stop().unwrap(), port);
    assert_eq!(
        status(),
        ServerStatus {
            running: false,
            port: None,
        }
    );
    assert!(matches!(stop(), Err(ServerError::NotRunning)));
}

#[tokio::test]
async fn create_without_color_uses_configured_default() {
    let state = app_state();
    state.settings.set(GENERAL, "DefaultColor", "rose").unwrap();

    let request: CreateRequest = serde_json::from_value(serde_json::json!({
        "alias": "x",
        "email": "x@wolf.live",
        "password": "pw",
    }))
    .unwrap();
    let response = handle_create_account(Extension(state.clone()), Ok(Json(request))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["Message"]["color"], "rose");

    let explicit = create(&state, "y").await;
    assert_eq!(explicit.color, AccountColor::Green);
}

async fn extract<T: serde::de::DeserializeOwned>(
    content_type: Option<&str>,
    body: &'static str,
) -> Result<Json<T>, JsonRejection> {
    let mut builder = axum::http::Request::builder().method("POST").uri("/");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();
    Json::<T>::from_request(request, &()).await
}

#[tokio::test]
async fn unreadable_bodies_are_answered_in_the_envelope() {
    let state = app_state();

    let payload = extract::<CreateRequest>(
        Some("application/json"),
        r#"{"alias":"x","email":"x@wolf.live","password":"pw","color":"chartreuse"}"#,
    )
    .await;
    let response = handle_create_account(Extension(state.clone()), payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["Success"], false);
    assert!(body["Message"].as_str().unwrap().contains("chartreuse"));

    let payload = extract::<Vec<Account>>(None, "[]").await;
    let response = handle_reorder_accounts(Extension(state.clone()), payload).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = body_json(response).await;
    assert_eq!(body["Success"], false);
    assert!(body["Message"].is_string());

    assert!(state.dashboard.accounts().is_empty());
}

#[tokio::test]
async fn edits_find_accounts_written_elsewhere() {
    let storage = SharedStorage::default();
    let state = app_state_over(storage.clone());
    let local = create(&state, "local").await;

    let other = service_over(storage);
    let written = other
        .save_account(NewAccount {
            alias: "elsewhere".to_string(),
            email: "elsewhere@wolf.live".to_string(),
            password: "pw".to_string(),
            color: AccountColor::Cyan,
            token: None,
        })
        .unwrap();

    let edit = EditRequest {
        alias: Some("renamed".to_string()),
        ..Default::default()
    };
    let response =
        handle_update_account(Extension(state.clone()), Path(written.id.clone()), Ok(Json(edit)))
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(other.get_accounts()[1].alias, "renamed");

    let response = handle_move_account(
        Extension(state.clone()),
        Path(written.id.clone()),
        Ok(Json(MoveRequest {
            over: Some(local.id.clone()),
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let ids: Vec<_> = other.get_accounts().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![written.id, local.id]);
}
