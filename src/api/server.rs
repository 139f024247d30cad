use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, Extension, Json, Path, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;

use crate::data::accounts::{Account, AccountColor, AccountError};
use crate::data::settings::SettingsStore;
use crate::form::AccountForm;
use crate::page::{Dashboard, PageError};

include!("server/state.rs");
include!("server/query.rs");
include!("server/helpers.rs");
include!("server/middleware.rs");
include!("server/handlers_basic.rs");
include!("server/handlers_edit.rs");
include!("server/runtime.rs");

#[cfg(test)]
mod tests;
