use crate::data::storage::{KeyValueStorage, StorageError};
use crate::notify::Notifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

include!("accounts/model.rs");
include!("accounts/store.rs");
include!("accounts/commands.rs");
