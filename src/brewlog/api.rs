//! # API Facade
//!
//! The API layer is the **persistence gateway**: the single entry point every UI
//! client goes through to read or change the catalog.
//!
//! ## Role and Responsibilities
//!
//! Each method dispatches to one command (which shapes input and makes exactly
//! one store call) and settles the outcome into an [`Envelope`]:
//!
//! ```text
//! { success: bool, data: row | null, error: string | null }
//! ```
//!
//! - **Success**: `data` is the row the store returned.
//! - **Validation failure**: `error` is the field message ("invalid rating").
//!   Logged at debug only; it is the user's mistake, not the operator's.
//! - **Store failure**: `error` is the store's own message, or a fallback for
//!   the operation when the store gave none. Logged at warn.
//! - **Anything else** (I/O, corrupt data): `error` is a generic message; the
//!   detail goes to the log at error level and nowhere else.
//!
//! The facade never returns `Err` and never panics on bad input: every call ends
//! in a well-formed envelope. Callers that prefer a tagged result can use
//! [`Envelope::into_result`].
//!
//! ## Generic Over RecordStore
//!
//! `CatalogApi<S: RecordStore>` takes its store handle by value:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands::{self, CmdResult, ShopDetail};
use crate::config::BrewConfig;
use crate::error::{BrewError, ErrorKind, Result};
use crate::input::{OrderInput, ShopInput};
use crate::model::{Order, Shop};
use crate::store::{RecordStore, ShopOrdering};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

pub const UNEXPECTED_ERROR: &str = "an unexpected error occurred";

/// Uniform result of every gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The error text, or an empty string for a successful envelope.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_else(|| UNEXPECTED_ERROR.to_string())),
        }
    }
}

/// Gateway operations, each with its own fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateShop,
    CreateOrder,
    DeleteShop,
    DeleteOrder,
    ListShops,
    GetShop,
    ListOrders,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateShop => "create_shop",
            Operation::CreateOrder => "create_order",
            Operation::DeleteShop => "delete_shop",
            Operation::DeleteOrder => "delete_order",
            Operation::ListShops => "list_shops",
            Operation::GetShop => "get_shop",
            Operation::ListOrders => "list_orders",
        }
    }

    /// Message used when the store fails without saying why.
    pub fn fallback(&self) -> &'static str {
        match self {
            Operation::CreateShop => "failed to create coffee shop",
            Operation::CreateOrder => "failed to create coffee order",
            Operation::DeleteShop => "failed to delete coffee shop",
            Operation::DeleteOrder => "failed to delete coffee order",
            Operation::ListShops => "failed to load coffee shops",
            Operation::GetShop => "failed to load coffee shop",
            Operation::ListOrders => "failed to load coffee orders",
        }
    }

    fn is_mutation(&self) -> bool {
        matches!(
            self,
            Operation::CreateShop
                | Operation::CreateOrder
                | Operation::DeleteShop
                | Operation::DeleteOrder
        )
    }
}

/// Converts a command outcome into an envelope, logging by error category.
pub fn settle<T>(op: Operation, outcome: Result<T>) -> Envelope<T> {
    let err = match outcome {
        Ok(data) => {
            if op.is_mutation() {
                info!(operation = op.name(), "completed");
            } else {
                debug!(operation = op.name(), "completed");
            }
            return Envelope::ok(data);
        }
        Err(err) => err,
    };

    match (err.kind(), &err) {
        (ErrorKind::Validation, BrewError::Validation(invalid)) => {
            debug!(operation = op.name(), field = invalid.field, %invalid, "rejected input");
            Envelope::failed(invalid.message)
        }
        (ErrorKind::Store, BrewError::Store(store_err)) => {
            warn!(operation = op.name(), error = %store_err, "store call failed");
            Envelope::failed(
                store_err
                    .message()
                    .unwrap_or_else(|| op.fallback().to_string()),
            )
        }
        _ => {
            error!(operation = op.name(), error = %err, "unexpected error");
            Envelope::failed(UNEXPECTED_ERROR)
        }
    }
}

/// The catalog gateway.
///
/// Generic over `RecordStore` so tests can hand it an in-memory store.
pub struct CatalogApi<S: RecordStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: RecordStore> CatalogApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn create_shop(&mut self, input: &ShopInput) -> Envelope<Shop> {
        settle(
            Operation::CreateShop,
            commands::create::shop(&mut self.store, input),
        )
    }

    pub fn create_order(&mut self, input: &OrderInput) -> Envelope<Order> {
        settle(
            Operation::CreateOrder,
            commands::create::order(&mut self.store, input),
        )
    }

    pub fn delete_shop(&mut self, id: &str) -> Envelope<Shop> {
        settle(
            Operation::DeleteShop,
            commands::delete::shop(&mut self.store, id),
        )
    }

    pub fn delete_order(&mut self, id: &str) -> Envelope<Order> {
        settle(
            Operation::DeleteOrder,
            commands::delete::order(&mut self.store, id),
        )
    }

    pub fn list_shops(&self, ordering: ShopOrdering) -> Envelope<Vec<Shop>> {
        settle(
            Operation::ListShops,
            commands::list::shops(&self.store, ordering),
        )
    }

    pub fn get_shop(&self, id: &str) -> Envelope<ShopDetail> {
        settle(
            Operation::GetShop,
            commands::list::shop_detail(&self.store, id),
        )
    }

    pub fn list_orders(&self, shop_id: &str) -> Envelope<Vec<Order>> {
        settle(
            Operation::ListOrders,
            commands::list::orders(&self.store, shop_id),
        )
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// The configuration stored next to the catalog, or defaults.
    pub fn load_config(&self) -> Result<BrewConfig> {
        BrewConfig::load(&self.data_dir)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};
