use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// A field value rejected by the shaping layer.
///
/// `field` names the input key, `message` is the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// The two tables a record store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Shops,
    Orders,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Shops => "coffee_shops",
            Table::Orders => "coffee_entries",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failures reported by the record store itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no row in {table} with id {id}")]
    NotFound { table: Table, id: Uuid },

    #[error("invalid id: {0:?}")]
    InvalidId(String),

    #[error("duplicate id {id} in {table}")]
    DuplicateId { table: Table, id: Uuid },

    #[error("shop {0} does not exist")]
    MissingShop(Uuid),

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    /// The store's own message, or `None` when it carried no text.
    pub fn message(&self) -> Option<String> {
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

#[derive(Error, Debug)]
pub enum BrewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse error category, used to pick the log level and the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Store,
    Unexpected,
}

impl BrewError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrewError::Validation(_) => ErrorKind::Validation,
            BrewError::Store(_) => ErrorKind::Store,
            BrewError::Io(_) | BrewError::Serialization(_) | BrewError::Config(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BrewError>;
