//! # Command Layer
//!
//! One module per operation. Each function composes shaping with a single store
//! call and returns a plain `Result`; turning that into an
//! [`Envelope`](crate::api::Envelope) is the API facade's job.

use crate::config::BrewConfig;
use crate::model::{Order, Shop};
use serde::Serialize;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;

/// A shop together with its tasting entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopDetail {
    pub shop: Shop,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of non-catalog commands (configuration).
#[derive(Debug, Default)]
pub struct CmdResult {
    pub config: Option<BrewConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: BrewConfig) -> Self {
        self.config = Some(config);
        self
    }
}
