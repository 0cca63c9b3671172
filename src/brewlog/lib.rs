//! # Brewlog Architecture
//!
//! Brewlog keeps a catalog of coffee shops and the coffees tried at them. The
//! catalog logic is a library; the `brewlog` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (cli/, wired by main.rs)                        │
//! │  - Parses arguments, renders lists and detail screens       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gateway (api.rs)                                           │
//! │  - One method per operation, returns an Envelope            │
//! │  - Never fails: every outcome is success/data/error         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs) + Shaping (shape/)                │
//! │  - Validate and normalize raw input, then one store call    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait: insert / select / delete-by-id        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It
//! never prints, never exits, and reaches the datastore only through the store
//! handle it was given. Diagnostics go through `tracing`; installing a
//! subscriber is the client's business.
//!
//! ## Testing Strategy
//!
//! 1. **Shaping** (`shape/`): every validation rule and normalization.
//! 2. **Commands** and **stores**: business flow against `InMemoryStore`,
//!    persistence against `FileStore` in a temp dir.
//! 3. **API**: envelope settling and dispatch.
//! 4. **CLI** (`tests/`): the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: the gateway and its [`api::Envelope`]
//! - [`commands`]: create / delete / list / config operations
//! - [`shape`]: validation and record shaping
//! - [`input`]: loosely-typed form input
//! - [`model`]: shops, orders and their enumerations
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: per-data-dir configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod shape;
pub mod store;
