//! # Shaping
//!
//! Turns raw form input into records the store can insert, or rejects it with a
//! [`ValidationError`](crate::error::ValidationError) naming the field.
//!
//! Shaping is pure: no store access, no logging. The two shapers deliberately
//! differ in how they treat blank optionals:
//!
//! - [`shape_shop`]: blank `address`/`photo_url` become explicit nulls, `vibe`
//!   is always a (possibly empty) list.
//! - [`shape_order`]: blank optionals are omitted from the record altogether.

pub mod coerce;
pub mod order;
pub mod shop;

pub use order::shape_order;
pub use shop::shape_shop;
