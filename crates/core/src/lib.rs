//! Domain types and business rules for the notification service.
//!
//! Nothing in this crate touches storage or HTTP; the `db` and `api` crates
//! build on these types.

pub mod error;
pub mod notification;
pub mod priority;
pub mod types;
