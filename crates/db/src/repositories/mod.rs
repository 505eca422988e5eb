//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept the unit-of-work connection as the first argument.

pub mod notification_repo;

pub use notification_repo::NotificationRepo;
