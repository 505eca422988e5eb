//! Entity structs and repository DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO with every column the insert needs already resolved
//! - An update DTO (all `Option` fields) for patches

pub mod notification;
