//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` public projection returned by the API
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (presence-aware fields) for patches

pub mod hero;
