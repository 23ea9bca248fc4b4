//! Database row structs.
//!
//! Each submodule holds a `FromRow` struct matching the table columns and a
//! conversion into the domain type from `notekeep_core`.

pub mod category;
pub mod note;
