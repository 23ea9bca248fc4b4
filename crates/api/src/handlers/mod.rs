pub mod categories;
pub mod notes;
