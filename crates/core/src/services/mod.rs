//! Integrity services.
//!
//! Each service is a stateless policy layer over an injected gateway: it
//! validates input, checks existence and uniqueness, then performs the
//! write. Every failure comes back as a [`CoreError`]; gateway errors that
//! carry no domain meaning are logged and collapsed into
//! [`CoreError::Internal`].

pub mod cascade;
pub mod category;
pub mod note;

pub use cascade::{CascadeDeleter, CascadeOutcome};
pub use category::CategoryService;
pub use note::NoteService;

use crate::error::CoreError;
use crate::store::StoreError;

/// Log an unclassified gateway failure and hide it behind `context`.
pub(crate) fn store_failure(context: &'static str, err: StoreError) -> CoreError {
    tracing::error!(error = %err, "{context}");
    CoreError::Internal(context.to_string())
}
