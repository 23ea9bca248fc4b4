//! In-memory gateway used by the integrity service tests.
//!
//! Mirrors the PostgreSQL schema's constraints: unique category names,
//! a foreign key from notes to categories with `ON DELETE NO ACTION`.
//! Failure knobs let tests exercise gateway-error paths.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use notekeep_core::category::Category;
use notekeep_core::note::Note;
use notekeep_core::store::{CategoryStore, NoteStore, StoreError, StoreResult};
use notekeep_core::types::EntityId;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    notes: Vec<Note>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    /// Every call fails with a backend error while set.
    offline: AtomicBool,
    /// Name lookups report no match, as if a concurrent writer had not
    /// committed yet.
    stale_name_lookups: AtomicBool,
    /// Note deletes succeed this many times, then fail.
    note_deletes_before_failure: AtomicUsize,
    fail_note_deletes: AtomicBool,
    /// Notes still returned by category listings after they were deleted,
    /// as seen by a reader racing a concurrent delete.
    ghost_notes: Mutex<Vec<Note>>,
    /// Categories left out of full listings, as seen by a reader racing a
    /// concurrent category delete.
    unlisted_categories: Mutex<Vec<EntityId>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_stale_name_lookups(&self, stale: bool) {
        self.stale_name_lookups.store(stale, Ordering::SeqCst);
    }

    pub fn fail_note_deletes_after(&self, successes: usize) {
        self.note_deletes_before_failure
            .store(successes, Ordering::SeqCst);
        self.fail_note_deletes.store(true, Ordering::SeqCst);
    }

    pub fn note_count(&self) -> usize {
        self.tables.lock().unwrap().notes.len()
    }

    /// Remove a note behind the services' back, leaving it visible to
    /// category listings.
    pub fn remove_note_concurrently(&self, id: EntityId) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(pos) = tables.notes.iter().position(|n| n.id == id) {
            let note = tables.notes.remove(pos);
            self.ghost_notes.lock().unwrap().push(note);
        }
    }

    /// Hide a category from `list_categories` while leaving it resolvable
    /// by id.
    pub fn unlist_category_concurrently(&self, id: EntityId) {
        self.unlisted_categories.lock().unwrap().push(id);
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("connection refused".to_string()));
        }
        Ok(())
    }
}

impl CategoryStore for MemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.check_online()?;
        let unlisted = self.unlisted_categories.lock().unwrap();
        let mut categories: Vec<Category> = self
            .tables
            .lock()
            .unwrap()
            .categories
            .iter()
            .filter(|c| !unlisted.contains(&c.id))
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_category(&self, id: EntityId) -> StoreResult<Option<Category>> {
        self.check_online()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        self.check_online()?;
        if self.stale_name_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn create_category(&self, name: &str) -> StoreResult<Category> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.iter().any(|c| c.name == name) {
            return Err(unique_violation());
        }
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: EntityId, name: &str) -> StoreResult<Option<Category>> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.iter().any(|c| c.name == name && c.id != id) {
            return Err(unique_violation());
        }
        Ok(tables
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| {
                c.name = name.to_string();
                c.updated_at = Utc::now();
                c.clone()
            }))
    }

    async fn delete_category(&self, id: EntityId) -> StoreResult<bool> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.notes.iter().any(|n| n.category_id == id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "fk_notes_category_id".to_string(),
            });
        }
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        Ok(tables.categories.len() < before)
    }
}

impl NoteStore for MemoryStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        self.check_online()?;
        Ok(self.tables.lock().unwrap().notes.clone())
    }

    async fn find_note(&self, id: EntityId) -> StoreResult<Option<Note>> {
        self.check_online()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.notes.iter().find(|n| n.id == id).cloned())
    }

    async fn list_notes_by_category(&self, category_id: EntityId) -> StoreResult<Vec<Note>> {
        self.check_online()?;
        let tables = self.tables.lock().unwrap();
        let ghosts = self.ghost_notes.lock().unwrap();
        Ok(tables
            .notes
            .iter()
            .chain(ghosts.iter())
            .filter(|n| n.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn count_notes_by_category(&self, category_id: EntityId) -> StoreResult<i64> {
        self.check_online()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .notes
            .iter()
            .filter(|n| n.category_id == category_id)
            .count() as i64)
    }

    async fn create_note(
        &self,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> StoreResult<Note> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.categories.iter().any(|c| c.id == category_id) {
            return Err(foreign_key_violation());
        }
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            category_id,
            created_at: now,
            updated_at: now,
        };
        tables.notes.push(note.clone());
        Ok(note)
    }

    async fn update_note(
        &self,
        id: EntityId,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> StoreResult<Option<Note>> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.categories.iter().any(|c| c.id == category_id) {
            return Err(foreign_key_violation());
        }
        Ok(tables.notes.iter_mut().find(|n| n.id == id).map(|n| {
            n.title = title.to_string();
            n.content = content.to_string();
            n.category_id = category_id;
            n.updated_at = Utc::now();
            n.clone()
        }))
    }

    async fn delete_note(&self, id: EntityId) -> StoreResult<bool> {
        self.check_online()?;
        if self.fail_note_deletes.load(Ordering::SeqCst) {
            let remaining = self.note_deletes_before_failure.load(Ordering::SeqCst);
            if remaining == 0 {
                return Err(StoreError::Backend("deadlock detected".to_string()));
            }
            self.note_deletes_before_failure
                .store(remaining - 1, Ordering::SeqCst);
        }
        let mut tables = self.tables.lock().unwrap();
        let before = tables.notes.len();
        tables.notes.retain(|n| n.id != id);
        Ok(tables.notes.len() < before)
    }
}

fn unique_violation() -> StoreError {
    StoreError::UniqueViolation {
        constraint: "uq_notes_categories_name".to_string(),
    }
}

fn foreign_key_violation() -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: "fk_notes_category_id".to_string(),
    }
}
