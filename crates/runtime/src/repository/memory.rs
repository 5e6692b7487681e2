//! In-memory SaveRepository implementation for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::repository::{RepositoryError, SaveDocuments, SaveRepository};

/// Keeps saves in a map. Single-threaded by design, like the session.
#[derive(Debug, Default)]
pub struct MemorySaveRepository {
    saves: RefCell<HashMap<String, SaveDocuments>>,
}

impl MemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of save slots currently held.
    pub fn len(&self) -> usize {
        self.saves.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.borrow().is_empty()
    }
}

impl SaveRepository for MemorySaveRepository {
    fn save(&self, docs: &SaveDocuments) -> Result<(), RepositoryError> {
        self.saves
            .borrow_mut()
            .insert(docs.player.name.clone(), docs.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<SaveDocuments>, RepositoryError> {
        Ok(self.saves.borrow().get(name).cloned())
    }
}
