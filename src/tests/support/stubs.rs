use std::sync::atomic::{AtomicUsize, Ordering};

use crate::modules::editor::application::ports::outgoing::IdGenerator;
use crate::modules::storage::application::ports::outgoing::{KeyValueStore, StorageError};

// ============================================================================
// Storage stubs
// ============================================================================

/// Every call fails as if the disk had gone away.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingKeyValueStore;

impl KeyValueStore for FailingKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }
}

// ============================================================================
// Id stubs
// ============================================================================

/// Deterministic ids: `proj-1`, `proj-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{prefix}-{n}")
    }
}
