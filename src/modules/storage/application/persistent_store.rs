use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::modules::storage::application::ports::outgoing::key_value_store::{
    KeyValueStore, StorageError,
};

/// Structural check applied to a parsed value before it is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
}

impl Shape {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Array => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Array => write!(f, "array"),
            Shape::Object => write!(f, "object"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ReadFailure {
    #[error("{0}")]
    Store(#[from] StorageError),

    #[error("malformed JSON: {0}")]
    Parse(String),

    #[error("expected a JSON {0}")]
    Shape(Shape),

    #[error("unexpected content: {0}")]
    Decode(String),
}

/// Safe-parse-or-fallback layer over a raw [`KeyValueStore`].
///
/// Reads never fail: anything absent, unparsable, of the wrong shape or not
/// decodable into `T` yields the caller's fallback. Writes are unconditional.
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    pub fn read<T>(&self, key: &str, fallback: T, shape: Shape) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_read(key, shape) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(reason) => {
                warn!(key, %reason, "Discarding persisted value, falling back to default");
                fallback
            }
        }
    }

    pub fn write<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let text = serde_json::to_string(value)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.backend.set(key, &text)
    }

    pub fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    fn try_read<T>(&self, key: &str, shape: Shape) -> Result<Option<T>, ReadFailure>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };

        let parsed: Value =
            serde_json::from_str(&raw).map_err(|e| ReadFailure::Parse(e.to_string()))?;

        if !shape.matches(&parsed) {
            return Err(ReadFailure::Shape(shape));
        }

        serde_json::from_value(parsed)
            .map(Some)
            .map_err(|e| ReadFailure::Decode(e.to_string()))
    }
}
