// src/storage/kv.rs
//
// Key-value backends. The whole namespace is a JSON object; each key holds one
// JSON value. There is no transaction across get/set: callers that
// read-modify-write can lose updates to a concurrent writer.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use super::StoreError;

pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Changes whenever the stored data changes; used to notice writes made
    /// elsewhere (another thread, another process).
    fn revision(&self) -> u64 {
        0
    }
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> { (**self).get(key) }
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> { (**self).set(key, value) }
    fn revision(&self) -> u64 { (**self).revision() }
}

/* ---------------- in-memory ---------------- */

/// Process-local store, for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, Value>>,
    rev: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, bypassing any service logic.
    pub fn with(self, key: &str, value: Value) -> Self {
        self.lock().insert(key.to_string(), value);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        self.map.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value);
        self.rev.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.rev.load(Ordering::Relaxed)
    }
}

/* ---------------- on-disk ---------------- */

/// One JSON object file, rewritten whole on every `set`
/// (temp file + rename, so a reader never sees half a file).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        logd!("Store: FileStore at {}", path.display());
        Ok(Self { path, io_lock: Mutex::new(()) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text)? {
            Value::Object(map) => Ok(map),
            other => Err(StoreError::Shape(format!(
                "{} holds {}, expected an object",
                self.path.display(),
                kind_of(&other)
            ))),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(map)?;
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let _guard = self.io_lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        self.write_all(&map)
    }

    /// Hash of the file bytes; 0 while the file cannot be read.
    fn revision(&self) -> u64 {
        let Ok(bytes) = fs::read(&self.path) else {
            return 0;
        };
        let mut h = DefaultHasher::new();
        bytes.hash(&mut h);
        h.finish()
    }
}

pub(crate) fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
