//! Virtual key-value store.
//!
//! Each store is an in-memory map owned by a [`Session`](crate::Session).
//! Every operation appends to the session's call ledger before touching the
//! map, so the ledger reflects what was asked even when the answer is
//! "absent".

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{CallLedger, StoreOp};

/// Handle to a named virtual key-value store.
///
/// Handles are cheap to clone and share the backing map: a `set` through one
/// handle is visible through every other handle opened under the same label.
#[derive(Debug, Clone)]
pub struct Store {
    label: String,
    inner: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    ledger: CallLedger,
}

impl Store {
    pub(crate) fn new(label: String, ledger: CallLedger) -> Self {
        Self {
            label,
            inner: Default::default(),
            ledger,
        }
    }

    /// The label this store was opened under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Look up `key`. Records a `get` call whether or not the key is present.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.ledger
            .record(&self.label, StoreOp::Get { key: key.to_owned() });
        self.inner.read().get(key).cloned()
    }

    /// Store or overwrite `key`. Records a `set` call including the value.
    pub fn set(&self, key: &str, value: impl Into<Vec<u8>>) {
        let value = value.into();
        self.ledger.record(
            &self.label,
            StoreOp::Set {
                key: key.to_owned(),
                value: value.clone(),
            },
        );
        self.inner.write().insert(key.to_owned(), value);
    }

    /// Remove `key` if present. No error if absent; the call is recorded
    /// either way.
    pub fn delete(&self, key: &str) {
        self.ledger
            .record(&self.label, StoreOp::Delete { key: key.to_owned() });
        let _ = self.inner.write().remove(key);
    }

    /// Whether `key` is present. Records an `exists` call.
    pub fn exists(&self, key: &str) -> bool {
        self.ledger
            .record(&self.label, StoreOp::Exists { key: key.to_owned() });
        self.inner.read().contains_key(key)
    }

    /// All live keys, sorted. Records a `get-keys` call.
    pub fn get_keys(&self) -> Vec<String> {
        self.ledger.record(&self.label, StoreOp::GetKeys);
        let mut keys: Vec<String> = self.inner.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}
