//! Session scope for one test invocation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::{CallLedger, Store, StoreError};

/// One test invocation's virtualization scope.
///
/// Owns the call ledger and every store opened during the invocation;
/// dropping the session tears all of it down. Two sessions never observe
/// each other's state, which is what keeps test invocations independent
/// when a runner executes several of them in one process.
///
/// Clones share the same scope, so a session can be handed to the component
/// under test as its capability provider while the test keeps its own copy
/// for assertions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: CallLedger,
    stores: Arc<Mutex<HashMap<String, Store>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the store named `label`, creating it with an empty backing map
    /// on first open. Idempotent: reopening returns a handle to the same
    /// underlying map.
    pub fn open_store(&self, label: &str) -> Store {
        let mut stores = self.stores.lock();
        stores
            .entry(label.to_owned())
            .or_insert_with(|| {
                trace!(label, "creating virtual store");
                Store::new(label.to_owned(), self.ledger.clone())
            })
            .clone()
    }

    /// Look up an already-open store without creating it.
    ///
    /// Operations against a label with no prior [`open_store`] are a test
    /// protocol violation; this surfaces them as a typed error instead of
    /// silently materializing an empty store.
    ///
    /// [`open_store`]: Session::open_store
    pub fn store(&self, label: &str) -> Result<Store, StoreError> {
        self.stores
            .lock()
            .get(label)
            .cloned()
            .ok_or_else(|| StoreError::NotOpened(label.to_owned()))
    }

    /// The session's call ledger.
    pub fn ledger(&self) -> &CallLedger {
        &self.ledger
    }

    /// Clear the call ledger, leaving store contents intact.
    ///
    /// The usual shape is seed, `reset_calls`, exercise, assert: seeding
    /// side effects disappear and assertions see only the measured window.
    pub fn reset_calls(&self) {
        self.ledger.reset();
    }
}
