//! Append-only log of virtualized store operations.
//!
//! Every operation issued against any open store of a session lands here in
//! call order, whether or not the key existed. The ledger is the assertion
//! surface: tests read it back either as raw tagged records or through the
//! pre-extracted key views.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

/// A single operation issued against a virtual store.
///
/// The ledger records *intent*: a `Get` on a missing key is recorded the
/// same way as a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Get { key: String },
    Set { key: String, value: Vec<u8> },
    Delete { key: String },
    Exists { key: String },
    GetKeys,
}

impl StoreOp {
    /// The operation tag, without its arguments.
    pub fn kind(&self) -> OpKind {
        match self {
            StoreOp::Get { .. } => OpKind::Get,
            StoreOp::Set { .. } => OpKind::Set,
            StoreOp::Delete { .. } => OpKind::Delete,
            StoreOp::Exists { .. } => OpKind::Exists,
            StoreOp::GetKeys => OpKind::GetKeys,
        }
    }

    /// The key this operation targeted, if it targets one.
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreOp::Get { key }
            | StoreOp::Set { key, .. }
            | StoreOp::Delete { key }
            | StoreOp::Exists { key } => Some(key),
            StoreOp::GetKeys => None,
        }
    }

    /// The value carried by the operation (`Set` only).
    pub fn value(&self) -> Option<&[u8]> {
        match self {
            StoreOp::Set { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Operation tag for filtering recorded calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Get,
    Set,
    Delete,
    Exists,
    GetKeys,
}

impl OpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Get => "get",
            OpKind::Set => "set",
            OpKind::Delete => "delete",
            OpKind::Exists => "exists",
            OpKind::GetKeys => "get-keys",
        }
    }
}

/// One ledger entry: which store was called, and with what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Label of the store the call was issued against.
    pub store: String,
    /// The recorded operation.
    pub op: StoreOp,
}

/// Ordered, session-scoped record of store operations.
///
/// Clones share the same underlying log, so every store handle of a session
/// appends to one sequence and relative order across stores is preserved.
/// Appends never fail and reads never mutate.
#[derive(Debug, Clone, Default)]
pub struct CallLedger {
    records: Arc<Mutex<Vec<CallRecord>>>,
}

impl CallLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for `store`. O(1) amortized.
    pub fn record(&self, store: &str, op: StoreOp) {
        trace!(store, op = op.kind().as_str(), key = op.key(), "recording call");
        self.records.lock().push(CallRecord {
            store: store.to_owned(),
            op,
        });
    }

    /// Full ledger content in recording order. Safe to call repeatedly.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.records.lock().clone()
    }

    /// Records for a single store, relative order preserved.
    pub fn calls_for(&self, store: &str) -> Vec<CallRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.store == store)
            .cloned()
            .collect()
    }

    /// Keys of `get` calls issued against `store`, in call order.
    pub fn keys_read(&self, store: &str) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.store == store)
            .filter_map(|record| match &record.op {
                StoreOp::Get { key } => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    /// Key/value pairs of `set` calls issued against `store`, in call order.
    pub fn entries_written(&self, store: &str) -> Vec<(String, Vec<u8>)> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.store == store)
            .filter_map(|record| match &record.op {
                StoreOp::Set { key, value } => Some((key.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Clear all recorded entries.
    ///
    /// Tests call this after seeding so assertions only see the measured
    /// window. The ledger never resets itself.
    pub fn reset(&self) {
        trace!("resetting call ledger");
        self.records.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(key: &str) -> StoreOp {
        StoreOp::Get { key: key.into() }
    }

    fn set(key: &str, value: &[u8]) -> StoreOp {
        StoreOp::Set {
            key: key.into(),
            value: value.to_vec(),
        }
    }

    #[test]
    fn records_preserve_call_order_across_stores() {
        let ledger = CallLedger::new();
        ledger.record("a", set("x", b"1"));
        ledger.record("b", get("y"));
        ledger.record("a", StoreOp::Delete { key: "x".into() });

        let calls = ledger.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].store, "a");
        assert_eq!(calls[0].op.kind(), OpKind::Set);
        assert_eq!(calls[1].store, "b");
        assert_eq!(calls[1].op.kind(), OpKind::Get);
        assert_eq!(calls[2].store, "a");
        assert_eq!(calls[2].op.kind(), OpKind::Delete);
    }

    #[test]
    fn calls_for_filters_and_keeps_relative_order() {
        let ledger = CallLedger::new();
        ledger.record("cache", get("1"));
        ledger.record("other", get("x"));
        ledger.record("cache", get("2"));

        let calls = ledger.calls_for("cache");
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].op.key(), Some("1"));
        assert_eq!(calls[1].op.key(), Some("2"));
    }

    #[test]
    fn reset_clears_without_residue() {
        let ledger = CallLedger::new();
        ledger.record("cache", set("seed", b"v"));
        ledger.reset();
        assert!(ledger.calls().is_empty());

        ledger.record("cache", get("fresh"));
        let calls = ledger.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op.key(), Some("fresh"));
    }

    #[test]
    fn keys_read_extracts_only_get_calls() {
        let ledger = CallLedger::new();
        ledger.record("cache", set("a", b"1"));
        ledger.record("cache", get("b"));
        ledger.record("cache", StoreOp::Exists { key: "c".into() });
        ledger.record("cache", get("d"));

        assert_eq!(ledger.keys_read("cache"), vec!["b".to_owned(), "d".to_owned()]);
    }

    #[test]
    fn entries_written_extracts_only_set_calls() {
        let ledger = CallLedger::new();
        ledger.record("cache", get("a"));
        ledger.record("cache", set("b", b"2"));
        ledger.record("other", set("c", b"3"));

        assert_eq!(
            ledger.entries_written("cache"),
            vec![("b".to_owned(), b"2".to_vec())]
        );
    }

    #[test]
    fn clones_share_one_log() {
        let ledger = CallLedger::new();
        let other = ledger.clone();
        other.record("cache", get("k"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn op_accessors() {
        let op = set("k", b"v");
        assert_eq!(op.kind(), OpKind::Set);
        assert_eq!(op.key(), Some("k"));
        assert_eq!(op.value(), Some(&b"v"[..]));

        assert_eq!(StoreOp::GetKeys.key(), None);
        assert_eq!(get("k").value(), None);
    }
}
