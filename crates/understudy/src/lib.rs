#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

// Session, ledger, and virtual key-value store
pub use understudy_core::{
    CallLedger, CallRecord, OpKind, Session, Store, StoreError, StoreOp,
};

// HTTP exchange bridge
pub use understudy_http::{
    ExchangeError, Fields, IncomingHandler, IncomingRequest, Method, OutgoingRequest, Response,
    ResponseOutparam, ResponseReceiver, perform_request, response_pair,
};

// Test registry and runner
pub use understudy_registry::{RegisteredTest, RegistryError, TestRegistry, runner};

// Re-exported for `harness_test!` expansion
#[doc(hidden)]
pub use understudy_registry::inventory;

pub use understudy_registry::harness_test;
