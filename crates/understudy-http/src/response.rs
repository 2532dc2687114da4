//! Response delivery: the outparam/receiver exchange.
//!
//! [`response_pair`] allocates the two halves of one exchange over a shared
//! write-once slot. The outparam goes to the component's entry point; the
//! receiver stays with the test. There is no background thread: by the time
//! a well-formed test reads the receiver, the entry-point call has already
//! returned and the slot is filled. A read before any write is a typed
//! error, never a hang.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::{ExchangeError, Fields};

/// Response produced by the component under test. Read-only once obtained
/// from the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Fields,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Fields::new(),
            body: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &Fields {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

type Slot = Arc<Mutex<Option<Response>>>;

/// Allocate a correlated outparam/receiver pair over one response slot.
///
/// Exactly one outparam pairs with exactly one receiver; writing to the
/// outparam and reading from the receiver refer to the same logical slot.
pub fn response_pair() -> (ResponseOutparam, ResponseReceiver) {
    let slot: Slot = Arc::new(Mutex::new(None));
    (
        ResponseOutparam { slot: slot.clone() },
        ResponseReceiver { slot },
    )
}

/// Write half of one exchange, handed to the component's entry point.
///
/// Consuming `self` on write makes the slot write-once by construction.
#[derive(Debug)]
pub struct ResponseOutparam {
    slot: Slot,
}

impl ResponseOutparam {
    /// Deliver the response to the paired receiver.
    pub fn set(self, response: Response) {
        trace!(status = response.status_code(), "response written to outparam");
        *self.slot.lock() = Some(response);
    }
}

/// Read half of one exchange, retained by the test.
#[derive(Debug)]
pub struct ResponseReceiver {
    slot: Slot,
}

impl ResponseReceiver {
    /// Take the response the entry point wrote to the paired outparam.
    ///
    /// Fails with [`ExchangeError::ResponseUnset`] if nothing was written:
    /// the entry point dropped its outparam without responding, or the test
    /// read before invoking it. Consumes the receiver, so a stale re-read
    /// is unrepresentable.
    pub fn get(self) -> Result<Response, ExchangeError> {
        self.slot
            .lock()
            .take()
            .ok_or(ExchangeError::ResponseUnset)
    }
}
