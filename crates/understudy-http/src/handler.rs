//! The component entry-point seam.

use crate::{ExchangeError, IncomingRequest, OutgoingRequest, Response, ResponseOutparam, response_pair};

/// A component's request-handling entry point.
///
/// One exported operation: take the inbound request and an outparam, return
/// nothing. The result is delivered through the outparam. In production
/// this contract sits at the sandbox boundary; in tests any implementor
/// stands in for the loaded component.
pub trait IncomingHandler {
    fn handle(&self, request: IncomingRequest, outparam: ResponseOutparam);
}

impl<F> IncomingHandler for F
where
    F: Fn(IncomingRequest, ResponseOutparam),
{
    fn handle(&self, request: IncomingRequest, outparam: ResponseOutparam) {
        self(request, outparam)
    }
}

/// Drive one full exchange: finalize the request, allocate the response
/// pair, invoke the entry point, and read the response back.
///
/// The bridge itself never runs the component; this helper is the caller
/// that does, and it reads the receiver only after the entry-point call has
/// returned, which is what makes the handoff race-free.
pub fn perform_request<H>(handler: &H, request: OutgoingRequest) -> Result<Response, ExchangeError>
where
    H: IncomingHandler + ?Sized,
{
    let request = request.into_incoming()?;
    let (outparam, receiver) = response_pair();
    handler.handle(request, outparam);
    receiver.get()
}
