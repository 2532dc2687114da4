//! The component under test.

use understudy::{IncomingHandler, IncomingRequest, Response, ResponseOutparam, Store};

/// Looks up users by id in a cache store.
///
/// `GET /?user_id=<id>` answers 200 with the cached record, 404 when the id
/// is unknown, and 400 when the query parameter is missing. Stands in for
/// the compiled component binary: same entry-point contract, same
/// capability usage.
pub struct UserLookup {
    cache: Store,
}

impl UserLookup {
    pub fn new(cache: Store) -> Self {
        Self { cache }
    }
}

impl IncomingHandler for UserLookup {
    fn handle(&self, request: IncomingRequest, outparam: ResponseOutparam) {
        let Some(user_id) = request.query_param("user_id") else {
            outparam.set(Response::new(400).with_body(&b"missing user_id"[..]));
            return;
        };
        match self.cache.get(user_id) {
            Some(user) => outparam.set(
                Response::new(200)
                    .with_header("content-type", &b"application/json"[..])
                    .with_body(user),
            ),
            None => outparam.set(Response::new(404)),
        }
    }
}
