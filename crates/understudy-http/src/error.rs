/// Error type for exchange protocol misuse.
///
/// These are programming errors in the test, not runtime conditions the
/// harness recovers from. They fail deterministically instead of hanging or
/// defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// The request was finalized before `set_path_with_query` was called.
    PathUnset,
    /// The receiver was read before the entry point wrote a response.
    ResponseUnset,
}

impl std::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExchangeError::PathUnset => {
                write!(f, "request finalized without a path; call set_path_with_query first")
            }
            ExchangeError::ResponseUnset => {
                write!(f, "no response was written to the paired outparam")
            }
        }
    }
}

impl std::error::Error for ExchangeError {}
