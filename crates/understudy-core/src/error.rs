/// Error type for store lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No store with this label has been opened in the session.
    NotOpened(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotOpened(label) => {
                write!(f, "no store named '{}' has been opened", label)
            }
        }
    }
}

impl std::error::Error for StoreError {}
