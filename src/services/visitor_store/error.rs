/// Failures of the visitor store, split by the operation that hit them so
/// the caller can choose between degrading and showing an error screen.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("visitor store unavailable: {0}")]
    Init(String),

    #[error("failed to record visit: {0}")]
    Write(String),

    #[error("failed to count visitors: {0}")]
    Read(String),
}

impl StoreError {
    /// True when the store could not be opened at all.
    pub fn is_init(&self) -> bool {
        matches!(self, StoreError::Init(_))
    }
}
