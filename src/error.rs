//! Error type shared by the buffers, graphs and config persistence.

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// Construction-time misconfiguration (zero capacity, degenerate region, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Buffer or channel index outside the valid range.
    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

impl GraphError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        GraphError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
