use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order id already exists: {0}")]
    DuplicateOrderId(String),

    #[error("order {0} has no line items")]
    EmptyOrder(String),

    #[error("selection {position} out of range (1-{len})")]
    SelectionOutOfRange { position: usize, len: usize },

    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
