use tessel_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid separator pattern: {0}")]
    Separator(#[from] regex::Error),
    #[error("failed to encode widget message: {0}")]
    Message(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
}
