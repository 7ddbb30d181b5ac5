use tessel_core::CoreError;
use tessel_ssr::SsrError;
use tessel_widgets::WidgetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no bound widget with id {0:?}")]
    UnknownWidget(String),
    #[error("runtime has no mounted tree")]
    NotMounted,
    #[error("no bound widget at node {0}")]
    UnknownNode(u64),
    #[error("malformed input message: {0}")]
    Message(#[from] serde_json::Error),
    #[error(transparent)]
    Widget(#[from] WidgetError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Render(#[from] SsrError),
}
