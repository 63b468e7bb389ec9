use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding to the browser. None of these reach the user; the
/// caller logs them and falls back to a no-op.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("node ref is not attached to an element")]
    Detached,

    #[error("IntersectionObserver rejected: {0}")]
    Observer(String),
}

impl LandingError {
    pub fn observer(err: JsValue) -> Self {
        LandingError::Observer(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
