use thiserror::Error;
use wasm_bindgen::JsValue;

pub type NavResult<T> = Result<T, NavError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("invalid navigation config: {0}")]
    Config(String),

    #[error("could not install window.{name}: {message}")]
    Global { name: String, message: String },
}

impl NavError {
    pub(crate) fn selector(selector: &str, err: JsValue) -> Self {
        NavError::Selector {
            selector: selector.to_string(),
            message: format!("{:?}", err),
        }
    }
}

impl From<NavError> for JsValue {
    fn from(err: NavError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
