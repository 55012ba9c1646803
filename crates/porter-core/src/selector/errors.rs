use crate::errors::PorterError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("No project at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PorterError for SelectorError {
    fn error_code(&self) -> &'static str {
        match self {
            SelectorError::IndexOutOfRange { .. } => "SELECTOR_INDEX_OUT_OF_RANGE",
        }
    }
}
