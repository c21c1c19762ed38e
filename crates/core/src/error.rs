use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Form data must be an object, received {0}")]
    NotAnObject(&'static str),

    #[error("Unknown form schema: {0}")]
    UnknownSchema(String),

    #[error("Invalid schema configuration: {0}")]
    InvalidConfig(String),

    #[error("Validated record could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CoreError {
    /// Field violations, if this error came from form validation.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CoreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        CoreError::Validation(errors)
    }
}
