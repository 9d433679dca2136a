use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unrecognized intent: {}", name.as_deref().unwrap_or("<none>"))]
    UnrecognizedIntent { name: Option<String> },
}

/// Failures as seen from the platform boundary. The platform renders a
/// generic apology to the end user; the correlation id ties the spoken
/// failure back to the logs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Sorry, I didn't get that. Please try again.",
            Self::Internal { .. } => "Something went wrong handling that request.",
        }
    }
}

impl DomainError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        match self {
            DomainError::UnrecognizedIntent { .. } => InterfaceError::BadRequest {
                message: self.to_string(),
                correlation_id: correlation_id.into(),
            },
        }
    }
}
