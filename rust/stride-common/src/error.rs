use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_step(step: i128) -> Error {
        Error(ErrorKind::InvalidStep { step }.into())
    }

    pub fn out_of_range(name: impl Into<String>, value: impl Into<String>) -> Error {
        Error(
            ErrorKind::OutOfRange {
                name: name.into(),
                value: value.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if the error was raised for a zero or unrepresentable step.
    pub fn is_invalid_step(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidStep { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid step {step}: non-zero number with a representable magnitude required")]
    InvalidStep { step: i128 },

    #[error("{name} is out of range: {value}")]
    OutOfRange { name: String, value: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
