use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    ReadFailed {
        context: String,
        source: Box<StoreErrorSource>,
    },
    WriteFailed {
        context: String,
        source: Box<StoreErrorSource>,
    },
    PermissionDenied {
        context: String,
    },
    DataCorruption {
        context: String,
        details: String,
    },
    Unavailable {
        context: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreErrorSource {
    Io(String),
    Serialization(String),
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ReadFailed { context, source } => {
                write!(f, "Read failed in {context}: {source}")
            }
            StoreError::WriteFailed { context, source } => {
                write!(f, "Write failed in {context}: {source}")
            }
            StoreError::PermissionDenied { context } => {
                write!(f, "Permission denied in {context}")
            }
            StoreError::DataCorruption { context, details } => {
                write!(f, "Data corruption in {context}: {details}")
            }
            StoreError::Unavailable { context } => {
                write!(f, "Store unavailable in {context}")
            }
        }
    }
}

impl fmt::Display for StoreErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreErrorSource::Io(msg) => write!(f, "IO error: {msg}"),
            StoreErrorSource::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            StoreErrorSource::Backend(msg) => write!(f, "Backend error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
impl std::error::Error for StoreErrorSource {}

impl StoreError {
    pub fn from_io_error(e: std::io::Error, context: &str) -> Self {
        match e.kind() {
            std::io::ErrorKind::PermissionDenied => StoreError::PermissionDenied {
                context: context.to_string(),
            },
            _ => StoreError::WriteFailed {
                context: context.to_string(),
                source: Box::new(StoreErrorSource::Io(e.to_string())),
            },
        }
    }

    pub fn from_serialization_error(e: impl fmt::Display, context: &str) -> Self {
        StoreError::DataCorruption {
            context: context.to_string(),
            details: e.to_string(),
        }
    }

    pub fn from_backend_error(e: sled::Error, context: &str) -> Self {
        match e {
            sled::Error::Io(io) => Self::from_io_error(io, context),
            err @ sled::Error::Corruption { .. } => StoreError::DataCorruption {
                context: context.to_string(),
                details: err.to_string(),
            },
            other => StoreError::Unavailable {
                context: format!("{context}: {other}"),
            },
        }
    }

    pub fn from_backend_read_error(e: sled::Error, context: &str) -> Self {
        match e {
            sled::Error::Io(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
                StoreError::PermissionDenied {
                    context: context.to_string(),
                }
            }
            sled::Error::Io(io) => StoreError::ReadFailed {
                context: context.to_string(),
                source: Box::new(StoreErrorSource::Io(io.to_string())),
            },
            other => Self::from_backend_error(other, context),
        }
    }
}
