//! `Status` and `StatusCode`.

use std::fmt;

/// Error category carried by a [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok,
    OutOfMemory,
    KeyError,
    TypeError,
    Invalid,
    IOError,
    CapacityError,
    IndexError,
    Cancelled,
    UnknownError,
    NotImplemented,
    SerializationError,
    AlreadyExists,
}

impl StatusCode {
    /// Human-readable name used as the prefix of [`Status`]'s `Display`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::OutOfMemory => "Out of memory",
            StatusCode::KeyError => "Key error",
            StatusCode::TypeError => "Type error",
            StatusCode::Invalid => "Invalid",
            StatusCode::IOError => "IOError",
            StatusCode::CapacityError => "Capacity error",
            StatusCode::IndexError => "Index error",
            StatusCode::Cancelled => "Cancelled",
            StatusCode::UnknownError => "Unknown error",
            StatusCode::NotImplemented => "NotImplemented",
            StatusCode::SerializationError => "Serialization error",
            StatusCode::AlreadyExists => "Already exists",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a library operation: either ok, or an error category plus a message.
///
/// An ok status never carries a message.
#[must_use = "a Status may carry an error; check it or discard it explicitly"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: StatusCode,
    message: String,
}

impl Status {
    /// The success status.
    pub fn ok() -> Self {
        Self {
            code: StatusCode::Ok,
            message: String::new(),
        }
    }

    /// Build a status with an explicit category.
    ///
    /// `StatusCode::Ok` always yields the plain success status; the message is dropped.
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        if code == StatusCode::Ok {
            return Self::ok();
        }
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::IOError, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Invalid, message)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotImplemented, message)
    }

    pub fn out_of_memory(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OutOfMemory, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Cancelled, message)
    }

    pub fn unknown_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UnknownError, message)
    }

    pub fn is_ok(&self) -> bool {
        self.code == StatusCode::Ok
    }

    pub fn is_io_error(&self) -> bool {
        self.code == StatusCode::IOError
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// The error message. Empty for an ok status.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convert into a `Result`, handing the status back on error.
    pub fn into_result(self) -> Result<(), Status> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str(StatusCode::Ok.as_str());
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}
