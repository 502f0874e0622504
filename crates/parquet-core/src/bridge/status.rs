//! The bridge's view of a status value.

use arrow_status::Status;

use super::convert::fault_to_status;
use crate::errors::ParquetException;

/// What the bridge needs from a status type. The status type itself belongs
/// to the underlying library.
pub trait ArrowStatus: Sized {
    /// Whether the status reports success.
    fn is_ok(&self) -> bool;

    /// Human-readable description, used after the `"Arrow error: "` prefix.
    fn description(&self) -> String;

    /// Error status in the I/O category carrying `message`.
    fn io_error(message: String) -> Self;
}

impl ArrowStatus for Status {
    fn is_ok(&self) -> bool {
        Status::is_ok(self)
    }

    fn description(&self) -> String {
        self.to_string()
    }

    fn io_error(message: String) -> Self {
        Status::io_error(message)
    }
}

impl From<ParquetException> for Status {
    fn from(fault: ParquetException) -> Self {
        fault_to_status(fault)
    }
}
