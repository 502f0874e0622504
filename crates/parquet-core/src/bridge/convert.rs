//! Conversions between faults and statuses.

use std::panic::{self, AssertUnwindSafe};

use super::status::ArrowStatus;
use crate::errors::{ParquetErrorCode, ParquetException, Result};
use crate::tracing::{fields, BRIDGE_TARGET};

/// Fail with `message` verbatim. Never returns `Ok`.
pub fn raise<T>(message: impl Into<String>) -> Result<T> {
    Err(ParquetException::new(message))
}

/// Fail with an end-of-stream fault. See [`ParquetException::eof`].
pub fn raise_eof<T>(detail: &str) -> Result<T> {
    Err(ParquetException::eof(detail))
}

/// Fail with a not-implemented fault. See [`ParquetException::nyi`].
pub fn raise_nyi<T>(detail: &str) -> Result<T> {
    Err(ParquetException::nyi(detail))
}

/// Raise a failed `status` as a fault with message `"Arrow error: " + description`.
/// An ok status passes through with no side effect.
pub fn throw_not_ok<S: ArrowStatus>(status: S) -> Result<()> {
    if status.is_ok() {
        return Ok(());
    }
    let fault = ParquetException::arrow(&status.description());
    tracing::debug!(
        target: BRIDGE_TARGET,
        {
            { fields::ERROR_CODE } = fault.error_code(),
            { fields::FAULT } = fault.message(),
        },
        "status raised as fault"
    );
    Err(fault)
}

/// Discard `status`, ok or not. For failures that cannot be acted on at the
/// call site, such as best-effort cleanup. Never raises.
pub fn ignore_not_ok<S: ArrowStatus>(status: S) {
    if !status.is_ok() {
        tracing::trace!(
            target: BRIDGE_TARGET,
            { { fields::STATUS } = %status.description() },
            "error status ignored"
        );
    }
}

/// Run `f` and convert any [`ParquetException`] it raises into an I/O error status.
///
/// - `Ok(value)` from `f` is returned unchanged.
/// - `Err(fault)` from `f` becomes `Err(S::io_error(message))`.
/// - A panic whose payload is a `ParquetException` is caught and converted the same way.
/// - A panic with any other payload is resumed untouched.
pub fn catch_not_ok<T, S, F>(f: F) -> std::result::Result<T, S>
where
    S: ArrowStatus,
    F: FnOnce() -> Result<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(fault)) => Err(fault_to_status(fault)),
        Err(payload) => match payload.downcast::<ParquetException>() {
            Ok(fault) => Err(fault_to_status(*fault)),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

pub(crate) fn fault_to_status<S: ArrowStatus>(fault: ParquetException) -> S {
    tracing::debug!(
        target: BRIDGE_TARGET,
        {
            { fields::ERROR_CODE } = fault.error_code(),
            { fields::FAULT } = fault.message(),
        },
        "fault converted to IOError status"
    );
    S::io_error(fault.into_message())
}
