//! Field names recorded on bridge events.
//!
//! Shared so log queries and tests match the names the bridge emits.

/// Error code of the fault, e.g. `ARROW_ERROR`.
pub const ERROR_CODE: &str = "error_code";

/// Message of the fault being raised or converted.
pub const FAULT: &str = "fault";

/// Description of a status being discarded.
pub const STATUS: &str = "status";
