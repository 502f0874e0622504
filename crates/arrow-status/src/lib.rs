//! Status codes returned by the columnar I/O library.
//!
//! Operations in this library never unwind. They report failure by returning
//! a [`Status`] whose [`StatusCode`] is anything other than [`StatusCode::Ok`].

pub mod status;

pub use status::{Status, StatusCode};
