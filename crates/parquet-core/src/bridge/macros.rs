//! Call-site macros over the bridge functions.

/// Evaluate a status expression and raise it with `?` if it failed.
/// Usable in any function returning [`parquet_core::Result`](crate::Result)
/// or another `Result` whose error converts from `ParquetException`.
#[macro_export]
macro_rules! parquet_throw_not_ok {
    ($status:expr) => {
        $crate::bridge::throw_not_ok($status)?
    };
}

/// Evaluate a fault-raising expression inside a status-returning function.
/// On fault, returns the converted I/O error status from the enclosing
/// function; otherwise yields the expression's `Ok` value.
///
/// The expression runs inside a closure, so `?` in it targets the expression
/// itself and `return` leaves only the expression.
#[macro_export]
macro_rules! parquet_catch_not_ok {
    ($body:expr) => {
        match $crate::bridge::catch_not_ok(|| $body) {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(status) => return status,
        }
    };
}

/// Discard a status expression on purpose.
#[macro_export]
macro_rules! parquet_ignore_not_ok {
    ($status:expr) => {
        $crate::bridge::ignore_not_ok($status)
    };
}
