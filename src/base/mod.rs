//! Base types and error handling.
//!
//! - [`NetError`]: Network error codes matching `net_error_list.h`

pub mod neterror;

pub use neterror::NetError;
