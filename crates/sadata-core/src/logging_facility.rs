//! Structured logging for query operations
//!
//! `init(profile)` installs the process subscriber once. Operations log
//! through `log_op_start!` / `log_op_end!` / `log_op_error!`, passing
//! `request_id = ctx.request_id.as_str()` so every line of one request can
//! be correlated. Tests swap the subscriber for [`init_test_capture`].
//!
//! ```rust
//! use sadata_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
