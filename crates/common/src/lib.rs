//! Runtime plumbing shared by the AirGuard binaries.
//!
//! Both the web page server and the AI-Core API initialise tracing and
//! wait for shutdown signals the same way; this crate holds that code.

pub mod observability;
pub mod shutdown;

pub use observability::{LogFormat, init_tracing};
pub use shutdown::shutdown_signal;
