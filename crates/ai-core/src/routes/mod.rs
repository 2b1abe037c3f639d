//! HTTP route handlers.

pub mod automation;
pub mod health;
pub mod telemetry;
