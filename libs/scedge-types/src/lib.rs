//! Wire types shared by the Scedge waitlist API and its clients.
//!
//! This crate provides:
//! - The persisted waitlist record (`WaitlistEntry`)
//! - Error codes and the JSON error body returned by every failing endpoint
//! - Health and acknowledgement response bodies

mod entry;
mod errors;
mod health;

pub use entry::{ClearResponse, WaitlistEntry};
pub use errors::{ErrorBody, ErrorCode};
pub use health::{HealthResponse, ServicesSummary};
