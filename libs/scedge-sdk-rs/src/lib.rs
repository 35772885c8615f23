//! Rust client for the Scedge waitlist API.
//!
//! # Features
//!
//! - **Waitlist calls** - signup, list, clear and health, with duplicate
//!   signups reported as success
//! - **Admin polling** - a cancellable timer publishing the list through a
//!   `tokio::sync::watch` channel
//! - **CSV export** - always available, also without the `client` feature
//!
//! # Example
//!
//! ```rust,ignore
//! use scedge_sdk::{SaveOutcome, ScedgeClient};
//!
//! let client = ScedgeClient::new("https://api.example.com")?;
//!
//! match client.save_email("ada@example.com").await? {
//!     SaveOutcome::Created(entry) => println!("joined at {}", entry.timestamp),
//!     SaveOutcome::AlreadyListed => println!("already on the list"),
//! }
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
mod export;
#[cfg(feature = "client")]
mod poller;

#[cfg(feature = "client")]
pub use client::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, SaveOutcome,
    ScedgeClient,
};
pub use error::SdkError;
pub use export::{CSV_FILE_NAME, export_csv};
#[cfg(feature = "client")]
pub use poller::{DEFAULT_POLL_PERIOD, PollSnapshot, WaitlistPoller};

// Re-export shared types for convenience
pub use scedge_types::{ErrorCode, HealthResponse, WaitlistEntry};
