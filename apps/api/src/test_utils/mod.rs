//! Test utilities for route and use case tests.
//!
//! This module provides:
//! - In-memory implementations of the waitlist, storage and AI ports
//! - `TestAppStateBuilder` for constructing an `AppState` around them

mod ai_mocks;
mod app_state_builder;
mod storage_mocks;
mod waitlist_mocks;

pub use ai_mocks::*;
pub use app_state_builder::*;
pub use storage_mocks::*;
pub use waitlist_mocks::*;
