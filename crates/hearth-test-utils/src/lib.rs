// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Hearth integration tests.
//!
//! # Components
//!
//! - [`MockRepository`] - In-memory life-story repository with failure and delay injection
//! - [`MockDirectory`] - Fixed resident directory with optional lookup failures
//! - [`FixedClock`] - Manually advanced clock
//! - [`TestHarness`] - The full engine over a temp SQLite database

pub mod clock;
pub mod harness;
pub mod mock_directory;
pub mod mock_repository;

pub use clock::FixedClock;
pub use harness::TestHarness;
pub use mock_directory::MockDirectory;
pub use mock_repository::MockRepository;
