// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for Hearth.
//!
//! Exposes story capture, listing, context blocks, tag summaries and
//! reminiscence prompts per resident over REST. `/v1` routes require a
//! bearer token.

pub mod auth;
pub mod handlers;
pub mod server;

pub use auth::AuthConfig;
pub use server::{router, start_server, GatewayState};
