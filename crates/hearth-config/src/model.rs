// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Hearth.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Hearth configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HearthConfig {
    /// Conversational agent identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Life-story capture and prompting settings.
    #[serde(default)]
    pub lifestory: LifeStoryConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Name of the conversational agent whose replies are captured.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "warda".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("hearth").join("hearth.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("hearth.db"))
        .display()
        .to_string()
}

fn default_wal_mode() -> bool {
    true
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,

    /// Bearer token required on `/v1` routes. `None` rejects every `/v1` request.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
            bearer_token: None,
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    3190
}

/// Life-story capture, listing and prompt-generation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LifeStoryConfig {
    /// Result limit when a list request does not give one.
    #[serde(default = "default_list_limit")]
    pub default_list_limit: usize,

    /// Records included in the agent context block by default.
    #[serde(default = "default_context_max_entries")]
    pub context_max_entries: usize,

    /// Most recent records considered for follow-up prompts.
    #[serde(default = "default_follow_up_window")]
    pub follow_up_window: usize,

    /// Most recent records considered for tag statistics.
    #[serde(default = "default_stats_window")]
    pub stats_window: usize,

    /// Upper bound on a single repository call, in seconds.
    #[serde(default = "default_store_timeout_secs")]
    pub store_timeout_secs: u64,

    /// Offset from UTC (minutes) used for month and hour-of-day prompts.
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// How to address a resident who has no display name.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,

    /// Attribution marker written on every captured record.
    #[serde(default = "default_capture_agent")]
    pub capture_agent: String,

    /// Offer seasonal and time-of-day prompts before general ones.
    #[serde(default = "default_seasonal_prompts")]
    pub seasonal_prompts: bool,
}

impl Default for LifeStoryConfig {
    fn default() -> Self {
        Self {
            default_list_limit: default_list_limit(),
            context_max_entries: default_context_max_entries(),
            follow_up_window: default_follow_up_window(),
            stats_window: default_stats_window(),
            store_timeout_secs: default_store_timeout_secs(),
            utc_offset_minutes: 0,
            fallback_name: default_fallback_name(),
            capture_agent: default_capture_agent(),
            seasonal_prompts: default_seasonal_prompts(),
        }
    }
}

fn default_list_limit() -> usize {
    50
}

fn default_context_max_entries() -> usize {
    5
}

fn default_follow_up_window() -> usize {
    10
}

fn default_stats_window() -> usize {
    200
}

fn default_store_timeout_secs() -> u64 {
    5
}

fn default_fallback_name() -> String {
    "dear".to_string()
}

fn default_capture_agent() -> String {
    "warda_auto".to_string()
}

fn default_seasonal_prompts() -> bool {
    true
}
