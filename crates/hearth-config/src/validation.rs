// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde attributes cannot express. All errors are
//! collected; validation does not stop at the first failure.

use crate::diagnostic::ConfigError;
use crate::model::HearthConfig;

/// Largest UTC offset in use anywhere (UTC+14, Line Islands).
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &HearthConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::validation("gateway.host must not be empty"));
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::validation(format!(
                "gateway.host `{host}` is not a valid IP address or hostname"
            )));
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::validation(
            "storage.database_path must not be empty",
        ));
    }

    let lifestory = &config.lifestory;
    for (key, value) in [
        ("default_list_limit", lifestory.default_list_limit),
        ("context_max_entries", lifestory.context_max_entries),
        ("follow_up_window", lifestory.follow_up_window),
        ("stats_window", lifestory.stats_window),
    ] {
        if value == 0 {
            errors.push(ConfigError::validation(format!(
                "lifestory.{key} must be at least 1"
            )));
        }
    }

    if lifestory.store_timeout_secs == 0 {
        errors.push(ConfigError::validation(
            "lifestory.store_timeout_secs must be at least 1",
        ));
    }

    let offset_range = -MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES;
    if !offset_range.contains(&lifestory.utc_offset_minutes) {
        errors.push(ConfigError::validation(format!(
            "lifestory.utc_offset_minutes must be within +/-{MAX_UTC_OFFSET_MINUTES}, got {}",
            lifestory.utc_offset_minutes
        )));
    }

    if lifestory.fallback_name.trim().is_empty() {
        errors.push(ConfigError::validation(
            "lifestory.fallback_name must not be empty",
        ));
    }

    if lifestory.capture_agent.trim().is_empty() {
        errors.push(ConfigError::validation(
            "lifestory.capture_agent must not be empty",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
