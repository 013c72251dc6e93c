// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the coaching engine. The rewrite floor and length gates are
/// policy knobs, not behavioural promises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    pub typing_delay_ms: u64,
    pub autocomplete_delay_ms: u64,
    pub min_validation_len: usize,
    pub min_autocomplete_len: usize,
    pub min_rewrite_len: usize,
    pub rewrite_pass_floor: u32,
    pub reveal_stagger_ms: u64,
    pub score_tick_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 1700,
            autocomplete_delay_ms: 500,
            min_validation_len: 2,
            min_autocomplete_len: 10,
            min_rewrite_len: 50,
            rewrite_pass_floor: 3,
            reveal_stagger_ms: 100,
            score_tick_ms: 25,
            request_timeout_secs: 10,
        }
    }
}

impl CoachConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();
        Self {
            typing_delay_ms: env_u64("COACH_TYPING_DELAY_MS", defaults.typing_delay_ms),
            autocomplete_delay_ms: env_u64(
                "COACH_AUTOCOMPLETE_DELAY_MS",
                defaults.autocomplete_delay_ms,
            ),
            min_validation_len: env_usize("COACH_MIN_VALIDATION_LEN", defaults.min_validation_len),
            min_autocomplete_len: env_usize(
                "COACH_MIN_AUTOCOMPLETE_LEN",
                defaults.min_autocomplete_len,
            ),
            min_rewrite_len: env_usize("COACH_MIN_REWRITE_LEN", defaults.min_rewrite_len),
            rewrite_pass_floor: env_u64("COACH_REWRITE_PASS_FLOOR", u64::from(defaults.rewrite_pass_floor))
                as u32,
            reveal_stagger_ms: env_u64("COACH_REVEAL_STAGGER_MS", defaults.reveal_stagger_ms),
            score_tick_ms: env_u64("COACH_SCORE_TICK_MS", defaults.score_tick_ms),
            request_timeout_secs: env_u64(
                "COACH_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn autocomplete_delay(&self) -> Duration {
        Duration::from_millis(self.autocomplete_delay_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn score_tick(&self) -> Duration {
        Duration::from_millis(self.score_tick_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Endpoints for the four external language services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub abuse_path: String,
    pub quality_path: String,
    pub rewrite_path: String,
    pub autocomplete_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            abuse_path: "/api/check-abusive-words".to_string(),
            quality_path: "/api/check-quality".to_string(),
            rewrite_path: "/api/rewrite-appreciation".to_string(),
            autocomplete_path: "/api/autocomplete".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();
        Self {
            base_url: std::env::var("COACH_SERVICE_BASE_URL").unwrap_or(defaults.base_url),
            ..defaults
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn abuse_url(&self) -> String {
        format!("{}{}", self.base_url, self.abuse_path)
    }

    pub fn quality_url(&self) -> String {
        format!("{}{}", self.base_url, self.quality_path)
    }

    pub fn rewrite_url(&self) -> String {
        format!("{}{}", self.base_url, self.rewrite_path)
    }

    pub fn autocomplete_url(&self) -> String {
        format!("{}{}", self.base_url, self.autocomplete_path)
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
