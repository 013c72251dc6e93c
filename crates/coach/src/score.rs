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

use serde::{Deserialize, Serialize};

/// Presentation band derived from the displayed score. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        if score < 40 {
            ScoreBand::Low
        } else if score < 70 {
            ScoreBand::Medium
        } else {
            ScoreBand::High
        }
    }
}

/// Fill fraction for a ring/progress indicator. Pure projection of the score.
pub fn displayed_fraction(score: u32) -> f32 {
    score.min(100) as f32 / 100.0
}

/// Moves the displayed score toward its target by one point per tick. A new
/// target arriving mid-animation redirects the walk without resetting it.
#[derive(Debug, Clone, Default)]
pub struct ScoreAnimator {
    displayed: u32,
    target: u32,
}

impl ScoreAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn retarget(&mut self, target: u32) {
        self.target = target.min(100);
    }

    pub fn is_settled(&self) -> bool {
        self.displayed == self.target
    }

    /// One animation tick. Returns the new displayed value, or `None` once
    /// settled.
    pub fn step(&mut self) -> Option<u32> {
        if self.displayed < self.target {
            self.displayed += 1;
        } else if self.displayed > self.target {
            self.displayed -= 1;
        } else {
            return None;
        }
        Some(self.displayed)
    }

    pub fn reset(&mut self) {
        self.displayed = 0;
        self.target = 0;
    }
}
