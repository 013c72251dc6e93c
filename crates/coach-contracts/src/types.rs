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
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionKind {
    AbusiveCheck,
    BeSpecific,
    HighlightImpact,
    AcknowledgeEffort,
    ReinforceConsistency,
}

impl CriterionKind {
    pub const ALL: [CriterionKind; 5] = [
        CriterionKind::AbusiveCheck,
        CriterionKind::BeSpecific,
        CriterionKind::HighlightImpact,
        CriterionKind::AcknowledgeEffort,
        CriterionKind::ReinforceConsistency,
    ];

    /// Quality criteria in their fixed display order.
    pub const QUALITY: [CriterionKind; 4] = [
        CriterionKind::BeSpecific,
        CriterionKind::HighlightImpact,
        CriterionKind::AcknowledgeEffort,
        CriterionKind::ReinforceConsistency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CriterionKind::AbusiveCheck => "Abusive Check",
            CriterionKind::BeSpecific => "Be specific",
            CriterionKind::HighlightImpact => "Highlight impact",
            CriterionKind::AcknowledgeEffort => "Acknowledge effort",
            CriterionKind::ReinforceConsistency => "Reinforce consistency",
        }
    }

    /// Weights sum to 100 across all five criteria.
    pub fn weight(&self) -> u32 {
        match self {
            CriterionKind::AbusiveCheck => 3,
            CriterionKind::BeSpecific => 35,
            CriterionKind::HighlightImpact => 37,
            CriterionKind::AcknowledgeEffort => 15,
            CriterionKind::ReinforceConsistency => 10,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.label() == label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    #[default]
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidanceType {
    Question,
    Suggestion,
    #[default]
    None,
}

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialisation error: {0}")]
    Serialisation(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Timeout error")]
    Timeout,

    #[error("Session closed")]
    SessionClosed,
}

pub type CoachResult<T> = Result<T, CoachError>;
