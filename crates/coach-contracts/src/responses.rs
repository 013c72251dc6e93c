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

use crate::types::{CriterionKind, GuidanceType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbuseCheckResponse {
    pub abusive: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CriterionVerdict {
    pub score: f32,
    pub pass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityBreakdown {
    #[serde(rename = "beSpecific")]
    pub be_specific: CriterionVerdict,
    #[serde(rename = "highlightImpact")]
    pub highlight_impact: CriterionVerdict,
    #[serde(rename = "acknowledgeEffort")]
    pub acknowledge_effort: CriterionVerdict,
    #[serde(rename = "reinforceConsistency")]
    pub reinforce_consistency: CriterionVerdict,
}

impl QualityBreakdown {
    pub fn verdict(&self, kind: CriterionKind) -> Option<CriterionVerdict> {
        match kind {
            CriterionKind::BeSpecific => Some(self.be_specific),
            CriterionKind::HighlightImpact => Some(self.highlight_impact),
            CriterionKind::AcknowledgeEffort => Some(self.acknowledge_effort),
            CriterionKind::ReinforceConsistency => Some(self.reinforce_consistency),
            CriterionKind::AbusiveCheck => None,
        }
    }

    /// Pass verdicts in the fixed display order of the quality criteria.
    pub fn pass_map(&self) -> [(CriterionKind, bool); 4] {
        [
            (CriterionKind::BeSpecific, self.be_specific.pass),
            (CriterionKind::HighlightImpact, self.highlight_impact.pass),
            (CriterionKind::AcknowledgeEffort, self.acknowledge_effort.pass),
            (
                CriterionKind::ReinforceConsistency,
                self.reinforce_consistency.pass,
            ),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityCheckResponse {
    pub success: bool,
    pub quality: QualityBreakdown,
    #[serde(rename = "overallScore")]
    pub overall_score: f32,
    #[serde(rename = "guidanceType", default)]
    pub guidance_type: GuidanceType,
    #[serde(default)]
    pub guidance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub success: bool,
    #[serde(default)]
    pub rewrite: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    pub wrong: String,
    pub fixed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    pub success: bool,
    #[serde(default)]
    pub completion: String,
    #[serde(default)]
    pub corrections: Vec<Correction>,
}
