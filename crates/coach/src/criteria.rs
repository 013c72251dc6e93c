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

use coach_contracts::{CriterionKind, RuleStatus};

/// The five rule statuses of one editor session. Mutated only through this
/// API; the session actor owns the single instance.
#[derive(Debug, Clone, Default)]
pub struct CriteriaBoard {
    statuses: [RuleStatus; 5],
}

impl CriteriaBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(kind: CriterionKind) -> usize {
        CriterionKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(0)
    }

    pub fn status(&self, kind: CriterionKind) -> RuleStatus {
        self.statuses[Self::index(kind)]
    }

    pub fn set(&mut self, kind: CriterionKind, status: RuleStatus) {
        self.statuses[Self::index(kind)] = status;
    }

    pub fn reset(&mut self) {
        self.statuses = [RuleStatus::Neutral; 5];
    }

    /// An abusive verdict voids the quality signals for the cycle.
    /// Returns the statuses that changed, in display order.
    pub fn apply_abuse_verdict(&mut self, abusive: bool) -> Vec<(CriterionKind, RuleStatus)> {
        let mut changed = Vec::new();
        let verdict = if abusive {
            RuleStatus::Error
        } else {
            RuleStatus::Success
        };
        if self.status(CriterionKind::AbusiveCheck) != verdict {
            self.set(CriterionKind::AbusiveCheck, verdict);
            changed.push((CriterionKind::AbusiveCheck, verdict));
        }
        if abusive {
            for kind in CriterionKind::QUALITY {
                if self.status(kind) != RuleStatus::Neutral {
                    self.set(kind, RuleStatus::Neutral);
                    changed.push((kind, RuleStatus::Neutral));
                }
            }
        }
        changed
    }

    /// Builds the staggered reveal plan for a quality verdict: one
    /// `(criterion, status)` pair per quality criterion, in the fixed
    /// display order. The scheduler applies them ~100 ms apart.
    pub fn staggered_updates(pass_map: &[(CriterionKind, bool)]) -> Vec<(CriterionKind, RuleStatus)> {
        CriterionKind::QUALITY
            .iter()
            .filter_map(|kind| {
                pass_map.iter().find(|(k, _)| k == kind).map(|(_, pass)| {
                    let status = if *pass {
                        RuleStatus::Success
                    } else {
                        RuleStatus::Error
                    };
                    (*kind, status)
                })
            })
            .collect()
    }

    pub fn count_passed(&self, include_abuse: bool) -> u32 {
        CriterionKind::ALL
            .iter()
            .filter(|kind| include_abuse || **kind != CriterionKind::AbusiveCheck)
            .filter(|kind| self.status(**kind) == RuleStatus::Success)
            .count() as u32
    }

    pub fn all_passed(&self) -> bool {
        self.count_passed(true) == 5
    }

    pub fn failing_quality(&self) -> Vec<CriterionKind> {
        CriterionKind::QUALITY
            .iter()
            .copied()
            .filter(|kind| self.status(*kind) != RuleStatus::Success)
            .collect()
    }

    pub fn weighted_score(&self) -> u32 {
        CriterionKind::ALL
            .iter()
            .filter(|kind| self.status(**kind) == RuleStatus::Success)
            .map(|kind| kind.weight())
            .sum()
    }

    /// AbusiveCheck is the sole hard submission gate; quality criteria stay
    /// advisory.
    pub fn can_submit(&self, text: &str) -> bool {
        self.status(CriterionKind::AbusiveCheck) == RuleStatus::Success && !text.trim().is_empty()
    }

    pub fn snapshot(&self) -> [(CriterionKind, RuleStatus); 5] {
        let mut out = [(CriterionKind::AbusiveCheck, RuleStatus::Neutral); 5];
        for (slot, kind) in out.iter_mut().zip(CriterionKind::ALL) {
            *slot = (kind, self.status(kind));
        }
        out
    }
}
