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

use coach_contracts::CriterionKind;

/// Auto-rewrite fires when the passed count (AbusiveCheck included) reaches
/// the floor and has strictly increased since the last trigger.
pub fn should_auto_trigger(total_passed: u32, last_triggered: Option<u32>, floor: u32) -> bool {
    total_passed >= floor && last_triggered != Some(total_passed) && total_passed < 5
}

/// Length and not-already-perfect gates shared by the automatic and the
/// user-invoked rewrite paths.
pub fn rewrite_allowed(text: &str, min_len: usize, all_passed: bool) -> bool {
    !all_passed && text.trim().chars().count() >= min_len
}

/// The rewrite service targets its effort at the criteria still failing.
/// AbusiveCheck is never part of the request.
pub fn failing_labels(failing_quality: &[CriterionKind]) -> Vec<String> {
    failing_quality
        .iter()
        .map(|kind| kind.label().to_string())
        .collect()
}
