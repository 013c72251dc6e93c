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

use crate::criteria::CriteriaBoard;
use coach_contracts::{CriterionKind, RuleStatus};
use std::collections::HashMap;

/// Ghost text only appears once the draft has some substance and there is
/// still a quality criterion left to coach toward.
pub fn eligible(text: &str, min_len: usize, congratulated: bool, board: &CriteriaBoard) -> bool {
    !congratulated
        && text.trim().chars().count() >= min_len
        && CriterionKind::QUALITY
            .iter()
            .any(|kind| board.status(*kind) != RuleStatus::Success)
}

/// Ghost text is dismissed by deletions and by alphanumeric insertions.
/// Whitespace or punctuation appended at the end keeps it alive, so a
/// trailing space before acceptance does not kill the suggestion.
pub fn should_dismiss(previous: &str, current: &str) -> bool {
    if current == previous {
        return false;
    }
    if current.chars().count() < previous.chars().count() {
        return true;
    }
    match current.strip_prefix(previous) {
        Some(inserted) => inserted.chars().any(char::is_alphanumeric),
        // Mid-text edits invalidate whatever the completion was continuing.
        None => true,
    }
}

/// A completion previously coached toward a phrase the user has now typed
/// targets that phrase's criterion.
pub fn find_phrase_target(
    text: &str,
    phrase_targets: &HashMap<String, CriterionKind>,
) -> Option<CriterionKind> {
    let lowered = text.to_lowercase();
    phrase_targets
        .iter()
        .find(|(phrase, _)| lowered.contains(phrase.as_str()))
        .map(|(_, kind)| *kind)
}

/// The failing quality criterion with the lowest last-seen score. Criteria
/// without a recorded score sort first; ties resolve to display order.
pub fn weakest_failing(
    board: &CriteriaBoard,
    last_scores: &HashMap<CriterionKind, f32>,
) -> Option<CriterionKind> {
    let mut weakest: Option<(CriterionKind, f32)> = None;
    for kind in board.failing_quality() {
        let score = last_scores.get(&kind).copied().unwrap_or(0.0);
        match weakest {
            Some((_, lowest)) if score >= lowest => {}
            _ => weakest = Some((kind, score)),
        }
    }
    weakest.map(|(kind, _)| kind)
}

/// Appends accepted ghost text, inserting one joining space only when
/// neither side already provides whitespace.
pub fn join_with_space(text: &str, ghost: &str) -> String {
    let needs_space = !text.is_empty()
        && !text.ends_with(char::is_whitespace)
        && !ghost.starts_with(char::is_whitespace);
    if needs_space {
        format!("{text} {ghost}")
    } else {
        format!("{text}{ghost}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletions_dismiss() {
        assert!(should_dismiss("thanks for", "thanks fo"));
        assert!(should_dismiss("thanks", ""));
    }

    #[test]
    fn alphanumeric_insertions_dismiss() {
        assert!(should_dismiss("thanks", "thanksg"));
        assert!(should_dismiss("thanks", "thanks a"));
    }

    #[test]
    fn trailing_whitespace_and_punctuation_survive() {
        assert!(!should_dismiss("thanks", "thanks "));
        assert!(!should_dismiss("thanks", "thanks!"));
        assert!(!should_dismiss("thanks", "thanks, "));
        assert!(!should_dismiss("thanks", "thanks"));
    }

    #[test]
    fn mid_text_edits_dismiss() {
        assert!(should_dismiss("thanks for", "thank's for"));
    }

    #[test]
    fn eligibility_needs_length_and_an_open_criterion() {
        let mut board = CriteriaBoard::new();
        assert!(eligible("thanks for the help", 10, false, &board));
        assert!(!eligible("thanks", 10, false, &board));
        assert!(!eligible("thanks for the help", 10, true, &board));

        for kind in CriterionKind::QUALITY {
            board.set(kind, RuleStatus::Success);
        }
        assert!(!eligible("thanks for the help", 10, false, &board));
    }

    #[test]
    fn phrase_match_wins_over_weakest() {
        let mut phrases = HashMap::new();
        phrases.insert("saved hours".to_string(), CriterionKind::HighlightImpact);
        assert_eq!(
            find_phrase_target("You Saved Hours of rework", &phrases),
            Some(CriterionKind::HighlightImpact)
        );
        assert_eq!(find_phrase_target("great job", &phrases), None);
    }

    #[test]
    fn weakest_failing_picks_lowest_score() {
        let board = CriteriaBoard::new();
        let mut scores = HashMap::new();
        scores.insert(CriterionKind::BeSpecific, 4.0);
        scores.insert(CriterionKind::HighlightImpact, 1.5);
        scores.insert(CriterionKind::AcknowledgeEffort, 6.0);
        scores.insert(CriterionKind::ReinforceConsistency, 3.0);
        assert_eq!(
            weakest_failing(&board, &scores),
            Some(CriterionKind::HighlightImpact)
        );
    }

    #[test]
    fn weakest_failing_ties_resolve_to_display_order() {
        let board = CriteriaBoard::new();
        let scores = HashMap::new();
        assert_eq!(
            weakest_failing(&board, &scores),
            Some(CriterionKind::BeSpecific)
        );
    }

    #[test]
    fn joining_space_only_when_needed() {
        assert_eq!(join_with_space("thanks", "for the push"), "thanks for the push");
        assert_eq!(join_with_space("thanks ", "for the push"), "thanks for the push");
        assert_eq!(join_with_space("thanks", " for the push"), "thanks for the push");
        assert_eq!(join_with_space("", "for the push"), "for the push");
    }
}
