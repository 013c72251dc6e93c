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

use coach_contracts::{CriterionKind, GuidanceType};
use rand::Rng;
use std::collections::HashMap;

/// Literal marker the quality service embeds ahead of its phrase list.
/// Matched case-sensitively on first occurrence.
pub const PHRASE_MARKER: &str = "Consider phrases such as:";

pub const BLOCKED_MESSAGE: &str =
    "Your message contains inappropriate language. Please revise it before continuing.";

pub const AFFIRMATIONS: [&str; 19] = [
    "Your message is perfect!",
    "Great job on your appreciation!",
    "Well written message!",
    "Your recognition is spot on!",
    "This appreciation is beautifully written.",
    "You’ve captured their impact perfectly.",
    "Excellent acknowledgment of effort!",
    "Your recognition feels sincere and meaningful.",
    "Strong appreciation — clear and impactful.",
    "You’ve highlighted their contribution brilliantly.",
    "This message truly celebrates their work.",
    "Fantastic job recognizing their achievement!",
    "Your words make a real difference.",
    "This is thoughtful and well articulated.",
    "You’re setting a great example of recognition.",
    "Impressive clarity and appreciation.",
    "This recognition feels authentic and powerful.",
    "Well done — this will truly motivate them!",
    "Excellent appreciation!",
];

/// What the session surfaces after a completed validation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Guidance {
    #[default]
    None,
    Blocked {
        message: String,
    },
    Coaching {
        kind: GuidanceType,
        text: String,
    },
    Suggesting {
        text: String,
    },
    Congratulated {
        message: String,
    },
}

impl Guidance {
    pub fn text(&self) -> &str {
        match self {
            Guidance::None => "",
            Guidance::Blocked { message } | Guidance::Congratulated { message } => message,
            Guidance::Coaching { text, .. } | Guidance::Suggesting { text } => text,
        }
    }
}

pub fn pick_affirmation(rng: &mut impl Rng) -> &'static str {
    AFFIRMATIONS[rng.gen_range(0..AFFIRMATIONS.len())]
}

/// Transition function over a completed cycle's merged verdicts. Pure apart
/// from the injected rng used for the affirmation pool.
pub fn select_guidance(
    abusive: bool,
    total_passed: u32,
    guidance_type: GuidanceType,
    guidance_text: &str,
    rng: &mut impl Rng,
) -> Guidance {
    if abusive {
        return Guidance::Blocked {
            message: BLOCKED_MESSAGE.to_string(),
        };
    }
    if total_passed == 5 || guidance_type == GuidanceType::None {
        return Guidance::Congratulated {
            message: pick_affirmation(rng).to_string(),
        };
    }
    if guidance_type == GuidanceType::Suggestion {
        return Guidance::Suggesting {
            text: guidance_text.to_string(),
        };
    }
    Guidance::Coaching {
        kind: guidance_type,
        text: guidance_text.to_string(),
    }
}

/// Splits guidance into its lead sentence and the comma-separated phrase
/// list that may follow the marker.
pub fn split_guidance(text: &str) -> (String, Vec<String>) {
    match text.find(PHRASE_MARKER) {
        None => (text.trim().to_string(), Vec::new()),
        Some(index) => {
            let lead = text[..index].trim().to_string();
            let phrases = text[index + PHRASE_MARKER.len()..]
                .split(',')
                .map(|phrase| phrase.trim().trim_end_matches('.').trim().to_string())
                .filter(|phrase| !phrase.is_empty())
                .collect();
            (lead, phrases)
        }
    }
}

/// Lead sentence of a guidance text, for hosting UIs.
pub fn lead_text(text: &str) -> String {
    split_guidance(text).0
}

/// Phrase list of a guidance text, for hosting UIs.
pub fn phrase_list(text: &str) -> Vec<String> {
    split_guidance(text).1
}

/// Associates each suggested phrase with the criterion the coaching was
/// aimed at, for later autocomplete targeting.
pub fn learn_phrases(
    guidance_text: &str,
    target: Option<CriterionKind>,
    map: &mut HashMap<String, CriterionKind>,
) {
    let Some(target) = target else { return };
    for phrase in split_guidance(guidance_text).1 {
        map.insert(phrase.to_lowercase(), target);
    }
}
