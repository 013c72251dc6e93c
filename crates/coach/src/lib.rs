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

pub mod autocomplete;
pub mod criteria;
pub mod guidance;
pub mod normalize;
pub mod rewrite;
pub mod score;
pub mod service;
pub mod session;

pub use coach_contracts::{CoachConfig, CoachError, CoachResult, CriterionKind, RuleStatus, ServiceConfig};
pub use criteria::CriteriaBoard;
pub use guidance::{Guidance, BLOCKED_MESSAGE, PHRASE_MARKER};
pub use score::{ScoreAnimator, ScoreBand};
pub use service::{HttpLanguageService, LanguageService};
pub use session::{spawn_session, EditorHandle, EditorSnapshot, SessionEvent, SessionOptions};
