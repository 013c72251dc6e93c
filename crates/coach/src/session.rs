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

use crate::autocomplete;
use crate::criteria::CriteriaBoard;
use crate::guidance::{self, Guidance};
use crate::normalize::normalize;
use crate::rewrite;
use crate::score::{displayed_fraction, ScoreAnimator, ScoreBand};
use crate::service::LanguageService;
use coach_contracts::{
    AbuseCheckRequest, AutocompleteRequest, CoachConfig, CoachError, CoachResult, CriterionKind,
    GuidanceType, QualityCheckRequest, QualityCheckResponse, RewriteRequest, RuleStatus,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

/// State changes the hosting UI reacts to. The session never renders; it
/// only emits.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    CheckingChanged(bool),
    CriterionUpdated { kind: CriterionKind, status: RuleStatus },
    ScoreChanged(u32),
    GuidanceChanged(Guidance),
    SuggestionStaged(String),
    SuggestionCleared,
    GhostTextChanged(String),
    /// The engine replaced the draft itself (accepted ghost text or applied
    /// suggestion); the host should update its input and refocus.
    TextReplaced(String),
    Posted { colleague: String, text: String },
    WentBack,
    Closed,
}

#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    pub colleague: String,
    pub text: String,
    pub criteria: [(CriterionKind, RuleStatus); 5],
    pub score: u32,
    pub score_target: u32,
    pub band: ScoreBand,
    pub ring_fraction: f32,
    pub checking: bool,
    pub guidance: Guidance,
    pub suggestion: Option<String>,
    pub ghost_text: String,
    pub congratulated: bool,
    pub can_submit: bool,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub colleague_name: String,
    pub config: CoachConfig,
    pub affirmation_seed: Option<u64>,
}

impl SessionOptions {
    pub fn new(colleague_name: impl Into<String>) -> Self {
        Self {
            colleague_name: colleague_name.into(),
            config: CoachConfig::default(),
            affirmation_seed: None,
        }
    }
}

enum MergedOutcome {
    Failed,
    Delivered {
        abusive: bool,
        quality: Option<QualityCheckResponse>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleKind {
    Validation,
    Revalidation,
}

struct RevealState {
    cycle: u64,
    plan: Vec<(CriterionKind, RuleStatus)>,
    guidance_type: GuidanceType,
    guidance_text: String,
    scores: Vec<(CriterionKind, f32)>,
    kind: CycleKind,
}

enum Msg {
    Text(String),
    AcceptGhost,
    RequestRewrite,
    UseSuggestion,
    Submit,
    GoBack,
    Close,
    Snapshot(oneshot::Sender<EditorSnapshot>),
    DebounceFired { seq: u64, text: String },
    ValidationArrived { seq: u64, merged: MergedOutcome },
    RevalidationArrived { seq: u64, quality: Option<QualityCheckResponse> },
    RevealStep { cycle: u64, index: usize },
    ScoreTick,
    GhostDebounceFired { seq: u64, text: String },
    GhostArrived { seq: u64, completion: Option<String> },
    RewriteArrived { rewrite: Option<String> },
}

/// Control surface for one editor session. Cheap to clone; all calls are
/// serialized onto the session's actor task.
#[derive(Clone)]
pub struct EditorHandle {
    tx: mpsc::UnboundedSender<Msg>,
}

impl EditorHandle {
    pub fn text_changed(&self, text: impl Into<String>) {
        let _ = self.tx.send(Msg::Text(text.into()));
    }

    pub fn accept_ghost(&self) {
        let _ = self.tx.send(Msg::AcceptGhost);
    }

    pub fn request_rewrite(&self) {
        let _ = self.tx.send(Msg::RequestRewrite);
    }

    pub fn use_suggestion(&self) {
        let _ = self.tx.send(Msg::UseSuggestion);
    }

    pub fn submit(&self) {
        let _ = self.tx.send(Msg::Submit);
    }

    pub fn go_back(&self) {
        let _ = self.tx.send(Msg::GoBack);
    }

    pub fn close(&self) {
        let _ = self.tx.send(Msg::Close);
    }

    pub async fn snapshot(&self) -> CoachResult<EditorSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Msg::Snapshot(reply_tx))
            .map_err(|_| CoachError::SessionClosed)?;
        reply_rx.await.map_err(|_| CoachError::SessionClosed)
    }
}

/// Spawns the session actor for a chosen colleague and returns its handle
/// plus the event stream.
pub fn spawn_session(
    service: Arc<dyn LanguageService>,
    options: SessionOptions,
) -> (EditorHandle, mpsc::UnboundedReceiver<SessionEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let session = EditorSession::new(service, options, tx.clone(), events_tx);
    tokio::spawn(session.run(rx));
    (EditorHandle { tx }, events_rx)
}

struct EditorSession {
    colleague: String,
    config: CoachConfig,
    service: Arc<dyn LanguageService>,
    tx: mpsc::UnboundedSender<Msg>,
    events: mpsc::UnboundedSender<SessionEvent>,
    rng: StdRng,

    text: String,
    board: CriteriaBoard,
    score: ScoreAnimator,
    guidance: Guidance,
    congratulated: bool,
    checking: bool,
    suggestion: Option<String>,
    ghost_text: String,
    phrase_targets: HashMap<String, CriterionKind>,
    last_scores: HashMap<CriterionKind, f32>,

    validation_seq: u64,
    issued_seq: u64,
    issued_key: String,
    last_rewrite_passed: Option<u32>,
    reveal: Option<RevealState>,
    ghost_seq: u64,

    debounce_task: Option<JoinHandle<()>>,
    validation_task: Option<JoinHandle<()>>,
    reveal_task: Option<JoinHandle<()>>,
    ticker_task: Option<JoinHandle<()>>,
    ghost_debounce_task: Option<JoinHandle<()>>,
    ghost_request_task: Option<JoinHandle<()>>,
    rewrite_task: Option<JoinHandle<()>>,
}

impl EditorSession {
    fn new(
        service: Arc<dyn LanguageService>,
        options: SessionOptions,
        tx: mpsc::UnboundedSender<Msg>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        let rng = match options.affirmation_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            colleague: options.colleague_name,
            config: options.config,
            service,
            tx,
            events,
            rng,
            text: String::new(),
            board: CriteriaBoard::new(),
            score: ScoreAnimator::new(),
            guidance: Guidance::None,
            congratulated: false,
            checking: false,
            suggestion: None,
            ghost_text: String::new(),
            phrase_targets: HashMap::new(),
            last_scores: HashMap::new(),
            validation_seq: 0,
            issued_seq: 0,
            issued_key: String::new(),
            last_rewrite_passed: None,
            reveal: None,
            ghost_seq: 0,
            debounce_task: None,
            validation_task: None,
            reveal_task: None,
            ticker_task: None,
            ghost_debounce_task: None,
            ghost_request_task: None,
            rewrite_task: None,
        }
    }

    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Msg>) {
        while let Some(msg) = rx.recv().await {
            if matches!(msg, Msg::Close) {
                self.reset_editor();
                self.emit(SessionEvent::Closed);
                break;
            }
            self.handle(msg);
        }
        self.abort_tasks();
    }

    fn handle(&mut self, msg: Msg) {
        match msg {
            Msg::Text(text) => self.on_text(text),
            Msg::AcceptGhost => self.on_accept_ghost(),
            Msg::RequestRewrite => self.start_rewrite(),
            Msg::UseSuggestion => self.on_use_suggestion(),
            Msg::Submit => self.on_submit(),
            Msg::GoBack => {
                self.reset_editor();
                self.emit(SessionEvent::WentBack);
            }
            Msg::Close => {}
            Msg::Snapshot(reply) => {
                let _ = reply.send(self.snapshot());
            }
            Msg::DebounceFired { seq, text } => self.on_debounce_fired(seq, text),
            Msg::ValidationArrived { seq, merged } => self.on_validation_arrived(seq, merged),
            Msg::RevalidationArrived { seq, quality } => {
                self.on_revalidation_arrived(seq, quality);
            }
            Msg::RevealStep { cycle, index } => self.on_reveal_step(cycle, index),
            Msg::ScoreTick => self.on_score_tick(),
            Msg::GhostDebounceFired { seq, text } => self.on_ghost_debounce_fired(seq, text),
            Msg::GhostArrived { seq, completion } => self.on_ghost_arrived(seq, completion),
            Msg::RewriteArrived { rewrite } => self.on_rewrite_arrived(rewrite),
        }
    }

    fn on_text(&mut self, new_text: String) {
        if !self.ghost_text.is_empty() && autocomplete::should_dismiss(&self.text, &new_text) {
            self.set_ghost(String::new());
        }
        self.text = new_text;
        self.validation_seq += 1;
        self.ghost_seq += 1;
        abort(&mut self.debounce_task);
        abort(&mut self.ghost_debounce_task);
        abort(&mut self.ghost_request_task);

        let trimmed_len = self.text.trim().chars().count();
        if trimmed_len == 0 {
            debug!("Text cleared, resetting session state");
            self.reset_editor();
            return;
        }

        if trimmed_len >= self.config.min_validation_len {
            let seq = self.validation_seq;
            let text = self.text.clone();
            let delay = self.config.typing_delay();
            let tx = self.tx.clone();
            self.debounce_task = Some(tokio::spawn(async move {
                sleep(delay).await;
                let _ = tx.send(Msg::DebounceFired { seq, text });
            }));
        }

        if trimmed_len >= self.config.min_autocomplete_len {
            let seq = self.ghost_seq;
            let text = self.text.clone();
            let delay = self.config.autocomplete_delay();
            let tx = self.tx.clone();
            self.ghost_debounce_task = Some(tokio::spawn(async move {
                sleep(delay).await;
                let _ = tx.send(Msg::GhostDebounceFired { seq, text });
            }));
        }
    }

    fn on_debounce_fired(&mut self, seq: u64, text: String) {
        if seq != self.validation_seq {
            return;
        }
        let key = normalize(&text);
        if key == self.issued_key {
            debug!("Normalized key unchanged, suppressing validation");
            return;
        }
        self.issued_key = key;
        self.issued_seq = seq;
        self.set_checking(true);

        abort(&mut self.validation_task);
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let request_timeout = self.config.request_timeout();
        self.validation_task = Some(tokio::spawn(async move {
            let abuse = timeout(
                request_timeout,
                service.check_abuse(AbuseCheckRequest { text: text.clone() }),
            );
            let quality = timeout(
                request_timeout,
                service.check_quality(QualityCheckRequest { text: text.clone() }),
            );
            let (abuse, quality) = tokio::join!(abuse, quality);
            let merged = match (settle(abuse), settle(quality)) {
                (Some(abuse), Some(quality)) => MergedOutcome::Delivered {
                    abusive: abuse.abusive,
                    quality: Some(quality).filter(|q| q.success),
                },
                _ => MergedOutcome::Failed,
            };
            let _ = tx.send(Msg::ValidationArrived { seq, merged });
        }));
    }

    fn on_validation_arrived(&mut self, seq: u64, merged: MergedOutcome) {
        if seq != self.issued_seq {
            debug!(seq = seq, "Discarding stale validation pair");
            return;
        }
        self.set_checking(false);
        let MergedOutcome::Delivered { abusive, quality } = merged else {
            return;
        };
        if self.congratulated && self.board.all_passed() {
            debug!("Session already perfect, discarding late validation");
            return;
        }
        if abusive {
            self.on_abusive();
            return;
        }
        for (kind, status) in self.board.apply_abuse_verdict(false) {
            self.emit(SessionEvent::CriterionUpdated { kind, status });
        }
        let Some(quality) = quality else { return };
        self.start_reveal(seq, &quality, CycleKind::Validation);
    }

    fn on_abusive(&mut self) {
        for (kind, status) in self.board.apply_abuse_verdict(true) {
            self.emit(SessionEvent::CriterionUpdated { kind, status });
        }
        abort(&mut self.reveal_task);
        self.reveal = None;
        self.animate_to(0);
        self.clear_suggestion();
        self.last_rewrite_passed = None;
        self.congratulated = false;
        self.set_guidance(Guidance::Blocked {
            message: guidance::BLOCKED_MESSAGE.to_string(),
        });
    }

    fn start_reveal(&mut self, cycle: u64, quality: &QualityCheckResponse, kind: CycleKind) {
        abort(&mut self.reveal_task);
        let plan = CriteriaBoard::staggered_updates(&quality.quality.pass_map());
        let scores = CriterionKind::QUALITY
            .iter()
            .filter_map(|k| quality.quality.verdict(*k).map(|v| (*k, v.score)))
            .collect();
        let steps = plan.len();
        self.reveal = Some(RevealState {
            cycle,
            plan,
            guidance_type: quality.guidance_type,
            guidance_text: quality.guidance.clone(),
            scores,
            kind,
        });

        let stagger = self.config.reveal_stagger();
        let tx = self.tx.clone();
        self.reveal_task = Some(tokio::spawn(async move {
            for index in 0..steps {
                if index > 0 {
                    sleep(stagger).await;
                }
                if tx.send(Msg::RevealStep { cycle, index }).is_err() {
                    return;
                }
            }
        }));
    }

    fn on_reveal_step(&mut self, cycle: u64, index: usize) {
        let (kind, status, is_last) = match self.reveal.as_ref() {
            Some(state) if state.cycle == cycle => match state.plan.get(index) {
                Some(&(kind, status)) => (kind, status, index + 1 == state.plan.len()),
                None => return,
            },
            _ => return,
        };
        self.board.set(kind, status);
        self.emit(SessionEvent::CriterionUpdated { kind, status });
        if is_last {
            if let Some(state) = self.reveal.take() {
                self.finish_cycle(state);
            }
        }
    }

    fn finish_cycle(&mut self, state: RevealState) {
        self.last_scores = state.scores.iter().copied().collect();
        self.animate_to(self.board.weighted_score());
        let total_passed = self.board.count_passed(true);

        if state.kind == CycleKind::Validation {
            if total_passed < self.config.rewrite_pass_floor {
                self.clear_suggestion();
                self.last_rewrite_passed = None;
            }
            if rewrite::should_auto_trigger(
                total_passed,
                self.last_rewrite_passed,
                self.config.rewrite_pass_floor,
            ) {
                self.last_rewrite_passed = Some(total_passed);
                self.start_rewrite();
            }
        }

        let selected = guidance::select_guidance(
            false,
            total_passed,
            state.guidance_type,
            &state.guidance_text,
            &mut self.rng,
        );
        match &selected {
            Guidance::Congratulated { .. } => {
                self.congratulated = true;
                self.clear_suggestion();
            }
            Guidance::Suggesting { text } => {
                self.congratulated = false;
                self.stage_suggestion(text.clone());
            }
            Guidance::Coaching { text, .. } => {
                self.congratulated = false;
                let weakest = autocomplete::weakest_failing(&self.board, &self.last_scores);
                guidance::learn_phrases(text, weakest, &mut self.phrase_targets);
            }
            _ => {}
        }
        self.set_guidance(selected);
    }

    fn on_revalidation_arrived(&mut self, seq: u64, quality: Option<QualityCheckResponse>) {
        if seq != self.issued_seq {
            return;
        }
        self.set_checking(false);
        let Some(quality) = quality else { return };
        self.start_reveal(seq, &quality, CycleKind::Revalidation);
    }

    fn on_use_suggestion(&mut self) {
        let Some(text) = self.suggestion.take() else {
            return;
        };
        self.emit(SessionEvent::SuggestionCleared);
        self.text = text.clone();
        self.set_ghost(String::new());
        self.validation_seq += 1;
        self.ghost_seq += 1;
        abort(&mut self.debounce_task);
        abort(&mut self.ghost_debounce_task);
        abort(&mut self.ghost_request_task);
        abort(&mut self.validation_task);

        self.issued_seq = self.validation_seq;
        self.issued_key = normalize(&self.text);
        self.emit(SessionEvent::TextReplaced(text.clone()));
        self.set_checking(true);

        let seq = self.issued_seq;
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let request_timeout = self.config.request_timeout();
        self.validation_task = Some(tokio::spawn(async move {
            let outcome = timeout(
                request_timeout,
                service.check_quality(QualityCheckRequest { text }),
            )
            .await;
            let quality = settle(outcome).filter(|q| q.success);
            let _ = tx.send(Msg::RevalidationArrived { seq, quality });
        }));
    }

    fn start_rewrite(&mut self) {
        if !rewrite::rewrite_allowed(
            &self.text,
            self.config.min_rewrite_len,
            self.board.all_passed(),
        ) {
            return;
        }
        self.set_checking(true);
        let request = RewriteRequest {
            text: self.text.clone(),
            failing_criteria: rewrite::failing_labels(&self.board.failing_quality()),
        };
        abort(&mut self.rewrite_task);
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let request_timeout = self.config.request_timeout();
        self.rewrite_task = Some(tokio::spawn(async move {
            let outcome = timeout(request_timeout, service.rewrite(request)).await;
            let rewrite = settle(outcome)
                .filter(|r| r.success)
                .map(|r| r.rewrite)
                .filter(|r| !r.is_empty());
            let _ = tx.send(Msg::RewriteArrived { rewrite });
        }));
    }

    fn on_rewrite_arrived(&mut self, rewrite: Option<String>) {
        self.set_checking(false);
        if self.congratulated {
            debug!("Suggestion suppressed after congratulation");
            return;
        }
        if let Some(text) = rewrite {
            self.stage_suggestion(text);
        }
    }

    fn on_ghost_debounce_fired(&mut self, seq: u64, text: String) {
        if seq != self.ghost_seq {
            return;
        }
        if !autocomplete::eligible(
            &text,
            self.config.min_autocomplete_len,
            self.congratulated,
            &self.board,
        ) {
            return;
        }
        let target = autocomplete::find_phrase_target(&text, &self.phrase_targets);
        let request = AutocompleteRequest {
            text,
            failing_criteria: rewrite::failing_labels(&self.board.failing_quality()),
            target_criterion: target.map(|kind| kind.label().to_string()),
        };
        abort(&mut self.ghost_request_task);
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let request_timeout = self.config.request_timeout();
        self.ghost_request_task = Some(tokio::spawn(async move {
            let outcome = timeout(request_timeout, service.autocomplete(request)).await;
            let completion = settle(outcome)
                .filter(|r| r.success)
                .map(|r| r.completion)
                .filter(|c| !c.is_empty());
            let _ = tx.send(Msg::GhostArrived { seq, completion });
        }));
    }

    fn on_ghost_arrived(&mut self, seq: u64, completion: Option<String>) {
        if seq != self.ghost_seq {
            return;
        }
        if let Some(completion) = completion {
            self.set_ghost(completion);
        }
    }

    fn on_accept_ghost(&mut self) {
        if self.ghost_text.is_empty() {
            return;
        }
        let ghost = self.ghost_text.clone();
        self.set_ghost(String::new());
        let joined = autocomplete::join_with_space(&self.text, &ghost);
        self.emit(SessionEvent::TextReplaced(joined.clone()));
        self.on_text(joined);
    }

    fn on_submit(&mut self) {
        if !self.board.can_submit(&self.text) {
            debug!("Submission blocked by gate");
            return;
        }
        self.emit(SessionEvent::Posted {
            colleague: self.colleague.clone(),
            text: self.text.trim().to_string(),
        });
        self.reset_editor();
    }

    fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            colleague: self.colleague.clone(),
            text: self.text.clone(),
            criteria: self.board.snapshot(),
            score: self.score.displayed(),
            score_target: self.score.target(),
            band: ScoreBand::of(self.score.displayed()),
            ring_fraction: displayed_fraction(self.score.displayed()),
            checking: self.checking,
            guidance: self.guidance.clone(),
            suggestion: self.suggestion.clone(),
            ghost_text: self.ghost_text.clone(),
            congratulated: self.congratulated,
            can_submit: self.board.can_submit(&self.text),
        }
    }

    fn animate_to(&mut self, target: u32) {
        self.score.retarget(target);
        if self.score.is_settled() {
            abort(&mut self.ticker_task);
            return;
        }
        if self.ticker_task.is_none() {
            let tick = self.config.score_tick();
            let tx = self.tx.clone();
            self.ticker_task = Some(tokio::spawn(async move {
                loop {
                    sleep(tick).await;
                    if tx.send(Msg::ScoreTick).is_err() {
                        return;
                    }
                }
            }));
        }
    }

    fn on_score_tick(&mut self) {
        match self.score.step() {
            Some(value) => self.emit(SessionEvent::ScoreChanged(value)),
            None => abort(&mut self.ticker_task),
        }
    }

    fn set_checking(&mut self, checking: bool) {
        if self.checking != checking {
            self.checking = checking;
            self.emit(SessionEvent::CheckingChanged(checking));
        }
    }

    fn set_guidance(&mut self, guidance: Guidance) {
        if self.guidance != guidance {
            self.guidance = guidance.clone();
            self.emit(SessionEvent::GuidanceChanged(guidance));
        }
    }

    fn set_ghost(&mut self, ghost: String) {
        if self.ghost_text != ghost {
            self.ghost_text = ghost.clone();
            self.emit(SessionEvent::GhostTextChanged(ghost));
        }
    }

    fn stage_suggestion(&mut self, text: String) {
        self.suggestion = Some(text.clone());
        self.emit(SessionEvent::SuggestionStaged(text));
    }

    fn clear_suggestion(&mut self) {
        if self.suggestion.take().is_some() {
            self.emit(SessionEvent::SuggestionCleared);
        }
    }

    fn reset_editor(&mut self) {
        self.abort_tasks();
        self.validation_seq += 1;
        self.ghost_seq += 1;
        self.issued_seq = 0;
        self.issued_key.clear();
        self.text.clear();
        self.reveal = None;
        self.last_rewrite_passed = None;
        self.phrase_targets.clear();
        self.last_scores.clear();
        self.congratulated = false;

        self.board.reset();
        for (kind, status) in self.board.snapshot() {
            self.emit(SessionEvent::CriterionUpdated { kind, status });
        }
        if self.score.displayed() != 0 {
            self.emit(SessionEvent::ScoreChanged(0));
        }
        self.score.reset();
        self.set_checking(false);
        self.set_guidance(Guidance::None);
        self.clear_suggestion();
        self.set_ghost(String::new());
    }

    fn abort_tasks(&mut self) {
        abort(&mut self.debounce_task);
        abort(&mut self.validation_task);
        abort(&mut self.reveal_task);
        abort(&mut self.ticker_task);
        abort(&mut self.ghost_debounce_task);
        abort(&mut self.ghost_request_task);
        abort(&mut self.rewrite_task);
    }

    fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }
}

fn abort(slot: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = slot.take() {
        handle.abort();
    }
}

fn settle<T>(outcome: Result<CoachResult<T>, tokio::time::error::Elapsed>) -> Option<T> {
    match outcome {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            warn!(error = %e, "Language service call failed");
            None
        }
        Err(_) => {
            warn!("Language service call timed out");
            None
        }
    }
}
