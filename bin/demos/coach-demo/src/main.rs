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

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use coach::{spawn_session, HttpLanguageService, SessionEvent, SessionOptions};
use coach_contracts::{CoachConfig, ServiceConfig};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = CoachConfig::from_env();
    let service = HttpLanguageService::new(
        ServiceConfig::with_base_url(&args.base_url),
        config.request_timeout(),
    )?;

    let options = SessionOptions {
        colleague_name: args.colleague.clone(),
        config,
        affirmation_seed: args.seed,
    };
    let (handle, mut events) = spawn_session(Arc::new(service), options);
    info!(colleague = %args.colleague, "Session started");

    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            render(&event);
            if event == SessionEvent::Closed {
                break;
            }
        }
    });

    println!("Type your appreciation. Commands: /tab /rewrite /use /submit /back /quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => {
                handle.close();
                break;
            }
            "/tab" => handle.accept_ghost(),
            "/rewrite" => handle.request_rewrite(),
            "/use" => handle.use_suggestion(),
            "/submit" => handle.submit(),
            "/back" => handle.go_back(),
            _ => handle.text_changed(line.as_str()),
        }
    }

    printer.await?;
    Ok(())
}

fn render(event: &SessionEvent) {
    match event {
        SessionEvent::CheckingChanged(checking) => {
            println!("[checking: {checking}]");
        }
        SessionEvent::CriterionUpdated { kind, status } => {
            println!("[{}] -> {:?}", kind.label(), status);
        }
        SessionEvent::ScoreChanged(score) => println!("[score: {score}]"),
        SessionEvent::GuidanceChanged(guidance) => println!("[guidance] {}", guidance.text()),
        SessionEvent::SuggestionStaged(text) => println!("[suggestion] {text}"),
        SessionEvent::SuggestionCleared => println!("[suggestion cleared]"),
        SessionEvent::GhostTextChanged(ghost) => {
            if ghost.is_empty() {
                println!("[ghost cleared]");
            } else {
                println!("[ghost] ...{ghost}");
            }
        }
        SessionEvent::TextReplaced(text) => println!("[draft] {text}"),
        SessionEvent::Posted { colleague, text } => {
            println!("[posted to {colleague}] {text}");
        }
        SessionEvent::WentBack => println!("[back to colleague selection]"),
        SessionEvent::Closed => println!("[closed]"),
    }
}
