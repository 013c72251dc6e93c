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

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "coach-demo")]
#[command(about = "Interactive appreciation writing coach against live language services")]
pub struct Args {
    /// Colleague the appreciation is addressed to
    #[arg(long, default_value = "Maya")]
    pub colleague: String,

    /// Base URL of the language services
    #[arg(long, default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Seed for the affirmation pool (omit for entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}
