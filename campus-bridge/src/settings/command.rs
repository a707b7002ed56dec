// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use clap::{ArgAction, Parser, command};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the file containing the settings you want to use (json, yaml or toml)
    #[arg(short, long, default_value_t = String::default())]
    pub file_path: String,

    /// Whether the environment variables prefixed with 'CAMPUS' are read as configuration (file_path compatible)
    #[arg(short, long, default_value_t = true, action = ArgAction::Set)]
    pub env_config: bool,
}
