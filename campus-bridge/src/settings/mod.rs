// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::env;

use campus_base::Error;
use config::Config;
use params::Params;

pub mod command;
use crate::config::Config as BridgeConfig;
mod params;

/// Builds the settings from the environment (when `env` is set) and from
/// `file` (json, yaml or toml, skipped when empty). Values in the file win.
pub fn build_config(env: bool, file: &str) -> Result<BridgeConfig, Error> {
    // Env configuration
    let mut params_env = Params::default();
    if env {
        params_env = Params::from_env()?;
    }

    // file configuration (json, yaml or toml)
    let mut params_file = Params::default();
    if !file.is_empty() {
        let mut config = Config::builder();

        config = config.add_source(config::File::with_name(file));

        let config = config.build().map_err(|e| {
            Error::Bridge(format!("Error building config: {}", e))
        })?;

        params_file = config.try_deserialize().map_err(|e| {
            Error::Bridge(format!("Error try deserialize config: {}", e))
        })?;
    }

    // Mix configurations.
    Ok(BridgeConfig::from(params_env.mix_config(params_file)))
}

pub fn build_file_path() -> String {
    env::var("CAMPUS_FILE_PATH").unwrap_or_default()
}
