// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use campus_base::{Config as CampusConfig, Logging};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Settings from Campus Base.
    pub campus_config: CampusConfig,
    /// Logging parameters.
    pub logging: Logging,
}

