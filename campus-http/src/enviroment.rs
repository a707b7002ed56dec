// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::env;

pub fn build_address_http() -> String {
    env::var("CAMPUS_HTTP_ADDRESS").unwrap_or("0.0.0.0:3000".to_owned())
}

pub fn build_doc() -> bool {
    env::var("CAMPUS_HTTP_DOC").unwrap_or_default() == "true"
}
