// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::multisig::AuthorizationEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AuthorizationEngine>,
}

impl AppState {
    pub fn new(engine: AuthorizationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AuthorizationEngine::in_memory())
    }
}
