// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Multisig Wallet Server - Shared-Custody Authorization Service
//!
//! Wallets are controlled by a fixed set of owners. A proposed transaction
//! may only be executed once a quorum of owners has confirmed it, the wallet
//! is not paused, and the wallet's timelock has elapsed since submission.
//!
//! ## Modules
//!
//! - `multisig` - Wallet registry and authorization engine
//! - `api` - HTTP API handlers (Axum)
//! - `models` - Request/response types and engine views
//! - `config` - Environment-driven runtime configuration

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod multisig;
pub mod state;
