// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Multisig Core
//!
//! Shared-custody wallets: a fixed owner set, a quorum threshold, an optional
//! timelock and a pause switch gate the execution of proposed transactions.
//!
//! - [`registry`] stores wallets by id and hands out lockable handles.
//! - [`engine`] enforces every authorization rule on top of the registry.
//!
//! Nothing here knows about HTTP; the `api` module translates requests into
//! engine calls and [`WalletError`]s into responses.

pub mod clock;
pub mod engine;
pub mod error;
pub mod registry;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::AuthorizationEngine;
pub use error::{InvalidOperationReason, WalletError, WalletResult};
pub use registry::{InMemoryRegistry, RegistryError, SharedWallet, WalletRegistry};
pub use types::{Transaction, TxId, Wallet, WalletId};
