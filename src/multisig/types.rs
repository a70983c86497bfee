// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet and transaction entities.
//!
//! Owner and confirmation sets are held as unordered `HashSet`s. Anything
//! exposed outside the engine is sorted lexicographically on read, so callers
//! never observe hash iteration order.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque wallet identifier (UUID v4 string).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WalletId(pub String);

impl WalletId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        WalletId(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletId {
    fn from(value: String) -> Self {
        WalletId(value)
    }
}

impl From<&str> for WalletId {
    fn from(value: &str) -> Self {
        WalletId(value.to_string())
    }
}

/// Opaque transaction identifier, unique within the process.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxId(pub String);

impl TxId {
    pub fn generate() -> Self {
        TxId(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TxId {
    fn from(value: String) -> Self {
        TxId(value)
    }
}

impl From<&str> for TxId {
    fn from(value: &str) -> Self {
        TxId(value.to_string())
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A proposed action awaiting quorum.
///
/// `executed` flips to `true` exactly once; after that the transaction is
/// terminal and no operation mutates it again.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: TxId,
    pub creator: String,
    pub payload: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
    pub confirmations: HashSet<String>,
    pub executed: bool,
}

impl Transaction {
    /// Create a pending transaction with no confirmations.
    pub fn new(creator: impl Into<String>, payload: serde_json::Value, now: DateTime<Utc>) -> Self {
        Self {
            id: TxId::generate(),
            creator: creator.into(),
            payload,
            submitted_at: now,
            confirmations: HashSet::new(),
            executed: false,
        }
    }

    pub fn is_confirmed_by(&self, owner: &str) -> bool {
        self.confirmations.contains(owner)
    }

    /// Confirmations sorted for stable external representation.
    pub fn sorted_confirmations(&self) -> Vec<String> {
        sorted(&self.confirmations)
    }
}

/// A shared-custody wallet.
///
/// Invariant: `1 <= threshold <= owners.len()`.
#[derive(Debug, Clone)]
pub struct Wallet {
    pub id: WalletId,
    pub owners: HashSet<String>,
    pub threshold: u32,
    pub timelock_seconds: u64,
    pub paused: bool,
    pub transactions: HashMap<TxId, Transaction>,
}

impl Wallet {
    /// Build an unpaused wallet with a fresh id and no transactions.
    ///
    /// Validation of `owners`/`threshold` is the engine's job.
    pub fn new(owners: HashSet<String>, threshold: u32, timelock_seconds: u64) -> Self {
        Self {
            id: WalletId::generate(),
            owners,
            threshold,
            timelock_seconds,
            paused: false,
            transactions: HashMap::new(),
        }
    }

    pub fn is_owner(&self, identity: &str) -> bool {
        self.owners.contains(identity)
    }

    pub fn sorted_owners(&self) -> Vec<String> {
        sorted(&self.owners)
    }

    /// Number of confirmations on `tx` that come from current owners.
    pub fn effective_confirmations(&self, tx: &Transaction) -> usize {
        tx.confirmations
            .iter()
            .filter(|owner| self.owners.contains(owner.as_str()))
            .count()
    }
}

fn sorted(set: &HashSet<String>) -> Vec<String> {
    let mut items: Vec<String> = set.iter().cloned().collect();
    items.sort();
    items
}
