// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet registry.
//!
//! The registry is pure storage: it hands out shared handles to wallets and
//! applies no policy. A handle returned by [`WalletRegistry::get`] aliases the
//! stored entry, so mutations made through it are seen by every later `get`
//! for the same id. The per-wallet mutex is what serializes operations on a
//! single wallet.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::types::{Wallet, WalletId};
use super::WalletError;

/// Shared, lockable handle to a stored wallet.
pub type SharedWallet = Arc<Mutex<Wallet>>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no wallet stored under {0}")]
    NotFound(WalletId),
}

impl From<RegistryError> for WalletError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => WalletError::WalletNotFound(id),
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Storage contract for wallets.
pub trait WalletRegistry: Send + Sync {
    /// Insert or replace the entry for `wallet.id`.
    fn put(&self, wallet: Wallet);

    /// Fetch the stored wallet handle.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no wallet has this id.
    fn get(&self, id: &WalletId) -> RegistryResult<SharedWallet>;

    fn exists(&self, id: &WalletId) -> bool;

    /// Number of stored wallets.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local registry backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryRegistry {
    wallets: RwLock<HashMap<WalletId, SharedWallet>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WalletRegistry for InMemoryRegistry {
    fn put(&self, wallet: Wallet) {
        let mut wallets = self.wallets.write().unwrap_or_else(PoisonError::into_inner);
        wallets.insert(wallet.id.clone(), Arc::new(Mutex::new(wallet)));
    }

    fn get(&self, id: &WalletId) -> RegistryResult<SharedWallet> {
        let wallets = self.wallets.read().unwrap_or_else(PoisonError::into_inner);
        wallets
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.clone()))
    }

    fn exists(&self, id: &WalletId) -> bool {
        let wallets = self.wallets.read().unwrap_or_else(PoisonError::into_inner);
        wallets.contains_key(id)
    }

    fn len(&self) -> usize {
        let wallets = self.wallets.read().unwrap_or_else(PoisonError::into_inner);
        wallets.len()
    }
}
