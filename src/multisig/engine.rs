// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authorization Engine
//!
//! Policy layer over the [`WalletRegistry`]. Every operation resolves exactly
//! one wallet, takes that wallet's lock for the whole check-then-mutate
//! sequence, and evaluates all preconditions before touching state. A failed
//! operation therefore never leaves a partial mutation behind.
//!
//! ## Transaction lifecycle
//!
//! ```text
//! submit ──► Pending ──(confirm)*──► Pending ──(execute, gates pass)──► Executed
//! ```
//!
//! `Executed` is terminal.
//!
//! ## Owner replacement policy
//!
//! - Replacing an owner with an identity that is already an owner is rejected,
//!   so `threshold <= owners.len()` holds at all times.
//! - Confirmations from a replaced owner stay on the transaction record, but
//!   only confirmations from *current* owners count toward the threshold.

use std::collections::HashSet;
use std::sync::{Arc, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::error::{InvalidOperationReason, WalletError, WalletResult};
use super::registry::{InMemoryRegistry, SharedWallet, WalletRegistry};
use super::types::{Transaction, TxId, Wallet, WalletId};
use crate::models::{ExecutionReceipt, TransactionView, WalletView};

pub struct AuthorizationEngine {
    registry: Arc<dyn WalletRegistry>,
    clock: Arc<dyn Clock>,
}

impl AuthorizationEngine {
    pub fn new(registry: Arc<dyn WalletRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// Engine over an empty in-memory registry and the wall clock.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRegistry::new()), Arc::new(SystemClock))
    }

    pub fn registry(&self) -> &dyn WalletRegistry {
        self.registry.as_ref()
    }

    /// Create a wallet owned by the deduplicated `owners`.
    ///
    /// # Errors
    /// `InvalidOperation` if `owners` is empty or `threshold` is outside
    /// `1..=owners.len()`.
    pub fn create_wallet<I, S>(
        &self,
        owners: I,
        threshold: u32,
        timelock_seconds: u64,
    ) -> WalletResult<WalletView>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let owners: HashSet<String> = owners.into_iter().map(Into::into).collect();

        if owners.is_empty() {
            return Err(InvalidOperationReason::EmptyOwners.into());
        }
        if threshold < 1 || threshold as usize > owners.len() {
            return Err(InvalidOperationReason::ThresholdOutOfRange {
                threshold,
                owners: owners.len(),
            }
            .into());
        }

        let wallet = Wallet::new(owners, threshold, timelock_seconds);
        let view = WalletView::from(&wallet);
        self.registry.put(wallet);

        info!(
            wallet_id = %view.wallet_id,
            owners = view.owners.len(),
            threshold,
            timelock_seconds,
            "Wallet created"
        );
        Ok(view)
    }

    /// Block execution on this wallet. Idempotent.
    pub fn pause(&self, wallet_id: &WalletId) -> WalletResult<()> {
        self.set_paused(wallet_id, true)
    }

    /// Re-allow execution on this wallet. Idempotent.
    pub fn unpause(&self, wallet_id: &WalletId) -> WalletResult<()> {
        self.set_paused(wallet_id, false)
    }

    fn set_paused(&self, wallet_id: &WalletId, paused: bool) -> WalletResult<()> {
        let handle = self.load(wallet_id)?;
        let mut wallet = lock(&handle);
        wallet.paused = paused;
        info!(wallet_id = %wallet_id, paused, "Wallet pause state set");
        Ok(())
    }

    /// Swap `old_owner` for `new_owner`.
    ///
    /// Replacing an owner with itself is a no-op.
    ///
    /// # Errors
    /// - `NotAnOwner` if `old_owner` is not a current owner.
    /// - `InvalidOperation(DuplicateOwner)` if `new_owner` is already a
    ///   different current owner.
    pub fn replace_owner(
        &self,
        wallet_id: &WalletId,
        old_owner: &str,
        new_owner: &str,
    ) -> WalletResult<()> {
        let handle = self.load(wallet_id)?;
        let mut wallet = lock(&handle);

        if !wallet.is_owner(old_owner) {
            return Err(WalletError::NotAnOwner {
                wallet_id: wallet_id.clone(),
                identity: old_owner.to_string(),
            });
        }
        if old_owner == new_owner {
            return Ok(());
        }
        if wallet.is_owner(new_owner) {
            return Err(InvalidOperationReason::DuplicateOwner(new_owner.to_string()).into());
        }

        wallet.owners.remove(old_owner);
        wallet.owners.insert(new_owner.to_string());

        info!(
            wallet_id = %wallet_id,
            old_owner,
            new_owner,
            "Wallet owner replaced"
        );
        Ok(())
    }

    /// Current owners in lexicographic order.
    pub fn get_owners(&self, wallet_id: &WalletId) -> WalletResult<Vec<String>> {
        let handle = self.load(wallet_id)?;
        let wallet = lock(&handle);
        Ok(wallet.sorted_owners())
    }

    /// Propose a transaction. The creator's submission counts as their own
    /// confirmation.
    ///
    /// # Errors
    /// `NotAnOwner` if `creator` is not a current owner.
    pub fn submit_transaction(
        &self,
        wallet_id: &WalletId,
        creator: &str,
        payload: serde_json::Value,
    ) -> WalletResult<TransactionView> {
        let handle = self.load(wallet_id)?;
        let mut wallet = lock(&handle);

        if !wallet.is_owner(creator) {
            return Err(WalletError::NotAnOwner {
                wallet_id: wallet_id.clone(),
                identity: creator.to_string(),
            });
        }

        let mut tx = Transaction::new(creator, payload, self.clock.now());
        tx.confirmations.insert(creator.to_string());
        let view = TransactionView::from(&tx);
        wallet.transactions.insert(tx.id.clone(), tx);

        info!(
            wallet_id = %wallet_id,
            tx_id = %view.tx_id,
            creator,
            "Transaction submitted"
        );
        Ok(view)
    }

    /// Record `owner`'s approval of a pending transaction.
    ///
    /// Checks run in this order: owner membership, transaction existence,
    /// duplicate confirmation, already executed.
    pub fn confirm_transaction(
        &self,
        wallet_id: &WalletId,
        tx_id: &TxId,
        owner: &str,
    ) -> WalletResult<()> {
        let handle = self.load(wallet_id)?;
        let mut wallet = lock(&handle);

        if !wallet.is_owner(owner) {
            return Err(WalletError::NotAnOwner {
                wallet_id: wallet_id.clone(),
                identity: owner.to_string(),
            });
        }

        let tx = wallet
            .transactions
            .get_mut(tx_id)
            .ok_or_else(|| InvalidOperationReason::TransactionNotFound(tx_id.clone()))?;

        if tx.is_confirmed_by(owner) {
            return Err(WalletError::AlreadyConfirmed {
                tx_id: tx_id.clone(),
                owner: owner.to_string(),
            });
        }
        if tx.executed {
            return Err(InvalidOperationReason::AlreadyExecuted(tx_id.clone()).into());
        }

        tx.confirmations.insert(owner.to_string());

        debug!(
            wallet_id = %wallet_id,
            tx_id = %tx_id,
            owner,
            confirmations = tx.confirmations.len(),
            "Transaction confirmed"
        );
        Ok(())
    }

    /// Certify that a transaction passed every gate and mark it executed.
    ///
    /// Gates, first failure wins:
    /// 1. wallet paused
    /// 2. transaction missing
    /// 3. transaction already executed
    /// 4. fewer current-owner confirmations than the threshold
    /// 5. timelock not yet elapsed
    ///
    /// The clock is read once, after the wallet lock is held. The engine does
    /// not perform the payload's action; it returns it to the caller.
    pub fn execute_transaction(
        &self,
        wallet_id: &WalletId,
        tx_id: &TxId,
    ) -> WalletResult<ExecutionReceipt> {
        let handle = self.load(wallet_id)?;
        let mut wallet = lock(&handle);

        let result = Self::check_execution_gates(&wallet, tx_id, self.clock.as_ref());
        let now = match result {
            Ok(now) => now,
            Err(err) => {
                warn!(
                    wallet_id = %wallet_id,
                    tx_id = %tx_id,
                    error_code = err.error_code(),
                    "Transaction execution rejected"
                );
                return Err(err);
            }
        };

        let tx = wallet
            .transactions
            .get_mut(tx_id)
            .ok_or_else(|| InvalidOperationReason::TransactionNotFound(tx_id.clone()))?;
        tx.executed = true;

        info!(wallet_id = %wallet_id, tx_id = %tx_id, "Transaction executed");
        Ok(ExecutionReceipt {
            payload: tx.payload.clone(),
            executed_at: now,
        })
    }

    /// Evaluate the execute gates without mutating. Returns the single clock
    /// reading used for the timelock comparison.
    fn check_execution_gates(
        wallet: &Wallet,
        tx_id: &TxId,
        clock: &dyn Clock,
    ) -> WalletResult<DateTime<Utc>> {
        if wallet.paused {
            return Err(WalletError::WalletPaused(wallet.id.clone()));
        }

        let tx = wallet
            .transactions
            .get(tx_id)
            .ok_or_else(|| InvalidOperationReason::TransactionNotFound(tx_id.clone()))?;

        if tx.executed {
            return Err(InvalidOperationReason::AlreadyExecuted(tx_id.clone()).into());
        }

        let confirmations = wallet.effective_confirmations(tx);
        if confirmations < wallet.threshold as usize {
            return Err(WalletError::ThresholdNotMet {
                tx_id: tx_id.clone(),
                confirmations,
                threshold: wallet.threshold,
            });
        }

        let now = clock.now();
        if wallet.timelock_seconds > 0 {
            // Truncated to whole seconds; a clock running backwards counts as zero.
            let elapsed = now.signed_duration_since(tx.submitted_at).num_seconds().max(0) as u64;
            if elapsed < wallet.timelock_seconds {
                return Err(WalletError::TimelockNotElapsed {
                    tx_id: tx_id.clone(),
                    remaining_seconds: wallet.timelock_seconds - elapsed,
                });
            }
        }

        Ok(now)
    }

    fn load(&self, wallet_id: &WalletId) -> WalletResult<SharedWallet> {
        Ok(self.registry.get(wallet_id)?)
    }
}

/// Lock a wallet, recovering from poisoning. Operations validate before they
/// mutate, so a panicking holder cannot leave a half-applied change.
fn lock(handle: &SharedWallet) -> MutexGuard<'_, Wallet> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multisig::clock::ManualClock;
    use chrono::TimeDelta;
    use serde_json::json;
    use std::sync::Barrier;

    fn engine_with_clock() -> (AuthorizationEngine, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let engine = AuthorizationEngine::new(Arc::new(InMemoryRegistry::new()), clock.clone());
        (engine, clock)
    }

    fn abc_wallet(engine: &AuthorizationEngine, threshold: u32, timelock: u64) -> WalletId {
        engine
            .create_wallet(["a", "b", "c"], threshold, timelock)
            .expect("wallet creation succeeds")
            .wallet_id
    }

    fn submit(engine: &AuthorizationEngine, wallet_id: &WalletId, creator: &str) -> TxId {
        engine
            .submit_transaction(wallet_id, creator, json!({"op": "noop"}))
            .expect("submission succeeds")
            .tx_id
    }

    // -------------------------------------------------------------------------
    // createWallet
    // -------------------------------------------------------------------------

    #[test]
    fn create_wallet_dedups_and_sorts_owners() {
        let engine = AuthorizationEngine::in_memory();
        let view = engine.create_wallet(["c", "a", "b", "a"], 3, 60).unwrap();

        assert_eq!(view.owners, vec!["a", "b", "c"]);
        assert_eq!(view.threshold, 3);
        assert_eq!(view.timelock_seconds, 60);
        assert!(!view.paused);
        assert!(engine.registry().exists(&view.wallet_id));
    }

    #[test]
    fn create_wallet_rejects_threshold_above_unique_owner_count() {
        let engine = AuthorizationEngine::in_memory();
        let err = engine.create_wallet(["a", "a", "b"], 3, 0).unwrap_err();
        assert_eq!(
            err,
            WalletError::InvalidOperation(InvalidOperationReason::ThresholdOutOfRange {
                threshold: 3,
                owners: 2
            })
        );
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn create_wallet_rejects_zero_threshold_and_empty_owners() {
        let engine = AuthorizationEngine::in_memory();
        assert!(matches!(
            engine.create_wallet(["a"], 0, 0),
            Err(WalletError::InvalidOperation(
                InvalidOperationReason::ThresholdOutOfRange { .. }
            ))
        ));
        assert_eq!(
            engine.create_wallet(Vec::<String>::new(), 1, 0).unwrap_err(),
            WalletError::InvalidOperation(InvalidOperationReason::EmptyOwners)
        );
    }

    #[test]
    fn create_wallet_generates_distinct_ids() {
        let engine = AuthorizationEngine::in_memory();
        let first = abc_wallet(&engine, 1, 0);
        let second = abc_wallet(&engine, 1, 0);
        assert_ne!(first, second);
        assert_eq!(engine.registry().len(), 2);
    }

    // -------------------------------------------------------------------------
    // Wallet resolution
    // -------------------------------------------------------------------------

    #[test]
    fn every_operation_reports_missing_wallet() {
        let engine = AuthorizationEngine::in_memory();
        let missing = WalletId::from("missing");
        let tx = TxId::from("tx");
        let expected = WalletError::WalletNotFound(missing.clone());

        assert_eq!(engine.pause(&missing).unwrap_err(), expected);
        assert_eq!(engine.unpause(&missing).unwrap_err(), expected);
        assert_eq!(engine.replace_owner(&missing, "a", "b").unwrap_err(), expected);
        assert_eq!(engine.get_owners(&missing).unwrap_err(), expected);
        assert_eq!(
            engine.submit_transaction(&missing, "a", json!({})).unwrap_err(),
            expected
        );
        assert_eq!(
            engine.confirm_transaction(&missing, &tx, "a").unwrap_err(),
            expected
        );
        assert_eq!(engine.execute_transaction(&missing, &tx).unwrap_err(), expected);
    }

    // -------------------------------------------------------------------------
    // Owners
    // -------------------------------------------------------------------------

    #[test]
    fn replace_owner_swaps_identity() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);

        engine.replace_owner(&wallet_id, "b", "d").unwrap();

        assert_eq!(engine.get_owners(&wallet_id).unwrap(), vec!["a", "c", "d"]);
    }

    #[test]
    fn replace_owner_requires_existing_old_owner() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);

        let err = engine.replace_owner(&wallet_id, "z", "d").unwrap_err();
        assert!(matches!(err, WalletError::NotAnOwner { ref identity, .. } if identity == "z"));
        assert_eq!(engine.get_owners(&wallet_id).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_owner_rejects_collision_and_keeps_owner_count() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 3, 0);

        let err = engine.replace_owner(&wallet_id, "a", "b").unwrap_err();
        assert_eq!(
            err,
            WalletError::InvalidOperation(InvalidOperationReason::DuplicateOwner("b".into()))
        );
        assert_eq!(engine.get_owners(&wallet_id).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_owner_with_itself_is_noop() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);

        engine.replace_owner(&wallet_id, "a", "a").unwrap();
        assert_eq!(engine.get_owners(&wallet_id).unwrap(), vec!["a", "b", "c"]);
    }

    // -------------------------------------------------------------------------
    // Submit / confirm
    // -------------------------------------------------------------------------

    #[test]
    fn submit_auto_confirms_creator() {
        let (engine, clock) = engine_with_clock();
        let wallet_id = abc_wallet(&engine, 2, 0);

        let view = engine
            .submit_transaction(&wallet_id, "b", json!({"to": "x", "amount": 5}))
            .unwrap();

        assert_eq!(view.creator, "b");
        assert_eq!(view.confirmations, vec!["b"]);
        assert_eq!(view.payload, json!({"to": "x", "amount": 5}));
        assert_eq!(view.submitted_at, clock.now());
        assert!(!view.executed);
    }

    #[test]
    fn submit_requires_owner() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);

        let err = engine
            .submit_transaction(&wallet_id, "mallory", json!({}))
            .unwrap_err();
        assert_eq!(err.error_code(), "not_an_owner");
    }

    #[test]
    fn confirm_checks_run_in_order() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 1, 0);
        let tx_id = submit(&engine, &wallet_id, "a");
        let missing = TxId::from("missing");

        // Non-owner is reported even for an unknown transaction.
        assert_eq!(
            engine
                .confirm_transaction(&wallet_id, &missing, "mallory")
                .unwrap_err()
                .error_code(),
            "not_an_owner"
        );
        assert_eq!(
            engine
                .confirm_transaction(&wallet_id, &missing, "b")
                .unwrap_err(),
            WalletError::InvalidOperation(InvalidOperationReason::TransactionNotFound(missing))
        );

        engine.execute_transaction(&wallet_id, &tx_id).unwrap();

        // The creator's duplicate is reported before the executed state.
        assert!(matches!(
            engine.confirm_transaction(&wallet_id, &tx_id, "a"),
            Err(WalletError::AlreadyConfirmed { .. })
        ));
        assert_eq!(
            engine.confirm_transaction(&wallet_id, &tx_id, "b").unwrap_err(),
            WalletError::InvalidOperation(InvalidOperationReason::AlreadyExecuted(tx_id))
        );
    }

    #[test]
    fn double_confirmation_is_rejected() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 3, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        engine.confirm_transaction(&wallet_id, &tx_id, "b").unwrap();
        let err = engine
            .confirm_transaction(&wallet_id, &tx_id, "b")
            .unwrap_err();

        assert_eq!(
            err,
            WalletError::AlreadyConfirmed {
                tx_id,
                owner: "b".into()
            }
        );
    }

    #[test]
    fn concurrent_duplicate_confirmations_have_one_winner() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        const CALLERS: usize = 8;
        let barrier = &Barrier::new(CALLERS);
        let (engine, wallet_id, tx_id) = (&engine, &wallet_id, &tx_id);
        let results: Vec<WalletResult<()>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(move || {
                        barrier.wait();
                        engine.confirm_transaction(wallet_id, tx_id, "b")
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winners = results.iter().filter(|r| r.is_ok()).count();
        let losers = results
            .iter()
            .filter(|r| matches!(r, Err(WalletError::AlreadyConfirmed { .. })))
            .count();
        assert_eq!(winners, 1);
        assert_eq!(losers, CALLERS - 1);
    }

    #[test]
    fn concurrent_executions_have_one_winner() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 1, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        const CALLERS: usize = 8;
        let barrier = &Barrier::new(CALLERS);
        let (engine, wallet_id, tx_id) = (&engine, &wallet_id, &tx_id);
        let successes = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(move || {
                        barrier.wait();
                        engine.execute_transaction(wallet_id, tx_id).is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count()
        });

        assert_eq!(successes, 1);
    }

    // -------------------------------------------------------------------------
    // Execute
    // -------------------------------------------------------------------------

    #[test]
    fn submit_confirm_execute_returns_payload() {
        let (engine, clock) = engine_with_clock();
        let wallet_id = abc_wallet(&engine, 2, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        engine.confirm_transaction(&wallet_id, &tx_id, "b").unwrap();
        let receipt = engine.execute_transaction(&wallet_id, &tx_id).unwrap();

        assert_eq!(receipt.payload["op"], "noop");
        assert_eq!(receipt.executed_at, clock.now());
    }

    #[test]
    fn execute_before_quorum_fails() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        let err = engine.execute_transaction(&wallet_id, &tx_id).unwrap_err();
        assert_eq!(
            err,
            WalletError::ThresholdNotMet {
                tx_id,
                confirmations: 1,
                threshold: 2
            }
        );
    }

    #[test]
    fn re_execution_is_invalid() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 1, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        engine.execute_transaction(&wallet_id, &tx_id).unwrap();
        let err = engine.execute_transaction(&wallet_id, &tx_id).unwrap_err();

        assert_eq!(
            err,
            WalletError::InvalidOperation(InvalidOperationReason::AlreadyExecuted(tx_id))
        );
    }

    #[test]
    fn execute_unknown_transaction_is_invalid() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 1, 0);

        let err = engine
            .execute_transaction(&wallet_id, &TxId::from("nope"))
            .unwrap_err();
        assert_eq!(err.error_code(), "transaction_not_found");
    }

    #[test]
    fn timelock_blocks_until_elapsed() {
        let (engine, clock) = engine_with_clock();
        let wallet_id = abc_wallet(&engine, 2, 3600);
        let tx_id = submit(&engine, &wallet_id, "a");
        engine.confirm_transaction(&wallet_id, &tx_id, "b").unwrap();

        clock.advance(TimeDelta::seconds(10));
        let err = engine.execute_transaction(&wallet_id, &tx_id).unwrap_err();
        assert_eq!(
            err,
            WalletError::TimelockNotElapsed {
                tx_id: tx_id.clone(),
                remaining_seconds: 3590
            }
        );

        clock.advance(TimeDelta::seconds(3590));
        assert!(engine.execute_transaction(&wallet_id, &tx_id).is_ok());
    }

    #[test]
    fn timelock_just_short_of_deadline_still_blocks() {
        let (engine, clock) = engine_with_clock();
        let wallet_id = abc_wallet(&engine, 1, 60);
        let tx_id = submit(&engine, &wallet_id, "a");

        clock.advance(TimeDelta::milliseconds(59_999));
        assert!(matches!(
            engine.execute_transaction(&wallet_id, &tx_id),
            Err(WalletError::TimelockNotElapsed {
                remaining_seconds: 1,
                ..
            })
        ));
    }

    #[test]
    fn paused_wallet_blocks_execution_until_unpaused() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        engine.pause(&wallet_id).unwrap();
        engine.pause(&wallet_id).unwrap();

        // Confirmation stays allowed while paused.
        engine.confirm_transaction(&wallet_id, &tx_id, "b").unwrap();
        assert_eq!(
            engine.execute_transaction(&wallet_id, &tx_id).unwrap_err(),
            WalletError::WalletPaused(wallet_id.clone())
        );

        engine.unpause(&wallet_id).unwrap();
        engine.unpause(&wallet_id).unwrap();
        assert!(engine.execute_transaction(&wallet_id, &tx_id).is_ok());
    }

    #[test]
    fn submission_allowed_while_paused() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 1, 0);
        engine.pause(&wallet_id).unwrap();

        assert!(engine
            .submit_transaction(&wallet_id, "a", json!({}))
            .is_ok());
    }

    #[test]
    fn pause_gate_precedes_all_others() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);
        engine.pause(&wallet_id).unwrap();

        let err = engine
            .execute_transaction(&wallet_id, &TxId::from("missing"))
            .unwrap_err();
        assert_eq!(err, WalletError::WalletPaused(wallet_id));
    }

    #[test]
    fn threshold_gate_precedes_timelock() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 3600);
        let tx_id = submit(&engine, &wallet_id, "a");

        assert!(matches!(
            engine.execute_transaction(&wallet_id, &tx_id),
            Err(WalletError::ThresholdNotMet { .. })
        ));
    }

    // -------------------------------------------------------------------------
    // Owner replacement vs. pending confirmations
    // -------------------------------------------------------------------------

    #[test]
    fn replaced_owner_confirmation_no_longer_counts() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        engine.replace_owner(&wallet_id, "a", "d").unwrap();
        engine.confirm_transaction(&wallet_id, &tx_id, "b").unwrap();

        // "a" is still recorded but only "b" is a current owner.
        assert_eq!(
            engine.execute_transaction(&wallet_id, &tx_id).unwrap_err(),
            WalletError::ThresholdNotMet {
                tx_id: tx_id.clone(),
                confirmations: 1,
                threshold: 2
            }
        );

        engine.confirm_transaction(&wallet_id, &tx_id, "d").unwrap();
        assert!(engine.execute_transaction(&wallet_id, &tx_id).is_ok());
    }

    #[test]
    fn replaced_owner_cannot_confirm() {
        let engine = AuthorizationEngine::in_memory();
        let wallet_id = abc_wallet(&engine, 2, 0);
        let tx_id = submit(&engine, &wallet_id, "a");

        engine.replace_owner(&wallet_id, "b", "d").unwrap();

        assert!(matches!(
            engine.confirm_transaction(&wallet_id, &tx_id, "b"),
            Err(WalletError::NotAnOwner { .. })
        ));
    }
}
