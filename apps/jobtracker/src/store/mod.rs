//! Client-side state containers.
//!
//! Each store owns its slice of shared state and is the only thing that
//! mutates it. Mutating operations return a [`StoreResult`] carrying a
//! human-readable message instead of an error type, so callers always have a
//! value to branch on.

pub mod auth;
pub mod jobs;
pub mod stats;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api_client::ApiError;

pub use auth::AuthStore;
pub use jobs::JobStore;
pub use stats::{compute_stats, JobStats};

pub type StoreResult<T> = Result<T, String>;

/// The server's `message`, or `fallback` when it sent none.
pub(crate) fn failure_message(error: &ApiError, fallback: &str) -> String {
    error.message().unwrap_or(fallback).to_string()
}

// A panic while holding a store lock cannot leave the data half-written
// (every write is a single assignment), so poisoning is ignored.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
