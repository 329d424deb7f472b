//! Storage collaborator: versioned tournament records with compare-and-swap saves.

mod memory;

pub use memory::InMemoryStore;

use crate::models::{Tournament, TournamentId, TournamentStatus};
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by a tournament store.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum StorageError {
    #[error("No tournament with id {0}")]
    NotFound(TournamentId),
    #[error("Tournament {0} already exists")]
    AlreadyExists(TournamentId),
    /// The record changed since it was loaded; reload and try again.
    #[error("Tournament was modified concurrently (expected version {expected}, found {actual})")]
    Conflict { expected: u64, actual: u64 },
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// A tournament record together with the version it was read at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Versioned {
    pub tournament: Tournament,
    pub version: u64,
}

/// Persistence for tournament records.
///
/// `save` must be atomic per tournament: it succeeds only if the stored version still equals
/// `expected_version`, and returns the new version. Different tournaments are independent.
pub trait TournamentStore: Send + Sync {
    fn insert(&self, tournament: Tournament) -> StorageResult<()>;

    fn load(&self, id: TournamentId) -> StorageResult<Versioned>;

    fn save(&self, tournament: &Tournament, expected_version: u64) -> StorageResult<u64>;

    /// All tournaments, or only those with the given status.
    fn list(&self, status: Option<TournamentStatus>) -> StorageResult<Vec<Tournament>>;
}
