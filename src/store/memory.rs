//! In-process store: tournaments by id behind a RwLock.

use crate::models::{Tournament, TournamentId, TournamentStatus};
use crate::store::{StorageError, StorageResult, TournamentStore, Versioned};
use std::collections::HashMap;
use std::sync::RwLock;

/// Keeps every tournament in memory. Versions start at 1 and increase on each save.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tournaments: RwLock<HashMap<TournamentId, Versioned>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for InMemoryStore {
    fn insert(&self, tournament: Tournament) -> StorageResult<()> {
        let mut g = self.tournaments.write().map_err(|_| StorageError::Poisoned)?;
        if g.contains_key(&tournament.id) {
            return Err(StorageError::AlreadyExists(tournament.id));
        }
        g.insert(
            tournament.id,
            Versioned {
                tournament,
                version: 1,
            },
        );
        Ok(())
    }

    fn load(&self, id: TournamentId) -> StorageResult<Versioned> {
        let g = self.tournaments.read().map_err(|_| StorageError::Poisoned)?;
        g.get(&id).cloned().ok_or(StorageError::NotFound(id))
    }

    fn save(&self, tournament: &Tournament, expected_version: u64) -> StorageResult<u64> {
        let mut g = self.tournaments.write().map_err(|_| StorageError::Poisoned)?;
        let entry = g
            .get_mut(&tournament.id)
            .ok_or(StorageError::NotFound(tournament.id))?;
        if entry.version != expected_version {
            return Err(StorageError::Conflict {
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.tournament = tournament.clone();
        entry.version += 1;
        Ok(entry.version)
    }

    fn list(&self, status: Option<TournamentStatus>) -> StorageResult<Vec<Tournament>> {
        let g = self.tournaments.read().map_err(|_| StorageError::Poisoned)?;
        let mut tournaments: Vec<Tournament> = g
            .values()
            .map(|v| &v.tournament)
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        tournaments.sort_by(|a, b| {
            (a.details.date, a.details.time, &a.details.name).cmp(&(
                b.details.date,
                b.details.time,
                &b.details.name,
            ))
        });
        Ok(tournaments)
    }
}
