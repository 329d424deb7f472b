//! Tournament service: each operation is one load, one in-memory transition and one
//! versioned save against the store.

use crate::auth::MatchAuthority;
use crate::logic::{begin_tournament, create_tournaments, record_result};
use crate::models::{
    Bracket, MatchCoordinate, PlayerId, Tournament, TournamentDetails, TournamentError,
    TournamentId, TournamentStatus,
};
use crate::store::{StorageError, TournamentStore};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by [`TournamentService`] operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tournament(#[from] TournamentError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Caller lacks the capability required for this operation on this tournament.
    #[error("User {0} is not allowed to do this for this tournament")]
    Forbidden(PlayerId),
}

/// Bracket and status after a recorded result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResultOutcome {
    pub bracket: Bracket,
    pub status: TournamentStatus,
    pub champion: Option<PlayerId>,
}

/// Runs tournament operations against a store, gated by a match authority.
///
/// Saves use the version read at load time, so two concurrent writers on the same tournament
/// cannot both succeed. Storage conflicts are returned, not retried.
pub struct TournamentService<S, A> {
    store: S,
    authority: A,
}

impl<S: TournamentStore, A: MatchAuthority> TournamentService<S, A> {
    pub fn new(store: S, authority: A) -> Self {
        Self { store, authority }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create one tournament, or one per level when `levels` is non-empty.
    pub fn create(
        &self,
        details: TournamentDetails,
        levels: &[String],
    ) -> Result<Vec<Tournament>, ServiceError> {
        let tournaments = create_tournaments(details, levels)?;
        for t in &tournaments {
            self.store.insert(t.clone())?;
            log::info!("Created tournament {} ({})", t.id, t.details.name);
        }
        Ok(tournaments)
    }

    pub fn get(&self, id: TournamentId) -> Result<Tournament, ServiceError> {
        Ok(self.store.load(id)?.tournament)
    }

    pub fn list(&self, status: Option<TournamentStatus>) -> Result<Vec<Tournament>, ServiceError> {
        Ok(self.store.list(status)?)
    }

    /// Register `player`. Callers may register themselves; registering someone else needs the
    /// appoint capability.
    pub fn register(
        &self,
        id: TournamentId,
        caller: PlayerId,
        player: PlayerId,
    ) -> Result<Tournament, ServiceError> {
        self.update_roster(id, caller, player, |t| t.register_player(player))
    }

    /// Withdraw `user`. Callers may withdraw themselves; removing someone else needs the
    /// appoint capability.
    pub fn withdraw(
        &self,
        id: TournamentId,
        caller: PlayerId,
        user: PlayerId,
    ) -> Result<Tournament, ServiceError> {
        self.update_roster(id, caller, user, |t| t.withdraw(user))
    }

    /// Assign `user` as an official. Requires the appoint capability.
    pub fn officiate(
        &self,
        id: TournamentId,
        caller: PlayerId,
        user: PlayerId,
    ) -> Result<Tournament, ServiceError> {
        self.update(id, |t| {
            if !self.authority.may_appoint(caller, t) {
                return Err(ServiceError::Forbidden(caller));
            }
            t.add_official(user).map_err(ServiceError::from)
        })
    }

    /// Build the bracket and move the tournament to in-progress. Requires the match capability.
    pub fn begin(&self, id: TournamentId, caller: PlayerId) -> Result<Tournament, ServiceError> {
        self.update_authorized(id, caller, begin_tournament)
    }

    /// Record the winner of one match, advance them, and complete the tournament if this was
    /// the final. Requires the match capability.
    pub fn record_result(
        &self,
        id: TournamentId,
        caller: PlayerId,
        coord: MatchCoordinate,
        winner: PlayerId,
    ) -> Result<ResultOutcome, ServiceError> {
        let t = self.update_authorized(id, caller, |t| record_result(t, coord, winner).map(|_| ()))?;
        Ok(ResultOutcome {
            champion: t.champion(),
            status: t.status,
            bracket: t.bracket,
        })
    }

    /// Change the roster entry of `user`: allowed for `user` themselves or an appointer.
    fn update_roster<F>(
        &self,
        id: TournamentId,
        caller: PlayerId,
        user: PlayerId,
        apply: F,
    ) -> Result<Tournament, ServiceError>
    where
        F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
    {
        self.update(id, |t| {
            if caller != user && !self.authority.may_appoint(caller, t) {
                return Err(ServiceError::Forbidden(caller));
            }
            apply(t).map_err(ServiceError::from)
        })
    }

    fn update_authorized<F>(
        &self,
        id: TournamentId,
        caller: PlayerId,
        apply: F,
    ) -> Result<Tournament, ServiceError>
    where
        F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
    {
        self.update(id, |t| {
            if !self.authority.may_decide(caller, t) {
                return Err(ServiceError::Forbidden(caller));
            }
            apply(t).map_err(ServiceError::from)
        })
    }

    /// Load, mutate in memory, save against the loaded version. Nothing is written on error.
    fn update<F, E>(&self, id: TournamentId, apply: F) -> Result<Tournament, ServiceError>
    where
        F: FnOnce(&mut Tournament) -> Result<(), E>,
        E: Into<ServiceError>,
    {
        let loaded = self.store.load(id)?;
        let mut tournament = loaded.tournament;
        if let Err(e) = apply(&mut tournament) {
            let e: ServiceError = e.into();
            log::warn!("Tournament {id}: rejected: {e}");
            return Err(e);
        }
        match self.store.save(&tournament, loaded.version) {
            Ok(_) => Ok(tournament),
            Err(e) => {
                log::warn!("Tournament {id}: save failed: {e}");
                Err(e.into())
            }
        }
    }
}
