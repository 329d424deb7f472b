//! Authorization collaborator: who may appoint officials, begin a tournament and decide its matches.

use crate::models::{PlayerId, Tournament};
use std::collections::HashSet;

/// Capability checks for one tournament.
pub trait MatchAuthority: Send + Sync {
    /// May `caller` begin `tournament` and record its match results?
    fn may_decide(&self, caller: PlayerId, tournament: &Tournament) -> bool;

    /// May `caller` appoint officials or remove other users from `tournament`?
    fn may_appoint(&self, caller: PlayerId, tournament: &Tournament) -> bool {
        self.may_decide(caller, tournament)
    }
}

/// Matches are decided by the tournament's assigned officials. Only holders of the
/// tournament-official role may assign them.
#[derive(Clone, Debug, Default)]
pub struct OfficialsOnly {
    role_holders: HashSet<PlayerId>,
}

impl OfficialsOnly {
    pub fn new(role_holders: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            role_holders: role_holders.into_iter().collect(),
        }
    }

    pub fn has_role(&self, user: PlayerId) -> bool {
        self.role_holders.contains(&user)
    }
}

impl MatchAuthority for OfficialsOnly {
    fn may_decide(&self, caller: PlayerId, tournament: &Tournament) -> bool {
        tournament.is_official(caller)
    }

    fn may_appoint(&self, caller: PlayerId, _tournament: &Tournament) -> bool {
        self.has_role(caller)
    }
}

/// Anyone may do anything (local play, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl MatchAuthority for AllowAll {
    fn may_decide(&self, _caller: PlayerId, _tournament: &Tournament) -> bool {
        true
    }
}

impl<F> MatchAuthority for F
where
    F: Fn(PlayerId, &Tournament) -> bool + Send + Sync,
{
    fn may_decide(&self, caller: PlayerId, tournament: &Tournament) -> bool {
        self(caller, tournament)
    }
}
