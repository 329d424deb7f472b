//! Player identifiers and registration limits.

use uuid::Uuid;

/// Unique identifier for a player or official (opaque to the bracket engine).
pub type PlayerId = Uuid;

/// Most players a single tournament accepts.
pub const MAX_PLAYERS: usize = 32;

/// Fewest players needed to begin a tournament (one real match).
pub const MIN_PLAYERS_TO_START: usize = 2;
