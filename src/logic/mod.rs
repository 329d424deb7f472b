//! Tournament business logic: setup, bracket building, result recording.

mod advancer;
mod builder;
mod setup;

pub use advancer::{advance, record_result, Advancement};
pub use builder::build_bracket;
pub use setup::{begin_tournament, create_tournaments};
