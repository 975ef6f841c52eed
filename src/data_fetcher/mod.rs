pub mod api;
pub mod loader;
pub mod mock;
pub mod models;

pub use loader::{
    DataOrigin, GridSource, LoadOutcome, LoadRequest, MatchSource, MockSource, load,
};
pub use mock::MockGenerator;
pub use models::{Game, GameStats, MatchRecord};
