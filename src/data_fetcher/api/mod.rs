pub mod fetch_utils;
pub mod grid;
pub mod http_client;

pub use grid::{GridClient, TeamStatistics, parse_team_id};
pub use http_client::create_http_client_with_timeout;
