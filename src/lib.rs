//! Vanguard Scout library
//!
//! Loads a League of Legends or VALORANT team's recent matches (mock data or
//! GRID statistics), computes descriptive statistics and asks a language
//! model, or the offline template, for a scouting report.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vanguard_scout::analysis::analyze;
//! use vanguard_scout::data_fetcher::{LoadRequest, MockGenerator, MockSource, load};
//! use vanguard_scout::data_fetcher::models::Game;
//! use vanguard_scout::report::{OfflineScout, ReportContext, generate};
//! use vanguard_scout::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let request = LoadRequest::new(Game::Valorant, "83", 20);
//!     let mut source = MockSource::new(MockGenerator::new(Some(7), 0.7));
//!     let mut fallback = MockGenerator::new(None, 0.7);
//!
//!     let outcome = load(&request, &mut source, &mut fallback).await?;
//!     let summary = analyze(&outcome.records);
//!     let context = ReportContext::new(request.game, &summary)?;
//!     let report = generate(&context, &OfflineScout).await?;
//!
//!     println!("{}", report.text);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod dashboard;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use analysis::{TeamStatsSummary, analyze};
pub use config::Config;
pub use data_fetcher::models::{Game, MatchRecord};
pub use error::AppError;
pub use report::{LlmProvider, ScoutingReport};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
