//! `lem-paths`: start→end path enumeration, scoring, and selection.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`path`]   | `Path`: a simple start→end room sequence                 |
//! | [`finder`] | `PathFinder` trait, `DfsPathFinder` (exhaustive DFS)      |
//! | [`score`]  | `PathScore`, `ScoredPath`, `score_paths`                  |
//! | [`select`] | `select_paths`, `target_path_count`                       |
//! | [`error`]  | `PathError`, `PathResult<T>`                              |
//!
//! # Pipeline
//!
//! ```text
//! Colony ──find_paths──▶ Vec<Path> ──score_paths──▶ Vec<ScoredPath> (best first)
//!                                                       │
//!                                   select_paths ◀──────┘
//!                                        │
//!                                        ▼
//!                           Vec<Path> (acceptance order)
//! ```

pub mod error;
pub mod finder;
pub mod path;
pub mod score;
pub mod select;


pub use error::{PathError, PathResult};
pub use finder::{DfsPathFinder, PathFinder};
pub use path::Path;
pub use score::{PathScore, ScoredPath, score_paths};
pub use select::{select_paths, target_path_count};
