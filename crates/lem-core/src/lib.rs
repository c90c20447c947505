//! `lem-core`: foundational types for the lem-in colony router.
//!
//! This crate is a dependency of every other `lem-*` crate.  It has no
//! `lem-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `RoomId`, `AntId`                                      |
//! | [`geo`]    | `Point`, Manhattan distance, line deviation            |
//! | [`turn`]   | `Turn`                                                 |
//! | [`config`] | `SolverConfig`: every heuristic constant of the solver |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SolverConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{AntId, RoomId};
pub use turn::Turn;
