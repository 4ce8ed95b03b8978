//! `park-core` — foundational types for the parking-lot simulator.
//!
//! This crate is a dependency of every other `park-*` crate.  It has no
//! `park-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SpotId`, `ArrivalId`                                 |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`rng`]         | `UniformSource`, `SimRng`, `ScriptedUniform`          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ArrivalId, SpotId};
pub use rng::{ScriptedUniform, SimRng, UniformSource};
pub use time::{SimClock, SimTime};
