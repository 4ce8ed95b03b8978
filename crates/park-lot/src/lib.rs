//! `park-lot` — the physical lot: spot layout, drive costs, and occupancy.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`layout`]    | `Spot`, `SpotLayout`, `SpotLayoutBuilder`, reference table |
//! | [`cost`]      | `CostModel`, `SpotCost`                                   |
//! | [`lot`]       | `ParkingLot` (layout + cost model)                        |
//! | [`policy`]    | `SelectionPolicy`, `NearestSpot`, `FarthestSpot`, `select_best`, `select_worst` |
//! | [`occupancy`] | `Occupancy` (free/occupied partition)                     |
//! | [`loader`]    | `load_layout_csv`, `load_layout_reader`                   |
//! | [`error`]     | `LotError`, `LotResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cost;
pub mod error;
pub mod layout;
pub mod loader;
pub mod lot;
pub mod occupancy;
pub mod policy;

#[cfg(test)]
mod tests;

pub use cost::{CostModel, SpotCost};
pub use error::{LotError, LotResult};
pub use layout::{Spot, SpotLayout, SpotLayoutBuilder};
pub use loader::{load_layout_csv, load_layout_reader};
pub use lot::ParkingLot;
pub use occupancy::Occupancy;
pub use policy::{FarthestSpot, NearestSpot, SelectionPolicy, select_best, select_worst};
