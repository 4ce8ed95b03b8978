//! `park-sim` — phase controller and event loop for the parking-lot simulator.
//!
//! # Phases
//!
//! ```text
//! InitialRamp       nearest-spot arrivals up to the first target; each
//!                   assignment is recorded as a RampRow.
//! SingleComparison  one arrival priced nearest vs farthest; nearest taken.
//! HighRamp          unrecorded arrivals up to the high target.
//! ChurnWindow       arrivals and departures interleaved in time order
//!                   (departure first on ties) until start + window;
//!                   each admitted arrival becomes a WindowRow.
//! Done
//! ```
//!
//! Every random draw goes through one [`UniformSource`][park_core::UniformSource],
//! so a seed (or a scripted draw sequence) fixes the whole run.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on every record type. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use park_core::SimConfig;
//! use park_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let output = sim.run(&mut NoopObserver);
//! println!("{} window comparisons", output.window.len());
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod observer;
pub mod phase;
pub mod records;
pub mod sim;


pub use builder::SimBuilder;
pub use context::{SimContext, SimView};
pub use error::{SimError, SimResult};
pub use observer::{ArrivalEvent, NoopObserver, SimObserver};
pub use phase::{Phase, PhaseKind};
pub use records::{
    Comparison, ComparisonRow, ParamsSnapshot, RampRow, RunStats, SimOutput, SpotChoice,
    WindowRow,
};
pub use sim::Sim;

use park_core::SimConfig;

/// Build and run a simulation over the reference lot with `config`.
pub fn run_simulation(config: SimConfig) -> SimResult<SimOutput> {
    let mut sim = SimBuilder::new(config).build()?;
    sim.run(&mut NoopObserver);
    Ok(sim.into_output())
}
