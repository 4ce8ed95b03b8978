//! `park-schedule` — random processes and the departure queue.
//!
//! # Crate layout
//!
//! | Module              | Contents                                          |
//! |---------------------|---------------------------------------------------|
//! | [`process`]         | `ArrivalProcess` (Poisson), `StayProcess` (shifted exponential) |
//! | [`departure_queue`] | `DepartureQueue` (`BTreeSet<(SimTime, SpotId)>`)  |
//!
//! # Event model (summary)
//!
//! ```text
//! next_arrival   = now + ArrivalProcess::next_gap(rng)
//! departure_time = arrival_time + StayProcess::sample(rng)
//! ```
//!
//! Departures wait in the `DepartureQueue`; the phase controller compares
//! its head against the next arrival and processes whichever comes first.

pub mod departure_queue;
pub mod process;

#[cfg(test)]
mod tests;

pub use departure_queue::DepartureQueue;
pub use process::{ArrivalProcess, StayProcess};
