//! Fluent builder for constructing a [`Sim`].

use std::path::Path;

use tracing::debug;

use park_core::{SimConfig, SimRng, UniformSource};
use park_lot::{ParkingLot, SpotLayout, load_layout_csv};

use crate::context::SimContext;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<U>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                           |
/// |-------------------------|-----------------------------------|
/// | `.layout(l)`            | `SpotLayout::reference()`         |
/// | `.layout_csv(path)`     | same                              |
/// | `.uniform_source(u)`    | `SimRng::new(config.seed)`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .layout_csv(Path::new("lot.csv"))?
///     .build()?;
/// let output = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<U: UniformSource = SimRng> {
    config: SimConfig,
    layout: Option<SpotLayout>,
    rng:    U,
}

impl SimBuilder<SimRng> {
    /// Start from `config`; the random source is seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, layout: None, rng }
    }
}

impl<U: UniformSource> SimBuilder<U> {
    /// Use `layout` instead of the reference lot.
    pub fn layout(mut self, layout: SpotLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Load the layout from a CSV file (see [`park_lot::loader`]).
    pub fn layout_csv(self, path: &Path) -> SimResult<Self> {
        let layout = load_layout_csv(path)?;
        Ok(self.layout(layout))
    }

    /// Replace the random source, e.g. with a
    /// [`ScriptedUniform`][park_core::ScriptedUniform] in tests.
    ///
    /// The configured seed is ignored once a source is supplied.
    pub fn uniform_source<V: UniformSource>(self, source: V) -> SimBuilder<V> {
        SimBuilder {
            config: self.config,
            layout: self.layout,
            rng:    source,
        }
    }

    /// Validate the configuration and layout and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<U>> {
        self.config.validate()?;

        let layout = self.layout.unwrap_or_else(SpotLayout::reference);
        if layout.is_empty() {
            return Err(SimError::EmptyLayout);
        }

        debug!(
            spots = layout.len(),
            floors = layout.floor_count(),
            seed = self.config.seed,
            "building simulation"
        );
        let lot = ParkingLot::from_config(layout, &self.config);
        Ok(Sim::new(SimContext::new(self.config, lot, self.rng)))
    }
}
