//! Fluent builder for constructing a [`Scene`].

use msd_core::{DetourConfig, SceneClock, SceneConfig, Timing};
use msd_lattice::{Lattice, LatticeBuilder};
use msd_motion::MoveExecutor;
use msd_plan::CyclePlanner;

use crate::{Scene, SceneError, SceneResult};

/// Fluent builder for [`Scene`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                   |
/// |----------------------|-------------------------------------------|
/// | `.lattice(l)`        | Built from `config.lattice`               |
/// | `.timing(t)`         | `config.timing`                           |
/// | `.detour(d)`         | `config.detour`                           |
/// | `.use_tweezers(b)`   | `config.use_tweezers`                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = SceneBuilder::new(SceneConfig::default())
///     .use_tweezers(true)
///     .build()?;
/// scene.run_script(&Script::msd_demo(), &mut NoopObserver)?;
/// ```
pub struct SceneBuilder {
    config:  SceneConfig,
    lattice: Option<Lattice>,
}

impl SceneBuilder {
    pub fn new(config: SceneConfig) -> Self {
        Self { config, lattice: None }
    }

    /// Use a pre-built lattice instead of building one from the config.
    ///
    /// Its dimensions must match `config.lattice`.
    pub fn lattice(mut self, lattice: Lattice) -> Self {
        self.lattice = Some(lattice);
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.config.timing = timing;
        self
    }

    pub fn detour(mut self, detour: DetourConfig) -> Self {
        self.config.detour = detour;
        self
    }

    /// Route moving items through transient tweezers.
    pub fn use_tweezers(mut self, enabled: bool) -> Self {
        self.config.use_tweezers = enabled;
        self
    }

    /// Validate inputs, lay out the lattice, and return a ready-to-run
    /// [`Scene`].
    pub fn build(self) -> SceneResult<Scene> {
        self.config.validate()?;

        let lattice = match self.lattice {
            Some(l) => {
                let (rows, cols) = (self.config.lattice.rows, self.config.lattice.cols);
                if l.rows() != rows || l.cols() != cols {
                    return Err(SceneError::LatticeMismatch {
                        rows,
                        cols,
                        got_rows: l.rows(),
                        got_cols: l.cols(),
                    });
                }
                l
            }
            None => LatticeBuilder::from_config(self.config.lattice.clone()).build()?,
        };

        Ok(Scene {
            clock:      SceneClock::new(),
            planner:    CyclePlanner::new(self.config.detour, self.config.timing),
            executor:   MoveExecutor::new(),
            config:     self.config,
            lattice,
            next_cycle: 0,
        })
    }
}
