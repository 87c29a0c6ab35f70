//! Fluent builder for constructing a [`Lattice`].

use log::debug;

use msd_core::{FillPattern, FillRng, LatticeConfig, Layout, MsdError};

use crate::{Lattice, LatticeResult};

/// Fluent builder for [`Lattice`].
///
/// # Example
///
/// ```rust
/// use msd_core::FillPattern;
/// use msd_lattice::LatticeBuilder;
///
/// let lattice = LatticeBuilder::new(5, 17, 0.7)
///     .fill_pattern(FillPattern::All)
///     .vacancy(2, 10)
///     .build()
///     .unwrap();
///
/// assert_eq!(lattice.len(), 5 * 17 - 1);
/// assert!(lattice.qubit_at(2, 10).is_none());
/// ```
pub struct LatticeBuilder {
    config: LatticeConfig,
}

impl LatticeBuilder {
    /// A fully filled `rows × cols` grid.
    pub fn new(rows: u32, cols: u32, qubit_spacing: f32) -> Self {
        Self { config: LatticeConfig::grid(rows, cols, qubit_spacing) }
    }

    /// Start from a complete configuration (e.g. loaded from JSON).
    pub fn from_config(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Enable vacancies and choose which sites are filled.
    pub fn fill_pattern(mut self, pattern: FillPattern) -> Self {
        self.config.use_vacancies = true;
        self.config.fill_pattern  = pattern;
        self
    }

    /// Fill probability and seed for [`FillPattern::Random`].
    pub fn random_fill(mut self, fraction: f32, seed: u64) -> Self {
        self.config.fill_fraction = fraction;
        self.config.seed          = seed;
        self.fill_pattern(FillPattern::Random)
    }

    /// Enable vacancies and leave `(row, col)` empty.
    pub fn vacancy(mut self, row: u32, col: u32) -> Self {
        self.config.use_vacancies = true;
        self.config.vacancies.push([row, col]);
        self
    }

    /// Validate the configuration and lay out the sites.
    pub fn build(self) -> LatticeResult<Lattice> {
        let cfg = self.config;
        cfg.validate()?;

        match cfg.layout {
            Layout::Grid => {}
            other => {
                return Err(MsdError::Config(format!("layout {other} is not supported")).into());
            }
        }

        let filled = occupancy(&cfg, cfg.site_count()?);
        let lattice = Lattice::from_occupancy(cfg.rows, cfg.cols, cfg.qubit_spacing, &filled);

        debug!(
            "built {}x{} {} lattice: {} items, {} vacancies",
            cfg.rows,
            cfg.cols,
            cfg.layout,
            lattice.len(),
            filled.len() - lattice.len(),
        );
        Ok(lattice)
    }
}

/// Row-major fill table for `cfg`.
fn occupancy(cfg: &LatticeConfig, sites: usize) -> Vec<bool> {
    if !cfg.use_vacancies {
        return vec![true; sites];
    }

    let mut rng = FillRng::new(cfg.seed);
    let mut filled: Vec<bool> = (0..cfg.rows)
        .flat_map(|row| (0..cfg.cols).map(move |col| (row, col)))
        .map(|(row, col)| match cfg.fill_pattern {
            FillPattern::All          => true,
            FillPattern::Checkerboard => (row + col) % 2 == 0,
            FillPattern::Random       => rng.gen_bool(cfg.fill_fraction as f64),
        })
        .collect();

    for &[row, col] in &cfg.vacancies {
        filled[row as usize * cfg.cols as usize + col as usize] = false;
    }
    filled
}
