//! Lattice and scene configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature enabled) and passed to the scene builder.  Every struct
//! has a `Default` that reproduces the MSD demonstration scene, so a config
//! file only needs to name the fields it changes.

use std::fmt;
use std::str::FromStr;

use crate::{MsdError, MsdResult, Timing};

// ── Layout ────────────────────────────────────────────────────────────────────

/// Site arrangement of the lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Layout {
    /// Rectangular `rows × cols` grid with uniform spacing.
    #[default]
    Grid,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Grid => "grid",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = MsdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            other  => Err(MsdError::Config(format!("unsupported layout {other:?}"))),
        }
    }
}

// ── FillPattern ───────────────────────────────────────────────────────────────

/// Which sites hold an item when vacancies are enabled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FillPattern {
    /// Every site is filled (explicit vacancies still apply).
    #[default]
    All,
    /// Sites with even `row + col` are filled.
    Checkerboard,
    /// Each site is filled with probability `fill_fraction`, seeded by `seed`.
    Random,
}

impl FillPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            FillPattern::All          => "all",
            FillPattern::Checkerboard => "checkerboard",
            FillPattern::Random       => "random",
        }
    }
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillPattern {
    type Err = MsdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all"          => Ok(FillPattern::All),
            "checkerboard" => Ok(FillPattern::Checkerboard),
            "random"       => Ok(FillPattern::Random),
            other => Err(MsdError::Config(format!("unknown fill pattern {other:?}"))),
        }
    }
}

// ── LatticeConfig ─────────────────────────────────────────────────────────────

/// Lattice construction parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LatticeConfig {
    pub layout: Layout,
    pub rows: u32,
    pub cols: u32,
    /// Distance between neighbouring sites, in scene units.
    pub qubit_spacing: f32,
    /// When `false`, every site is filled and `fill_pattern` / `vacancies`
    /// are ignored.
    pub use_vacancies: bool,
    pub fill_pattern: FillPattern,
    /// Fill probability for [`FillPattern::Random`].
    pub fill_fraction: f32,
    /// Seed for [`FillPattern::Random`].
    pub seed: u64,
    /// Explicit `[row, col]` sites left empty when `use_vacancies` is set.
    pub vacancies: Vec<[u32; 2]>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            layout:        Layout::Grid,
            rows:          5,
            cols:          17,
            qubit_spacing: 0.7,
            use_vacancies: false,
            fill_pattern:  FillPattern::All,
            fill_fraction: 0.5,
            seed:          0,
            vacancies:     Vec::new(),
        }
    }
}

impl LatticeConfig {
    /// A fully filled `rows × cols` grid.
    pub fn grid(rows: u32, cols: u32, qubit_spacing: f32) -> Self {
        Self { rows, cols, qubit_spacing, ..Self::default() }
    }

    /// Number of sites, `rows * cols`.  Fails when the product does not fit
    /// in a `u32`, since site indices are stored as `u32`.
    pub fn site_count(&self) -> MsdResult<usize> {
        self.rows
            .checked_mul(self.cols)
            .map(|n| n as usize)
            .ok_or_else(|| {
                MsdError::Config(format!(
                    "lattice of {}x{} sites is too large",
                    self.rows, self.cols
                ))
            })
    }

    pub fn validate(&self) -> MsdResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MsdError::Config(format!(
                "lattice must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        self.site_count()?;
        if !self.qubit_spacing.is_finite() || self.qubit_spacing <= 0.0 {
            return Err(MsdError::Config(format!(
                "qubit_spacing must be positive, got {}",
                self.qubit_spacing
            )));
        }
        if self.use_vacancies && self.fill_pattern == FillPattern::Random
            && !(0.0..=1.0).contains(&self.fill_fraction)
        {
            return Err(MsdError::Config(format!(
                "fill_fraction must lie in [0, 1], got {}",
                self.fill_fraction
            )));
        }
        if let Some([r, c]) = self
            .vacancies
            .iter()
            .find(|[r, c]| *r >= self.rows || *c >= self.cols)
        {
            return Err(MsdError::Config(format!(
                "vacancy ({r}, {c}) lies outside the {}x{} lattice",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

// ── Detour geometry ───────────────────────────────────────────────────────────

/// How the perpendicular detour interacts with a column transit leg.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitSkew {
    /// The forward transit is shortened by the detour offset and the return
    /// transit lengthened by the same amount, giving a trapezoidal path.
    /// Matches the arithmetic of the MSD demonstration scene.
    #[default]
    ResidualOffset,
    /// Transit covers exactly `(target - source) * spacing`.
    None,
}

/// Shape parameters shared by every cycle the planner emits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetourConfig {
    /// Perpendicular detour as a fraction of the lattice spacing.
    pub offset_fraction: f32,
    pub transit_skew: TransitSkew,
    /// Absolute tolerance for matching item coordinates to axis values.
    pub match_tolerance: f32,
}

impl Default for DetourConfig {
    fn default() -> Self {
        Self {
            offset_fraction: 0.3,
            transit_skew:    TransitSkew::ResidualOffset,
            match_tolerance: 1e-3,
        }
    }
}

impl DetourConfig {
    pub fn validate(&self) -> MsdResult<()> {
        if !self.offset_fraction.is_finite() || self.offset_fraction <= 0.0 {
            return Err(MsdError::Config(format!(
                "offset_fraction must be positive, got {}",
                self.offset_fraction
            )));
        }
        if !self.match_tolerance.is_finite() || self.match_tolerance <= 0.0 {
            return Err(MsdError::Config(format!(
                "match_tolerance must be positive, got {}",
                self.match_tolerance
            )));
        }
        Ok(())
    }
}

// ── SceneConfig ───────────────────────────────────────────────────────────────

/// Top-level scene configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    pub lattice: LatticeConfig,
    pub timing: Timing,
    pub detour: DetourConfig,
    /// Route every moving item through a transient tweezer.
    pub use_tweezers: bool,
}

impl SceneConfig {
    pub fn validate(&self) -> MsdResult<()> {
        self.lattice.validate()?;
        self.timing.validate()?;
        self.detour.validate()
    }
}
