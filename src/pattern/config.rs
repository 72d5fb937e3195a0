//! Pattern parameters with validation.

use crate::error::{PatternError, Result};
use crate::polygon::OffsetStrategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted seed count. Triangulation is quadratic in the seed count.
pub const MAX_SEED_COUNT: usize = 2000;

/// Parameters of one pattern generation run.
///
/// All lengths share the unit of the boundary (millimetres in practice).
/// Build one with [`PatternConfigBuilder`] to get range checks, or use
/// `PatternConfig::default()`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternConfig {
    /// Number of seeds to place, one cell per seed.
    pub seed_count: usize,

    /// Material wall left between neighbouring holes.
    ///
    /// Each cell is shrunk by half of this.
    pub rib_width: f64,

    /// Minimum distance between seeds and the boundary, also used to inset
    /// the clip rectangle and to grow exclusion circles.
    pub edge_margin: f64,

    /// Fillet radius of the hole corners. 0 leaves corners sharp.
    pub corner_radius: f64,

    /// Seed of the sampling PRNG. The same seed and inputs reproduce the
    /// same pattern.
    pub random_seed: u64,

    /// Place seeds more densely around exclusion circles.
    pub density_gradient: bool,

    /// Holes with a smaller area are dropped after offsetting.
    pub min_cell_area: f64,

    /// How cells are shrunk by the rib half-width.
    pub offset_strategy: OffsetStrategy,
}

impl PatternConfig {
    /// Offset distance applied to every cell.
    #[inline]
    pub fn half_rib(&self) -> f64 {
        self.rib_width * 0.5
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfigBuilder::new().config
    }
}

/// Builder for [`PatternConfig`] with range checks on every length.
///
/// # Example
///
/// ```
/// use lightweb::pattern::PatternConfigBuilder;
///
/// let config = PatternConfigBuilder::new()
///     .seed_count(60)
///     .unwrap()
///     .rib_width(2.5)
///     .unwrap()
///     .random_seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.seed_count, 60);
/// assert_eq!(config.half_rib(), 1.25);
/// ```
#[derive(Debug, Clone)]
pub struct PatternConfigBuilder {
    config: PatternConfig,
}

impl PatternConfigBuilder {
    /// Creates a builder with default values
    ///
    /// Defaults:
    /// - seed_count: 40
    /// - rib_width: 3.0
    /// - edge_margin: 5.0
    /// - corner_radius: 1.0
    /// - random_seed: 42
    /// - density_gradient: true
    /// - min_cell_area: 0.5
    /// - offset_strategy: Scale
    pub fn new() -> Self {
        Self {
            config: PatternConfig {
                seed_count: 40,
                rib_width: 3.0,
                edge_margin: 5.0,
                corner_radius: 1.0,
                random_seed: 42,
                density_gradient: true,
                min_cell_area: 0.5,
                offset_strategy: OffsetStrategy::Scale,
            },
        }
    }

    /// Sets the number of seeds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `1 <= count <= 2000`.
    pub fn seed_count(mut self, count: usize) -> Result<Self> {
        if count == 0 || count > MAX_SEED_COUNT {
            return Err(PatternError::InvalidConfig(format!(
                "seed count must be in 1..={} (got {})",
                MAX_SEED_COUNT, count
            )));
        }
        self.config.seed_count = count;
        Ok(self)
    }

    /// Sets the wall thickness between holes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the width is negative or not finite.
    pub fn rib_width(mut self, width: f64) -> Result<Self> {
        self.config.rib_width = non_negative("rib width", width)?;
        Ok(self)
    }

    /// Sets the keep-out distance from the boundary and exclusion circles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the margin is negative or not finite.
    pub fn edge_margin(mut self, margin: f64) -> Result<Self> {
        self.config.edge_margin = non_negative("edge margin", margin)?;
        Ok(self)
    }

    /// Sets the fillet radius; 0 disables rounding.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the radius is negative or not finite.
    pub fn corner_radius(mut self, radius: f64) -> Result<Self> {
        self.config.corner_radius = non_negative("corner radius", radius)?;
        Ok(self)
    }

    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = seed;
        self
    }

    pub fn density_gradient(mut self, enabled: bool) -> Self {
        self.config.density_gradient = enabled;
        self
    }

    /// Sets the smallest hole area kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the area is negative or not finite.
    pub fn min_cell_area(mut self, area: f64) -> Result<Self> {
        self.config.min_cell_area = non_negative("minimum cell area", area)?;
        Ok(self)
    }

    pub fn offset_strategy(mut self, strategy: OffsetStrategy) -> Self {
        self.config.offset_strategy = strategy;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<PatternConfig> {
        Ok(self.config)
    }
}

impl Default for PatternConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(PatternError::InvalidConfig(format!(
            "{} must be a finite value >= 0 (got {})",
            name, value
        )));
    }
    Ok(value)
}
