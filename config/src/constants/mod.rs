//! Centralized configuration values shared across the primgen pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used for floating-point comparisons in geometry
/// checks and tests.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Decimal places used when serializing vertex coordinates to the text
/// mesh format.
///
/// # Examples
/// ```
/// use config::constants::COORD_PRECISION;
/// assert_eq!(format!("{:.1$}", 1.0, COORD_PRECISION), "1.000000");
/// ```
pub const COORD_PRECISION: usize = 6;

/// Default longitude divisions for the UV sphere.
pub const DEFAULT_SPHERE_SLICES: u32 = 64;

/// Default latitude divisions for the UV sphere.
pub const DEFAULT_SPHERE_STACKS: u32 = 32;

/// Default UV sphere radius.
pub const DEFAULT_SPHERE_RADIUS: f64 = 1.0;

/// Longitude divisions of the fixed low-resolution reference sphere.
///
/// The low-resolution sphere exists so downstream testbeds can compare
/// edge-graph shortest paths against analytic great-circle distances on
/// a coarse polyhedral approximation.
pub const SPHERE_LOW_SLICES: u32 = 12;

/// Latitude divisions of the fixed low-resolution reference sphere.
pub const SPHERE_LOW_STACKS: u32 = 6;

/// Default torus ring (major) radius.
pub const DEFAULT_TORUS_MAJOR_RADIUS: f64 = 1.4;

/// Default torus tube (minor) radius.
pub const DEFAULT_TORUS_MINOR_RADIUS: f64 = 0.45;

/// Default segment count around the torus ring.
pub const DEFAULT_TORUS_SEGMENTS_MAJOR: u32 = 80;

/// Default segment count around the torus tube.
pub const DEFAULT_TORUS_SEGMENTS_MINOR: u32 = 36;

/// Default half-extent of the saddle grid.
pub const DEFAULT_SADDLE_SIZE: f64 = 1.2;

/// Default saddle grid divisions per axis.
pub const DEFAULT_SADDLE_DIVISIONS: u32 = 60;

/// Default saddle height scale (z = height * (x^2 - y^2)).
pub const DEFAULT_SADDLE_HEIGHT: f64 = 0.6;

/// Default half-extent of the plane grid.
pub const DEFAULT_PLANE_SIZE: f64 = 1.4;

/// Default plane grid divisions per axis.
pub const DEFAULT_PLANE_DIVISIONS: u32 = 64;

/// Immutable snapshot of generator settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Numeric tolerance used for floating-point comparisons.
    pub tolerance: f64,
    /// Decimal places used when serializing coordinates.
    pub coord_precision: usize,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and coordinate precision.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(1.0e-6, 6).expect("valid config");
    /// assert_eq!(cfg.coord_precision, 6);
    /// ```
    pub fn new(tolerance: f64, coord_precision: usize) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if coord_precision == 0 {
            return Err(ConfigError::InvalidPrecision(coord_precision));
        }
        Ok(Self {
            tolerance,
            coord_precision,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            coord_precision: COORD_PRECISION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested coordinate precision is zero.
    InvalidPrecision(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidPrecision(value) => {
                write!(f, "coord_precision must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
