//! # Config Crate
//!
//! Centralized configuration constants for the primgen pipeline.
//! All magic numbers and tunable defaults are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, COORD_PRECISION};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1.0e-11; // smaller than EPSILON_TOLERANCE (1e-9)
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! // COORD_PRECISION is the decimal precision of serialized coordinates
//! assert_eq!(format!("{:.1$}", 0.5, COORD_PRECISION), "0.500000");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
