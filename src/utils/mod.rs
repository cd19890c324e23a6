//! Common utility functions for trigsync-core
//!
//! - Parameter validation mapped onto program errors
//! - Sample range bounds checking
//!
//! Limits come from [`crate::config::constants`].

pub mod bounds;
pub mod validation;

pub use bounds::{check_sample_range, BoundsError, BoundsResult};
pub use validation::{
    validate_analog_value, validate_cycles, validate_logical_value, validate_period,
    validate_range,
};
