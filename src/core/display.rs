//! Core domain: display scaling from design units to screen pixels.

use bevy::prelude::*;

/// Converts design-unit constants into on-screen pixel values.
///
/// Physics constants go through [`DisplayScale::dsc`], sizes that end up as
/// whole pixels go through [`DisplayScale::sc`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub factor: f32,
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl DisplayScale {
    pub fn new(factor: f32) -> Self {
        // A zero or negative factor would collapse every size to nothing.
        if factor > 0.0 && factor.is_finite() {
            Self { factor }
        } else {
            warn!("Invalid display scale {}, using 1.0", factor);
            Self::default()
        }
    }

    /// Scale a continuous design value (speeds, accelerations).
    pub fn dsc(&self, value: f32) -> f32 {
        value * self.factor
    }

    /// Scale a pixel size, rounded to the nearest whole pixel.
    pub fn sc(&self, value: i32) -> i32 {
        (value as f32 * self.factor).round() as i32
    }
}
