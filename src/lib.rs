pub mod vector;
pub mod matrix;
pub mod rotation;
pub mod color;

/// Re-export common types for easier usage
pub use crate::vector::{Vector2, Vector3, Vector4};
pub use crate::matrix::{Matrix2, Matrix3, Matrix4};
pub use crate::rotation::{Euler, EulerOrder, Quaternion, Rotation};
pub use crate::color::{Color, ColorSource};

/// Error types for the math library
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum MathError {
        #[error("Malformed input: {0}")]
        MalformedInput(String),
    }
}

/// Result type for fallible conversions
pub type Result<T> = std::result::Result<T, error::MathError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamps a value to the range [0, 1]
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.max(0.0).min(1.0)
}

/// Linearly interpolates between two values
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}
