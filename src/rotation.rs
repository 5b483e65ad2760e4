use nalgebra as na;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::vector::Vector3;

/// The order in which the three elemental axis rotations are composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum EulerOrder {
    XYZ,
    YZX,
    ZXY,
    XZY,
    YXZ,
    ZYX,
}

impl Default for EulerOrder {
    #[inline]
    fn default() -> Self {
        Self::XYZ
    }
}

/// Euler angles in radians with an explicit rotation order
///
/// A pure data holder; `Matrix3::from_euler` and `Quaternion::from_euler`
/// consume it. The same angle triple composed in a different order is a
/// different rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub order: EulerOrder,
}

impl Euler {
    /// Creates a new Euler rotation with the given order
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Creates a new Euler rotation with the default XYZ order
    #[inline]
    pub fn from_angles(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, EulerOrder::XYZ)
    }
}

impl fmt::Display for Euler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {:?})", self.x, self.y, self.z, self.order)
    }
}

/// Quaternion for representing rotations in 3D space
///
/// Unit length is not enforced; conversions that assume a rotation expect the
/// caller to normalize first when needed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Quaternion {
    /// First imaginary component
    pub x: f32,

    /// Second imaginary component
    pub y: f32,

    /// Third imaginary component
    pub z: f32,

    /// Real component
    pub w: f32,
}

/// Rotation trait for rotation representations
pub trait Rotation {
    /// Rotate a vector by this rotation
    fn rotate_vector(&self, v: Vector3) -> Vector3;

    /// Get the angle in radians of this rotation
    fn angle(&self) -> f32;

    /// Get the axis of this rotation
    fn axis(&self) -> Vector3;
}

impl Quaternion {
    /// Creates a new quaternion
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates an identity quaternion (no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// Creates a quaternion from an axis-angle representation
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let half_angle = angle * 0.5;
        let s = half_angle.sin();
        let c = half_angle.cos();

        // Normalize the axis
        let axis = axis.normalize();

        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: c,
        }
    }

    /// Creates a quaternion from Euler angles, honoring the rotation order
    ///
    /// Equivalent to converting each axis angle on its own and composing the
    /// three rotations in the order's sequence.
    pub fn from_euler(euler: &Euler) -> Self {
        let qx = Self::from_axis_angle(Vector3::unit_x(), euler.x);
        let qy = Self::from_axis_angle(Vector3::unit_y(), euler.y);
        let qz = Self::from_axis_angle(Vector3::unit_z(), euler.z);

        match euler.order {
            EulerOrder::XYZ => qx * qy * qz,
            EulerOrder::YZX => qy * qz * qx,
            EulerOrder::ZXY => qz * qx * qy,
            EulerOrder::XZY => qx * qz * qy,
            EulerOrder::YXZ => qy * qx * qz,
            EulerOrder::ZYX => qz * qy * qx,
        }
    }

    /// Returns the axis and angle of this quaternion rotation
    pub fn to_axis_angle(&self) -> (Vector3, f32) {
        (self.axis(), self.angle())
    }

    /// Returns the conjugate of this quaternion
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Returns the squared length of this quaternion
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns the length of this quaternion
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of this quaternion, degenerate input
    /// normalizes to the identity
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > crate::EPSILON {
            Self {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
                w: self.w / len,
            }
        } else {
            Quaternion::identity()
        }
    }

    /// Normalizes this quaternion in-place
    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Returns the inverse of this quaternion
    #[inline]
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > crate::EPSILON {
            let inv_len_sq = 1.0 / len_sq;
            Self {
                x: -self.x * inv_len_sq,
                y: -self.y * inv_len_sq,
                z: -self.z * inv_len_sq,
                w: self.w * inv_len_sq,
            }
        } else {
            Quaternion::identity()
        }
    }

    /// Computes the dot product of two quaternions
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Spherical linear interpolation between two quaternions
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut cos_half_theta = self.dot(other);

        // If the dot product is negative, slerp won't take the shorter path.
        // Fix by reversing one quaternion.
        let mut other_adj = *other;
        if cos_half_theta < 0.0 {
            other_adj = -*other;
            cos_half_theta = -cos_half_theta;
        }

        // Quaternions are very close - linear interpolation
        if cos_half_theta > 0.999 {
            return Self {
                x: self.x + t * (other_adj.x - self.x),
                y: self.y + t * (other_adj.y - self.y),
                z: self.z + t * (other_adj.z - self.z),
                w: self.w + t * (other_adj.w - self.w),
            }
            .normalize();
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();

        // If sin of half theta is close to zero, use linear interpolation
        if sin_half_theta.abs() < 0.001 {
            return Self {
                x: self.x * 0.5 + other_adj.x * 0.5,
                y: self.y * 0.5 + other_adj.y * 0.5,
                z: self.z * 0.5 + other_adj.z * 0.5,
                w: self.w * 0.5 + other_adj.w * 0.5,
            }
            .normalize();
        }

        let ratio_a = ((1.0 - t) * half_theta).sin() / sin_half_theta;
        let ratio_b = (t * half_theta).sin() / sin_half_theta;

        Self {
            x: self.x * ratio_a + other_adj.x * ratio_b,
            y: self.y * ratio_a + other_adj.y * ratio_b,
            z: self.z * ratio_a + other_adj.z * ratio_b,
            w: self.w * ratio_a + other_adj.w * ratio_b,
        }
    }

    /// Returns the components as an array
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates a quaternion from a slice of exactly four components
    pub fn from_slice(slice: &[f32]) -> crate::Result<Self> {
        if slice.len() != 4 {
            return Err(MathError::MalformedInput(format!(
                "Quaternion expects 4 components, got {}",
                slice.len()
            )));
        }
        Ok(Self::new(slice[0], slice[1], slice[2], slice[3]))
    }

    /// Convert to nalgebra Quaternion
    #[inline]
    pub fn to_nalgebra(&self) -> na::Quaternion<f32> {
        na::Quaternion::new(self.w, self.x, self.y, self.z)
    }

    /// Convert from nalgebra Quaternion
    #[inline]
    pub fn from_nalgebra(q: &na::Quaternion<f32>) -> Self {
        Self {
            x: q.vector()[0],
            y: q.vector()[1],
            z: q.vector()[2],
            w: q.scalar(),
        }
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation for Quaternion {
    /// Rotates a vector by this quaternion
    fn rotate_vector(&self, v: Vector3) -> Vector3 {
        // q * v * q^-1
        let vec_quat = Quaternion::new(v.x, v.y, v.z, 0.0);
        let result = *self * vec_quat * self.conjugate();

        Vector3::new(result.x, result.y, result.z)
    }

    /// Returns the angle in radians of this rotation
    fn angle(&self) -> f32 {
        2.0 * self.w.acos()
    }

    /// Returns the normalized axis of this rotation
    fn axis(&self) -> Vector3 {
        let v = Vector3::new(self.x, self.y, self.z);
        let len = v.length();
        if len > crate::EPSILON {
            v / len
        } else {
            v
        }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

// Quaternion multiplication (Hamilton product)
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl AddAssign for Quaternion {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl SubAssign for Quaternion {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl MulAssign<f32> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
