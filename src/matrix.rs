use nalgebra as na;
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::rotation::{Euler, EulerOrder, Quaternion};
use crate::vector::{Vector2, Vector3, Vector4};

/// A 2x2 matrix with column-major storage
///
/// Element (row r, col c) lives at index `c * 2 + r`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix2 {
    pub elements: [f32; 4],
}

/// A 3x3 matrix with column-major storage
///
/// Element (row r, col c) lives at index `c * 3 + r`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3 {
    pub elements: [f32; 9],
}

/// A 4x4 matrix with column-major storage
///
/// Element (row r, col c) lives at index `c * 4 + r`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix4 {
    pub elements: [f32; 16],
}

// === Matrix2 Implementation ===

impl Matrix2 {
    /// Creates a new 2x2 matrix from elements given in row-major reading order
    #[inline]
    pub fn new(m11: f32, m12: f32, m21: f32, m22: f32) -> Self {
        Self {
            elements: [m11, m21, m12, m22],
        }
    }

    /// Creates a new 2x2 identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Creates a new 2x2 zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self {
            elements: [0.0; 4],
        }
    }

    /// Creates a new 2x2 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector2) -> Self {
        Self::new(scale.x, 0.0, 0.0, scale.y)
    }

    /// Creates a new 2x2 rotation matrix
    #[inline]
    pub fn from_rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();

        Self::new(c, -s, s, c)
    }

    /// Creates a 2x2 matrix from the upper-left block of a 3x3 matrix
    #[inline]
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let me = &m.elements;

        Self::new(me[0], me[3], me[1], me[4])
    }

    /// Returns the determinant of the matrix
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [m11, m21, m12, m22] = self.elements;

        m11 * m22 - m12 * m21
    }

    /// Returns the inverse of the matrix
    ///
    /// A matrix whose determinant is zero inverts to the identity matrix.
    pub fn inverse(&self) -> Self {
        let [m11, m21, m12, m22] = self.elements;

        let det = m11 * m22 - m12 * m21;
        if det == 0.0 {
            return Self::identity();
        }
        let inv_det = 1.0 / det;

        Self::new(
            m22 * inv_det,
            -m12 * inv_det,
            -m21 * inv_det,
            m11 * inv_det,
        )
    }

    /// Returns the inverse of `other`, identity if `other` is singular
    #[inline]
    pub fn inverse_of(other: &Self) -> Self {
        other.inverse()
    }

    /// Inverts the matrix in-place
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        let [m11, m21, m12, m22] = self.elements;

        Self::new(m11, m21, m12, m22)
    }

    /// Transposes the matrix in-place
    #[inline]
    pub fn transpose_mut(&mut self) {
        self.elements.swap(1, 2);
    }

    /// Sets the diagonal of the matrix
    #[inline]
    pub fn set_diagonal(&mut self, v: Vector2) {
        self.elements[0] = v.x;
        self.elements[3] = v.y;
    }

    /// Scales each axis column by the matching component of `v`
    #[inline]
    pub fn scale(&mut self, v: Vector2) {
        let te = &mut self.elements;

        te[0] *= v.x;
        te[1] *= v.x;
        te[2] *= v.y;
        te[3] *= v.y;
    }

    /// Sets this matrix to the product `a * b`
    #[inline]
    pub fn set_product(&mut self, a: Self, b: Self) {
        *self = a * b;
    }

    /// Returns the elements as an array in column-major order
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        self.elements
    }

    /// Creates a matrix from a slice of elements in column-major order
    pub fn from_slice(slice: &[f32]) -> crate::Result<Self> {
        if slice.len() != 4 {
            return Err(MathError::MalformedInput(format!(
                "Matrix2 expects 4 elements, got {}",
                slice.len()
            )));
        }
        let mut elements = [0.0; 4];
        elements.copy_from_slice(slice);
        Ok(Self { elements })
    }

    /// Convert to nalgebra Matrix2
    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix2<f32> {
        let [m11, m21, m12, m22] = self.elements;

        na::Matrix2::new(m11, m12, m21, m22)
    }

    /// Convert from nalgebra Matrix2
    #[inline]
    pub fn from_nalgebra(m: &na::Matrix2<f32>) -> Self {
        Self::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
    }
}

impl Default for Matrix2 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let te = &self.elements;

        writeln!(f, "[ {}, {} ]", te[0], te[2])?;
        write!(f, "[ {}, {} ]", te[1], te[3])
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [a11, a21, a12, a22] = self.elements;
        let [b11, b21, b12, b22] = rhs.elements;

        Self::new(
            a11 * b11 + a12 * b21,
            a11 * b12 + a12 * b22,
            a21 * b11 + a22 * b21,
            a21 * b12 + a22 * b22,
        )
    }
}

impl MulAssign for Matrix2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        let [m11, m21, m12, m22] = self.elements;

        Vector2::new(m11 * v.x + m12 * v.y, m21 * v.x + m22 * v.y)
    }
}

impl Mul<f32> for Matrix2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        for e in result.elements.iter_mut() {
            *e *= rhs;
        }
        result
    }
}

impl MulAssign<f32> for Matrix2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Matrix2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        let inv = if rhs != 0.0 { 1.0 / rhs } else { 0.0 };
        self * inv
    }
}

impl DivAssign<f32> for Matrix2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// === Matrix3 Implementation ===

impl Matrix3 {
    /// Creates a new 3x3 matrix from elements given in row-major reading order
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self {
            elements: [m11, m21, m31, m12, m22, m32, m13, m23, m33],
        }
    }

    /// Creates a new 3x3 identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a new 3x3 zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self {
            elements: [0.0; 9],
        }
    }

    /// Creates a new 3x3 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3) -> Self {
        Self::new(scale.x, 0.0, 0.0, 0.0, scale.y, 0.0, 0.0, 0.0, scale.z)
    }

    /// Creates a rotation matrix around the x axis
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();

        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    /// Creates a rotation matrix around the y axis
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();

        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Creates a rotation matrix around the z axis
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();

        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a rotation matrix from Euler angles, honoring the rotation order
    ///
    /// For order O1-O2-O3 the result equals `R_o1 * R_o2 * R_o3` applied to
    /// column vectors. Each order uses its own closed-form element assignment
    /// rather than three matrix multiplications.
    pub fn from_euler(euler: &Euler) -> Self {
        let cx = euler.x.cos();
        let sx = euler.x.sin();
        let cy = euler.y.cos();
        let sy = euler.y.sin();
        let cz = euler.z.cos();
        let sz = euler.z.sin();

        match euler.order {
            EulerOrder::XYZ => Self::new(
                cy * cz,
                -cy * sz,
                sy,
                cx * sz + sx * cz * sy,
                cx * cz - sx * sz * sy,
                -sx * cy,
                sx * sz - cx * cz * sy,
                sx * cz + cx * sz * sy,
                cx * cy,
            ),
            EulerOrder::YXZ => Self::new(
                cy * cz + sy * sz * sx,
                sy * cz * sx - cy * sz,
                cx * sy,
                cx * sz,
                cx * cz,
                -sx,
                cy * sz * sx - sy * cz,
                sy * sz + cy * cz * sx,
                cx * cy,
            ),
            EulerOrder::ZXY => Self::new(
                cy * cz - sy * sz * sx,
                -cx * sz,
                sy * cz + cy * sz * sx,
                cy * sz + sy * cz * sx,
                cx * cz,
                sy * sz - cy * cz * sx,
                -cx * sy,
                sx,
                cx * cy,
            ),
            EulerOrder::ZYX => Self::new(
                cy * cz,
                sx * cz * sy - cx * sz,
                cx * cz * sy + sx * sz,
                cy * sz,
                sx * sz * sy + cx * cz,
                cx * sz * sy - sx * cz,
                -sy,
                sx * cy,
                cx * cy,
            ),
            EulerOrder::YZX => Self::new(
                cy * cz,
                sx * sy - cx * cy * sz,
                sx * cy * sz + cx * sy,
                sz,
                cx * cz,
                -sx * cz,
                -sy * cz,
                cx * sy * sz + sx * cy,
                cx * cy - sx * sy * sz,
            ),
            EulerOrder::XZY => Self::new(
                cy * cz,
                -sz,
                sy * cz,
                cx * cy * sz + sx * sy,
                cx * cz,
                cx * sy * sz - sx * cy,
                sx * cy * sz - cx * sy,
                sx * cz,
                sx * sy * sz + cx * cy,
            ),
        }
    }

    /// Creates a rotation matrix from a quaternion
    ///
    /// Assumes the quaternion represents a rotation; unit length is not
    /// verified.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let xx = q.x * x2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yy = q.y * y2;
        let yz = q.y * z2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self::new(
            1.0 - (yy + zz),
            xy - wz,
            xz + wy,
            xy + wz,
            1.0 - (xx + zz),
            yz - wx,
            xz - wy,
            yz + wx,
            1.0 - (xx + yy),
        )
    }

    /// Creates a 3x3 matrix by embedding a 2x2 matrix in the upper-left block
    #[inline]
    pub fn from_matrix2(m: &Matrix2) -> Self {
        let me = &m.elements;

        Self::new(me[0], me[2], 0.0, me[1], me[3], 0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a 3x3 matrix from the upper-left block of a 4x4 matrix
    #[inline]
    pub fn from_matrix4(m: &Matrix4) -> Self {
        let me = &m.elements;

        Self {
            elements: [
                me[0], me[1], me[2], me[4], me[5], me[6], me[8], me[9], me[10],
            ],
        }
    }

    /// Returns the determinant of the matrix
    pub fn determinant(&self) -> f32 {
        let [m11, m21, m31, m12, m22, m32, m13, m23, m33] = self.elements;

        m11 * (m22 * m33 - m23 * m32)
            + m21 * (m13 * m32 - m12 * m33)
            + m31 * (m12 * m23 - m13 * m22)
    }

    /// Returns the inverse of the matrix
    ///
    /// A matrix whose determinant is zero inverts to the identity matrix.
    pub fn inverse(&self) -> Self {
        let [m11, m21, m31, m12, m22, m32, m13, m23, m33] = self.elements;

        let t11 = m22 * m33 - m23 * m32;
        let t12 = m13 * m32 - m12 * m33;
        let t13 = m12 * m23 - m13 * m22;

        let det = m11 * t11 + m21 * t12 + m31 * t13;
        if det == 0.0 {
            return Self::identity();
        }
        let inv_det = 1.0 / det;

        Self::new(
            t11 * inv_det,
            t12 * inv_det,
            t13 * inv_det,
            (m23 * m31 - m21 * m33) * inv_det,
            (m11 * m33 - m13 * m31) * inv_det,
            (m13 * m21 - m11 * m23) * inv_det,
            (m21 * m32 - m22 * m31) * inv_det,
            (m12 * m31 - m11 * m32) * inv_det,
            (m11 * m22 - m12 * m21) * inv_det,
        )
    }

    /// Returns the inverse of `other`, identity if `other` is singular
    #[inline]
    pub fn inverse_of(other: &Self) -> Self {
        other.inverse()
    }

    /// Inverts the matrix in-place
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Returns the inverse of the rotation/scale block of a 4x4 matrix
    ///
    /// Only the upper-left 3x3 block participates; translation is ignored.
    #[inline]
    pub fn inverse_of_mat4(m: &Matrix4) -> Self {
        Self::from_matrix4(m).inverse()
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        let [m11, m21, m31, m12, m22, m32, m13, m23, m33] = self.elements;

        Self::new(m11, m21, m31, m12, m22, m32, m13, m23, m33)
    }

    /// Transposes the matrix in-place
    #[inline]
    pub fn transpose_mut(&mut self) {
        self.elements.swap(1, 3);
        self.elements.swap(2, 6);
        self.elements.swap(5, 7);
    }

    /// Sets the diagonal of the matrix
    #[inline]
    pub fn set_diagonal(&mut self, v: Vector3) {
        self.elements[0] = v.x;
        self.elements[4] = v.y;
        self.elements[8] = v.z;
    }

    /// Scales each axis column by the matching component of `v`
    #[inline]
    pub fn scale(&mut self, v: Vector3) {
        let te = &mut self.elements;

        te[0] *= v.x;
        te[1] *= v.x;
        te[2] *= v.x;
        te[3] *= v.y;
        te[4] *= v.y;
        te[5] *= v.y;
        te[6] *= v.z;
        te[7] *= v.z;
        te[8] *= v.z;
    }

    /// Sets this matrix to the product `a * b`
    #[inline]
    pub fn set_product(&mut self, a: Self, b: Self) {
        *self = a * b;
    }

    /// Returns the elements as an array in column-major order
    #[inline]
    pub fn to_array(&self) -> [f32; 9] {
        self.elements
    }

    /// Creates a matrix from a slice of elements in column-major order
    pub fn from_slice(slice: &[f32]) -> crate::Result<Self> {
        if slice.len() != 9 {
            return Err(MathError::MalformedInput(format!(
                "Matrix3 expects 9 elements, got {}",
                slice.len()
            )));
        }
        let mut elements = [0.0; 9];
        elements.copy_from_slice(slice);
        Ok(Self { elements })
    }

    /// Convert to nalgebra Matrix3
    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix3<f32> {
        let [m11, m21, m31, m12, m22, m32, m13, m23, m33] = self.elements;

        na::Matrix3::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
    }

    /// Convert from nalgebra Matrix3
    #[inline]
    pub fn from_nalgebra(m: &na::Matrix3<f32>) -> Self {
        Self::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)],
        )
    }
}

impl Default for Matrix3 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let te = &self.elements;

        writeln!(f, "[ {}, {}, {} ]", te[0], te[3], te[6])?;
        writeln!(f, "[ {}, {}, {} ]", te[1], te[4], te[7])?;
        write!(f, "[ {}, {}, {} ]", te[2], te[5], te[8])
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [a11, a21, a31, a12, a22, a32, a13, a23, a33] = self.elements;
        let [b11, b21, b31, b12, b22, b32, b13, b23, b33] = rhs.elements;

        Self::new(
            a11 * b11 + a12 * b21 + a13 * b31,
            a11 * b12 + a12 * b22 + a13 * b32,
            a11 * b13 + a12 * b23 + a13 * b33,
            a21 * b11 + a22 * b21 + a23 * b31,
            a21 * b12 + a22 * b22 + a23 * b32,
            a21 * b13 + a22 * b23 + a23 * b33,
            a31 * b11 + a32 * b21 + a33 * b31,
            a31 * b12 + a32 * b22 + a33 * b32,
            a31 * b13 + a32 * b23 + a33 * b33,
        )
    }
}

impl MulAssign for Matrix3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        let te = &self.elements;

        Vector3::new(
            te[0] * v.x + te[3] * v.y + te[6] * v.z,
            te[1] * v.x + te[4] * v.y + te[7] * v.z,
            te[2] * v.x + te[5] * v.y + te[8] * v.z,
        )
    }
}

impl Mul<f32> for Matrix3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        for e in result.elements.iter_mut() {
            *e *= rhs;
        }
        result
    }
}

impl MulAssign<f32> for Matrix3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Matrix3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        let inv = if rhs != 0.0 { 1.0 / rhs } else { 0.0 };
        self * inv
    }
}

impl DivAssign<f32> for Matrix3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// === Matrix4 Implementation ===

impl Matrix4 {
    /// Creates a new 4x4 matrix from elements given in row-major reading order
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m14: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m24: f32,
        m31: f32,
        m32: f32,
        m33: f32,
        m34: f32,
        m41: f32,
        m42: f32,
        m43: f32,
        m44: f32,
    ) -> Self {
        Self {
            elements: [
                m11, m21, m31, m41, m12, m22, m32, m42, m13, m23, m33, m43, m14, m24, m34, m44,
            ],
        }
    }

    /// Creates a new 4x4 identity matrix
    #[inline]
    pub fn identity() -> Self {
        let mut elements = [0.0; 16];
        elements[0] = 1.0;
        elements[5] = 1.0;
        elements[10] = 1.0;
        elements[15] = 1.0;
        Self { elements }
    }

    /// Creates a new 4x4 zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self {
            elements: [0.0; 16],
        }
    }

    /// Creates a new 4x4 translation matrix
    #[inline]
    pub fn from_translation(translation: Vector3) -> Self {
        let mut result = Self::identity();
        result.elements[12] = translation.x;
        result.elements[13] = translation.y;
        result.elements[14] = translation.z;
        result
    }

    /// Creates a new 4x4 scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3) -> Self {
        let mut result = Self::zero();
        result.elements[0] = scale.x;
        result.elements[5] = scale.y;
        result.elements[10] = scale.z;
        result.elements[15] = 1.0;
        result
    }

    /// Creates a rotation matrix around the x axis
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3::from_rotation_x(angle))
    }

    /// Creates a rotation matrix around the y axis
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3::from_rotation_y(angle))
    }

    /// Creates a rotation matrix around the z axis
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3::from_rotation_z(angle))
    }

    /// Creates a rotation matrix from Euler angles, honoring the rotation order
    #[inline]
    pub fn from_euler(euler: &Euler) -> Self {
        Self::from_matrix3(&Matrix3::from_euler(euler))
    }

    /// Creates a rotation matrix from a quaternion
    #[inline]
    pub fn from_quaternion(q: &Quaternion) -> Self {
        Self::from_matrix3(&Matrix3::from_quaternion(q))
    }

    /// Creates a 4x4 matrix by embedding a 3x3 matrix in the upper-left block
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let me = &m.elements;

        Self {
            elements: [
                me[0], me[1], me[2], 0.0, me[3], me[4], me[5], 0.0, me[6], me[7], me[8], 0.0, 0.0,
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Creates a 4x4 matrix from a 3x3 rotation matrix and a translation
    pub fn from_rotation_translation(rotation: Matrix3, translation: Vector3) -> Self {
        let mut result = Self::from_matrix3(&rotation);
        result.elements[12] = translation.x;
        result.elements[13] = translation.y;
        result.elements[14] = translation.z;
        result
    }

    /// Returns the determinant of the matrix
    pub fn determinant(&self) -> f32 {
        let te = &self.elements;

        let b00 = te[0] * te[5] - te[1] * te[4];
        let b01 = te[0] * te[6] - te[2] * te[4];
        let b02 = te[0] * te[7] - te[3] * te[4];
        let b03 = te[1] * te[6] - te[2] * te[5];
        let b04 = te[1] * te[7] - te[3] * te[5];
        let b05 = te[2] * te[7] - te[3] * te[6];
        let b06 = te[8] * te[13] - te[9] * te[12];
        let b07 = te[8] * te[14] - te[10] * te[12];
        let b08 = te[8] * te[15] - te[11] * te[12];
        let b09 = te[9] * te[14] - te[10] * te[13];
        let b10 = te[9] * te[15] - te[11] * te[13];
        let b11 = te[10] * te[15] - te[11] * te[14];

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Returns the inverse of the matrix
    ///
    /// A matrix whose determinant is zero inverts to the identity matrix.
    pub fn inverse(&self) -> Self {
        let te = &self.elements;

        let a00 = te[0];
        let a01 = te[1];
        let a02 = te[2];
        let a03 = te[3];
        let a10 = te[4];
        let a11 = te[5];
        let a12 = te[6];
        let a13 = te[7];
        let a20 = te[8];
        let a21 = te[9];
        let a22 = te[10];
        let a23 = te[11];
        let a30 = te[12];
        let a31 = te[13];
        let a32 = te[14];
        let a33 = te[15];

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 {
            return Self::identity();
        }
        let inv_det = 1.0 / det;

        Self {
            elements: [
                (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
                (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
                (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
                (a22 * b04 - a21 * b05 - a23 * b03) * inv_det,
                (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
                (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
                (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
                (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
                (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
                (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
                (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
                (a21 * b02 - a20 * b04 - a23 * b00) * inv_det,
                (a11 * b07 - a10 * b09 - a12 * b06) * inv_det,
                (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
                (a31 * b01 - a30 * b03 - a32 * b00) * inv_det,
                (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
            ],
        }
    }

    /// Returns the inverse of `other`, identity if `other` is singular
    #[inline]
    pub fn inverse_of(other: &Self) -> Self {
        other.inverse()
    }

    /// Inverts the matrix in-place
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Returns the transpose of the matrix
    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for c in 0..4 {
            for r in 0..4 {
                result.elements[r * 4 + c] = self.elements[c * 4 + r];
            }
        }
        result
    }

    /// Transposes the matrix in-place
    pub fn transpose_mut(&mut self) {
        self.elements.swap(1, 4);
        self.elements.swap(2, 8);
        self.elements.swap(3, 12);
        self.elements.swap(6, 9);
        self.elements.swap(7, 13);
        self.elements.swap(11, 14);
    }

    /// Sets the diagonal of the matrix
    #[inline]
    pub fn set_diagonal(&mut self, v: Vector4) {
        self.elements[0] = v.x;
        self.elements[5] = v.y;
        self.elements[10] = v.z;
        self.elements[15] = v.w;
    }

    /// Scales the three axis columns by the matching components of `v`
    pub fn scale(&mut self, v: Vector3) {
        let te = &mut self.elements;

        for i in 0..4 {
            te[i] *= v.x;
            te[4 + i] *= v.y;
            te[8 + i] *= v.z;
        }
    }

    /// Sets this matrix to the product `a * b`
    #[inline]
    pub fn set_product(&mut self, a: Self, b: Self) {
        *self = a * b;
    }

    /// Extract the upper-left 3x3 matrix (rotation part)
    #[inline]
    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_matrix4(self)
    }

    /// Extract the translation part of the matrix
    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.elements[12], self.elements[13], self.elements[14])
    }

    /// Multiplies the matrix by a 3D point (as if w=1), dividing by the
    /// resulting w when it is meaningful
    pub fn multiply_point(&self, v: Vector3) -> Vector3 {
        let result = *self * Vector4::from_vector3(v, 1.0);

        if result.w.abs() > crate::EPSILON {
            Vector3::new(
                result.x / result.w,
                result.y / result.w,
                result.z / result.w,
            )
        } else {
            result.xyz()
        }
    }

    /// Multiplies the matrix by a 3D direction vector (as if w=0)
    #[inline]
    pub fn multiply_direction(&self, v: Vector3) -> Vector3 {
        (*self * Vector4::from_vector3(v, 0.0)).xyz()
    }

    /// Returns the elements as an array in column-major order
    #[inline]
    pub fn to_array(&self) -> [f32; 16] {
        self.elements
    }

    /// Creates a matrix from a slice of elements in column-major order
    pub fn from_slice(slice: &[f32]) -> crate::Result<Self> {
        if slice.len() != 16 {
            return Err(MathError::MalformedInput(format!(
                "Matrix4 expects 16 elements, got {}",
                slice.len()
            )));
        }
        let mut elements = [0.0; 16];
        elements.copy_from_slice(slice);
        Ok(Self { elements })
    }

    /// Convert to nalgebra Matrix4
    pub fn to_nalgebra(&self) -> na::Matrix4<f32> {
        let te = &self.elements;

        na::Matrix4::new(
            te[0], te[4], te[8], te[12], te[1], te[5], te[9], te[13], te[2], te[6], te[10], te[14],
            te[3], te[7], te[11], te[15],
        )
    }

    /// Convert from nalgebra Matrix4
    pub fn from_nalgebra(m: &na::Matrix4<f32>) -> Self {
        let mut result = Self::zero();
        for c in 0..4 {
            for r in 0..4 {
                result.elements[c * 4 + r] = m[(r, c)];
            }
        }
        result
    }
}

impl Default for Matrix4 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let te = &self.elements;

        writeln!(f, "[ {}, {}, {}, {} ]", te[0], te[4], te[8], te[12])?;
        writeln!(f, "[ {}, {}, {}, {} ]", te[1], te[5], te[9], te[13])?;
        writeln!(f, "[ {}, {}, {}, {} ]", te[2], te[6], te[10], te[14])?;
        write!(f, "[ {}, {}, {}, {} ]", te[3], te[7], te[11], te[15])
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Self::zero();
        for c in 0..4 {
            for r in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.elements[k * 4 + r] * rhs.elements[c * 4 + k];
                }
                result.elements[c * 4 + r] = sum;
            }
        }
        result
    }
}

impl MulAssign for Matrix4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        let te = &self.elements;

        Vector4::new(
            te[0] * v.x + te[4] * v.y + te[8] * v.z + te[12] * v.w,
            te[1] * v.x + te[5] * v.y + te[9] * v.z + te[13] * v.w,
            te[2] * v.x + te[6] * v.y + te[10] * v.z + te[14] * v.w,
            te[3] * v.x + te[7] * v.y + te[11] * v.z + te[15] * v.w,
        )
    }
}

impl Mul<f32> for Matrix4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        for e in result.elements.iter_mut() {
            *e *= rhs;
        }
        result
    }
}

impl MulAssign<f32> for Matrix4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Matrix4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        let inv = if rhs != 0.0 { 1.0 / rhs } else { 0.0 };
        self * inv
    }
}

impl DivAssign<f32> for Matrix4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
