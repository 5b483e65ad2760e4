use approx::assert_relative_eq;
use game_math::error::MathError;
use game_math::{
    Euler, EulerOrder, Matrix2, Matrix3, Matrix4, Quaternion, Rotation, Vector2, Vector3, Vector4,
};
use nalgebra as na;
use rand::Rng;
use std::f32::consts::PI;

fn assert_mat3_approx_eq(a: &Matrix3, b: &Matrix3) {
    for i in 0..9 {
        assert_relative_eq!(a.elements[i], b.elements[i], epsilon = 1e-5);
    }
}

fn assert_mat4_approx_eq(a: &Matrix4, b: &Matrix4) {
    for i in 0..16 {
        assert_relative_eq!(a.elements[i], b.elements[i], epsilon = 1e-4);
    }
}

/// Composes the three single-axis rotations in the order's sequence by plain
/// matrix multiplication, the slow reference for `Matrix3::from_euler`
fn euler_reference(order: &str, x: f32, y: f32, z: f32) -> Matrix3 {
    let mut m = Matrix3::identity();
    for axis in order.chars() {
        let r = match axis {
            'x' => Matrix3::from_rotation_x(x),
            'y' => Matrix3::from_rotation_y(y),
            _ => Matrix3::from_rotation_z(z),
        };
        m = m * r;
    }
    m
}

// === Vectors ===

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector3::new(3.0, 3.0, 3.0));

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled, Vector3::new(2.0, 4.0, 6.0));

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0);

    // Cross product
    let cross = v1.cross(&v2);
    assert_eq!(cross.x, v1.y * v2.z - v1.z * v2.y);
    assert_eq!(cross.y, v1.z * v2.x - v1.x * v2.z);
    assert_eq!(cross.z, v1.x * v2.y - v1.y * v2.x);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, 14.0f32.sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
}

#[test]
fn test_vector_scalar_variants() {
    let v = Vector3::new(1.0, 2.0, 3.0);

    assert_eq!(v + 1.5, Vector3::new(2.5, 3.5, 4.5));
    assert_eq!(v - 1.0, Vector3::new(0.0, 1.0, 2.0));

    let mut m = v;
    m += 0.5;
    assert_eq!(m, Vector3::new(1.5, 2.5, 3.5));
    m -= 0.5;
    assert_eq!(m, v);
    m *= 2.0;
    assert_eq!(m, Vector3::new(2.0, 4.0, 6.0));
    m /= 2.0;
    assert_eq!(m, v);
}

#[test]
fn test_vector_componentwise_mul_div() {
    let a = Vector3::new(2.0, 6.0, 8.0);
    let b = Vector3::new(2.0, 3.0, 4.0);

    assert_eq!(a * b, Vector3::new(4.0, 18.0, 32.0));
    assert_eq!(a / b, Vector3::new(1.0, 2.0, 2.0));
}

#[test]
fn test_vector_division_by_zero_yields_zero() {
    let v = Vector3::new(1.0, 2.0, 3.0);

    // Scalar zero divisor
    assert_eq!(v / 0.0, Vector3::new(0.0, 0.0, 0.0));

    // Component zero divisor only zeroes that component
    let d = v / Vector3::new(2.0, 0.0, 3.0);
    assert_eq!(d, Vector3::new(0.5, 0.0, 1.0));

    let mut q = Vector2::new(4.0, 4.0);
    q /= Vector2::new(0.0, 2.0);
    assert_eq!(q, Vector2::new(0.0, 2.0));
}

#[test]
fn test_vector_compose_aliasing() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);

    // set_sum with the receiver as one of its own operands must behave like
    // copy-then-add
    let mut target = a;
    target.set_sum(target, b);
    let mut expected = a;
    expected += b;
    assert_eq!(target, expected);

    let mut target = a;
    target.set_diff(b, target);
    assert_eq!(target, b - a);

    let mut target = a;
    target.set_product(target, target);
    assert_eq!(target, a * a);

    let mut target = a;
    target.set_quotient(target, Vector3::new(2.0, 0.0, 3.0));
    assert_eq!(target, Vector3::new(0.5, 0.0, 1.0));

    let mut target = a;
    target.set_lerp(target, b, 0.5);
    assert_eq!(target, a.lerp(&b, 0.5));
}

#[test]
fn test_vector_min_max_clamp() {
    let a = Vector3::new(1.0, 5.0, -2.0);
    let b = Vector3::new(3.0, 2.0, -1.0);

    assert_eq!(a.min(&b), Vector3::new(1.0, 2.0, -2.0));
    assert_eq!(a.max(&b), Vector3::new(3.0, 5.0, -1.0));

    let clamped = Vector3::new(-0.5, 0.5, 1.5).clamp01();
    assert_eq!(clamped, Vector3::new(0.0, 0.5, 1.0));

    let lo = Vector3::new(0.0, 0.0, 0.0);
    let hi = Vector3::new(2.0, 2.0, 2.0);
    assert_eq!(a.clamp(&lo, &hi), Vector3::new(1.0, 2.0, 0.0));
}

#[test]
fn test_vector_normalize_zero_stays_zero() {
    assert_eq!(Vector3::zero().normalize(), Vector3::zero());
    assert_eq!(Vector2::zero().normalize(), Vector2::zero());
    assert_eq!(Vector4::zero().normalize(), Vector4::zero());

    let mut v = Vector3::zero();
    v.normalize_mut();
    assert_eq!(v, Vector3::zero());
}

#[test]
fn test_vector_from_slice() {
    let v = Vector3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

    let err = Vector3::from_slice(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, MathError::MalformedInput(_)));

    assert!(Vector2::from_slice(&[1.0]).is_err());
    assert!(Vector4::from_slice(&[0.0; 5]).is_err());
}

#[test]
fn test_vector_width_conversions() {
    let v4 = Vector4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Vector3::from_vector4(v4), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(Vector2::from_vector4(v4), Vector2::new(1.0, 2.0));
    assert_eq!(v4.xyz(), Vector3::new(1.0, 2.0, 3.0));

    let v2 = Vector2::new(1.0, 2.0);
    assert_eq!(Vector3::from_vector2(v2), Vector3::new(1.0, 2.0, 0.0));
    assert_eq!(Vector4::from_vector2(v2), Vector4::new(1.0, 2.0, 0.0, 1.0));

    let v3 = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(
        Vector4::from_vector3(v3, 0.5),
        Vector4::new(1.0, 2.0, 3.0, 0.5)
    );

    let arr: [f32; 3] = v3.into();
    assert_eq!(Vector3::from(arr), v3);
}

// === Matrix2 ===

#[test]
fn test_matrix2_determinant_inverse() {
    let m = Matrix2::new(4.0, 7.0, 2.0, 6.0);
    assert_relative_eq!(m.determinant(), 10.0);

    let product = m * m.inverse();
    assert_mat2_identity(&product);

    let double = m.inverse().inverse();
    for i in 0..4 {
        assert_relative_eq!(double.elements[i], m.elements[i], epsilon = 1e-5);
    }
}

fn assert_mat2_identity(m: &Matrix2) {
    assert_relative_eq!(m.elements[0], 1.0, epsilon = 1e-5);
    assert_relative_eq!(m.elements[1], 0.0, epsilon = 1e-5);
    assert_relative_eq!(m.elements[2], 0.0, epsilon = 1e-5);
    assert_relative_eq!(m.elements[3], 1.0, epsilon = 1e-5);
}

#[test]
fn test_matrix2_singular_inverse_is_identity() {
    let m = Matrix2::new(2.0, 4.0, 1.0, 2.0);
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), Matrix2::identity());
}

#[test]
fn test_matrix2_rotation() {
    let m = Matrix2::from_rotation(PI / 2.0);
    let v = m * Vector2::new(1.0, 0.0);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);

    let mut t = m;
    t.transpose_mut();
    assert_eq!(t, m.transpose());
}

// === Matrix3 ===

#[test]
fn test_matrix3_storage_is_column_major() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);

    // (row r, col c) lives at index c*3 + r
    assert_eq!(m.elements[0], 1.0);
    assert_eq!(m.elements[1], 4.0);
    assert_eq!(m.elements[2], 7.0);
    assert_eq!(m.elements[3], 2.0);
    assert_eq!(m.elements[4], 5.0);
    assert_eq!(m.elements[5], 8.0);
    assert_eq!(m.elements[6], 3.0);
    assert_eq!(m.elements[7], 6.0);
    assert_eq!(m.elements[8], 9.0);
}

#[test]
fn test_matrix3_default_is_identity() {
    assert_eq!(Matrix3::default(), Matrix3::identity());
    assert_eq!(Matrix3::identity().determinant(), 1.0);
}

#[test]
fn test_matrix3_determinant_and_inverse() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
    assert_relative_eq!(m.determinant(), 1.0);

    let inv = m.inverse();
    let expected = Matrix3::new(-24.0, 18.0, 5.0, 20.0, -15.0, -4.0, -5.0, 4.0, 1.0);
    assert_mat3_approx_eq(&inv, &expected);

    // Double inverse round trip
    assert_mat3_approx_eq(&inv.inverse(), &m);

    // Product with the inverse is the identity
    assert_mat3_approx_eq(&(m * inv), &Matrix3::identity());
}

#[test]
fn test_matrix3_singular_inverse_is_identity() {
    // Zero row
    let m = Matrix3::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0);
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), Matrix3::identity());
    assert_eq!(Matrix3::inverse_of(&m), Matrix3::identity());

    let mut in_place = m;
    in_place.invert();
    assert_eq!(in_place, Matrix3::identity());

    // Zero column
    let m = Matrix3::new(1.0, 0.0, 3.0, 2.0, 0.0, 6.0, 4.0, 0.0, 9.0);
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), Matrix3::identity());
}

#[test]
fn test_matrix3_random_inverse_roundtrip() {
    let mut rng = rand::thread_rng();
    let mut tested = 0;

    while tested < 25 {
        let mut elements = [0.0f32; 9];
        for e in elements.iter_mut() {
            *e = rng.gen_range(-2.0..2.0);
        }
        let m = Matrix3::from_slice(&elements).unwrap();
        // Skip badly conditioned draws, the property only holds for
        // comfortably non-singular matrices in f32
        if m.determinant().abs() < 1.0 {
            continue;
        }
        tested += 1;

        let round_trip = m.inverse().inverse();
        for i in 0..9 {
            assert_relative_eq!(
                round_trip.elements[i],
                m.elements[i],
                epsilon = 1e-2,
                max_relative = 1e-2
            );
        }
    }
}

#[test]
fn test_matrix3_transpose() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let t = m.transpose();

    assert_eq!(t, Matrix3::new(1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0));
    assert_eq!(t.transpose(), m);

    let mut in_place = m;
    in_place.transpose_mut();
    assert_eq!(in_place, t);
}

#[test]
fn test_matrix3_vector_transform() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let v = Vector3::new(1.0, 2.0, 3.0);
    let mv = m * v;

    assert_eq!(mv, Vector3::new(14.0, 32.0, 50.0));
    assert_eq!(Matrix3::identity() * v, v);
}

#[test]
fn test_matrix3_mul_and_set_product() {
    let a = Matrix3::from_scale(Vector3::new(2.0, 2.0, 2.0));
    let b = Matrix3::from_scale(Vector3::new(3.0, 3.0, 3.0));

    let c = a * b;
    assert_eq!(c, Matrix3::from_scale(Vector3::new(6.0, 6.0, 6.0)));

    let mut m = Matrix3::identity();
    m.set_product(a, b);
    assert_eq!(m, c);

    // Receiver as operand reads a snapshot
    let mut m = a;
    m.set_product(m, b);
    assert_eq!(m, c);

    let mut m = a;
    m *= b;
    assert_eq!(m, c);
}

#[test]
fn test_matrix3_scale_and_diagonal() {
    let mut m = Matrix3::identity();
    m.scale(Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(m, Matrix3::from_scale(Vector3::new(2.0, 3.0, 4.0)));

    // Column scaling is a post-multiplied scale
    let r = Matrix3::from_rotation_z(0.4);
    let mut scaled = r;
    scaled.scale(Vector3::new(2.0, 3.0, 4.0));
    let expected = r * Matrix3::from_scale(Vector3::new(2.0, 3.0, 4.0));
    assert_mat3_approx_eq(&scaled, &expected);

    let mut m = Matrix3::zero();
    m.set_diagonal(Vector3::new(5.0, 6.0, 7.0));
    assert_eq!(m, Matrix3::from_scale(Vector3::new(5.0, 6.0, 7.0)));
}

#[test]
fn test_matrix3_size_conversions() {
    let m2 = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let widened = Matrix3::from_matrix2(&m2);
    assert_eq!(widened, Matrix3::new(1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 0.0, 0.0, 1.0));
    assert_eq!(Matrix2::from_matrix3(&widened), m2);

    let rot = Matrix3::from_rotation_y(0.7);
    let m4 = Matrix4::from_rotation_translation(rot, Vector3::new(9.0, 8.0, 7.0));
    assert_mat3_approx_eq(&Matrix3::from_matrix4(&m4), &rot);
}

#[test]
fn test_matrix3_inverse_of_mat4_ignores_translation() {
    let rot = Matrix3::from_euler(&Euler::from_angles(0.3, 0.5, 0.7));

    let a = Matrix4::from_rotation_translation(rot, Vector3::new(1.0, 2.0, 3.0));
    let b = Matrix4::from_rotation_translation(rot, Vector3::new(-5.0, 0.0, 12.0));

    let inv_a = Matrix3::inverse_of_mat4(&a);
    let inv_b = Matrix3::inverse_of_mat4(&b);

    assert_mat3_approx_eq(&inv_a, &inv_b);
    assert_mat3_approx_eq(&inv_a, &rot.inverse());

    // A rotation inverse is its transpose
    assert_mat3_approx_eq(&inv_a, &rot.transpose());
}

// === Euler orders ===
//
// For every order the closed-form element assignment must match composing the
// three single-axis rotations by plain multiplication.

const EULER_X: f32 = 0.3;
const EULER_Y: f32 = 0.5;
const EULER_Z: f32 = 0.7;

#[test]
fn test_from_euler_xyz() {
    let actual = Matrix3::from_euler(&Euler::new(EULER_X, EULER_Y, EULER_Z, EulerOrder::XYZ));
    let expected = euler_reference("xyz", EULER_X, EULER_Y, EULER_Z);
    assert_mat3_approx_eq(&actual, &expected);
}

#[test]
fn test_from_euler_yzx() {
    let actual = Matrix3::from_euler(&Euler::new(EULER_X, EULER_Y, EULER_Z, EulerOrder::YZX));
    let expected = euler_reference("yzx", EULER_X, EULER_Y, EULER_Z);
    assert_mat3_approx_eq(&actual, &expected);
}

#[test]
fn test_from_euler_zxy() {
    let actual = Matrix3::from_euler(&Euler::new(EULER_X, EULER_Y, EULER_Z, EulerOrder::ZXY));
    let expected = euler_reference("zxy", EULER_X, EULER_Y, EULER_Z);
    assert_mat3_approx_eq(&actual, &expected);
}

#[test]
fn test_from_euler_xzy() {
    let actual = Matrix3::from_euler(&Euler::new(EULER_X, EULER_Y, EULER_Z, EulerOrder::XZY));
    let expected = euler_reference("xzy", EULER_X, EULER_Y, EULER_Z);
    assert_mat3_approx_eq(&actual, &expected);
}

#[test]
fn test_from_euler_yxz() {
    let actual = Matrix3::from_euler(&Euler::new(EULER_X, EULER_Y, EULER_Z, EulerOrder::YXZ));
    let expected = euler_reference("yxz", EULER_X, EULER_Y, EULER_Z);
    assert_mat3_approx_eq(&actual, &expected);
}

#[test]
fn test_from_euler_zyx() {
    let actual = Matrix3::from_euler(&Euler::new(EULER_X, EULER_Y, EULER_Z, EulerOrder::ZYX));
    let expected = euler_reference("zyx", EULER_X, EULER_Y, EULER_Z);
    assert_mat3_approx_eq(&actual, &expected);
}

#[test]
fn test_from_euler_axis_aligned_cases() {
    let orders = [
        EulerOrder::XYZ,
        EulerOrder::YZX,
        EulerOrder::ZXY,
        EulerOrder::XZY,
        EulerOrder::YXZ,
        EulerOrder::ZYX,
    ];

    for order in orders {
        // All angles zero composes to the identity
        let m = Matrix3::from_euler(&Euler::new(0.0, 0.0, 0.0, order));
        assert_mat3_approx_eq(&m, &Matrix3::identity());

        // A single nonzero angle reduces to the matching axis rotation
        // regardless of order
        let m = Matrix3::from_euler(&Euler::new(0.4, 0.0, 0.0, order));
        assert_mat3_approx_eq(&m, &Matrix3::from_rotation_x(0.4));

        let m = Matrix3::from_euler(&Euler::new(0.0, 0.4, 0.0, order));
        assert_mat3_approx_eq(&m, &Matrix3::from_rotation_y(0.4));

        let m = Matrix3::from_euler(&Euler::new(0.0, 0.0, 0.4, order));
        assert_mat3_approx_eq(&m, &Matrix3::from_rotation_z(0.4));
    }
}

#[test]
fn test_euler_defaults() {
    assert_eq!(EulerOrder::default(), EulerOrder::XYZ);
    assert_eq!(Euler::from_angles(0.1, 0.2, 0.3).order, EulerOrder::XYZ);
    assert_eq!(Euler::default().order, EulerOrder::XYZ);
}

// === Quaternions ===

#[test]
fn test_quaternion_operations() {
    // Create a quaternion from axis-angle
    let axis = Vector3::new(0.0, 1.0, 0.0);
    let angle = PI / 2.0;
    let q = Quaternion::from_axis_angle(axis, angle);

    // Normalize
    let q_norm = q.normalize();
    assert_relative_eq!(q_norm.length(), 1.0);

    // Rotate a vector: 90 degrees around the y axis sends +x to -z
    let rotated = q.rotate_vector(Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-5);

    // Conjugate
    let q_conj = q.conjugate();
    assert_eq!(q_conj.w, q.w);
    assert_eq!(q_conj.x, -q.x);
    assert_eq!(q_conj.y, -q.y);
    assert_eq!(q_conj.z, -q.z);

    // Inverse of a unit quaternion equals the conjugate
    let q_inv = q_norm.inverse();
    assert_relative_eq!(q_inv.w, q_norm.w);
    assert_relative_eq!(q_inv.x, -q_norm.x);

    // Composition of rotations
    let q1 = Quaternion::from_axis_angle(Vector3::unit_x(), PI / 4.0);
    let q2 = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 4.0);
    let q3 = q2 * q1;

    let v = Vector3::new(0.0, 0.0, 1.0);
    let rotated_composed = q3.rotate_vector(v);
    let rotated_sequential = q2.rotate_vector(q1.rotate_vector(v));

    assert_relative_eq!(rotated_composed.x, rotated_sequential.x, epsilon = 1e-5);
    assert_relative_eq!(rotated_composed.y, rotated_sequential.y, epsilon = 1e-5);
    assert_relative_eq!(rotated_composed.z, rotated_sequential.z, epsilon = 1e-5);
}

#[test]
fn test_from_quaternion_identity_and_axes() {
    let m = Matrix3::from_quaternion(&Quaternion::identity());
    assert_mat3_approx_eq(&m, &Matrix3::identity());

    let q = Quaternion::from_axis_angle(Vector3::unit_x(), PI / 2.0);
    assert_mat3_approx_eq(
        &Matrix3::from_quaternion(&q),
        &Matrix3::from_rotation_x(PI / 2.0),
    );

    let q = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 2.0);
    assert_mat3_approx_eq(
        &Matrix3::from_quaternion(&q),
        &Matrix3::from_rotation_y(PI / 2.0),
    );

    let q = Quaternion::from_axis_angle(Vector3::unit_z(), PI / 2.0);
    assert_mat3_approx_eq(
        &Matrix3::from_quaternion(&q),
        &Matrix3::from_rotation_z(PI / 2.0),
    );
}

#[test]
fn test_quaternion_matrix_roundtrip_against_reference() {
    let cases = [
        Quaternion::identity(),
        Quaternion::from_axis_angle(Vector3::unit_x(), PI / 2.0),
        Quaternion::from_axis_angle(Vector3::unit_y(), PI / 2.0),
        Quaternion::from_axis_angle(Vector3::unit_z(), PI / 2.0),
        Quaternion::from_euler(&Euler::from_angles(0.3, 0.5, 0.7)),
    ];

    for q in cases {
        let m = Matrix3::from_quaternion(&q);

        // Reconstruct through nalgebra as the reference algorithm
        let rotation = na::Rotation3::from_matrix_unchecked(m.to_nalgebra());
        let reconstructed = na::UnitQuaternion::from_rotation_matrix(&rotation);

        // q and -q encode the same rotation, compare up to sign
        let dot = reconstructed.coords.dot(&q.to_nalgebra().coords);
        assert_relative_eq!(dot.abs(), 1.0, epsilon = 1e-4);
    }
}

#[test]
fn test_quaternion_euler_consistency() {
    let orders = [
        EulerOrder::XYZ,
        EulerOrder::YZX,
        EulerOrder::ZXY,
        EulerOrder::XZY,
        EulerOrder::YXZ,
        EulerOrder::ZYX,
    ];

    for order in orders {
        let euler = Euler::new(0.3, 0.5, 0.7, order);
        let from_quat = Matrix3::from_quaternion(&Quaternion::from_euler(&euler));
        let from_euler = Matrix3::from_euler(&euler);
        assert_mat3_approx_eq(&from_quat, &from_euler);
    }
}

#[test]
fn test_quaternion_slerp_endpoints() {
    let a = Quaternion::from_axis_angle(Vector3::unit_y(), 0.0);
    let b = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 2.0);

    let start = a.slerp(&b, 0.0);
    assert_relative_eq!(start.dot(&a).abs(), 1.0, epsilon = 1e-5);

    let end = a.slerp(&b, 1.0);
    assert_relative_eq!(end.dot(&b).abs(), 1.0, epsilon = 1e-5);

    // Halfway is the quarter rotation
    let mid = a.slerp(&b, 0.5);
    let expected = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 4.0);
    assert_relative_eq!(mid.dot(&expected).abs(), 1.0, epsilon = 1e-5);
}

#[test]
fn test_quaternion_degenerate_normalize() {
    let q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(q.normalize(), Quaternion::identity());
    assert_eq!(q.inverse(), Quaternion::identity());
}

// === Matrix4 ===

#[test]
fn test_matrix4_translation_and_points() {
    let t = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));

    assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(
        t.multiply_point(Vector3::new(1.0, 1.0, 1.0)),
        Vector3::new(2.0, 3.0, 4.0)
    );

    // Directions ignore translation
    assert_eq!(
        t.multiply_direction(Vector3::new(1.0, 1.0, 1.0)),
        Vector3::new(1.0, 1.0, 1.0)
    );
}

#[test]
fn test_matrix4_determinant_and_inverse() {
    let scale = Matrix4::from_scale(Vector3::new(2.0, 3.0, 4.0));
    assert_relative_eq!(scale.determinant(), 24.0);

    let rot = Matrix3::from_euler(&Euler::from_angles(0.3, 0.5, 0.7));
    let m = Matrix4::from_rotation_translation(rot, Vector3::new(1.0, -2.0, 3.0));

    assert_mat4_approx_eq(&(m * m.inverse()), &Matrix4::identity());
    assert_mat4_approx_eq(&m.inverse().inverse(), &m);
}

#[test]
fn test_matrix4_singular_inverse_is_identity() {
    let m = Matrix4::zero();
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), Matrix4::identity());
    assert_eq!(Matrix4::inverse_of(&m), Matrix4::identity());

    let mut in_place = m;
    in_place.invert();
    assert_eq!(in_place, Matrix4::identity());
}

#[test]
fn test_matrix4_transpose() {
    let rot = Matrix3::from_euler(&Euler::from_angles(0.3, 0.5, 0.7));
    let m = Matrix4::from_rotation_translation(rot, Vector3::new(1.0, 2.0, 3.0));

    let t = m.transpose();
    assert_mat4_approx_eq(&t.transpose(), &m);

    let mut in_place = m;
    in_place.transpose_mut();
    assert_eq!(in_place, t);
}

#[test]
fn test_matrix4_rotation_constructors() {
    let e = Euler::from_angles(0.3, 0.5, 0.7);
    let embedded = Matrix4::from_matrix3(&Matrix3::from_euler(&e));
    assert_eq!(Matrix4::from_euler(&e), embedded);

    let q = Quaternion::from_euler(&e);
    assert_eq!(
        Matrix4::from_quaternion(&q),
        Matrix4::from_matrix3(&Matrix3::from_quaternion(&q))
    );

    assert_mat4_approx_eq(
        &Matrix4::from_rotation_x(0.4),
        &Matrix4::from_matrix3(&Matrix3::from_rotation_x(0.4)),
    );

    // Embedding fills the remainder from the identity
    let m = Matrix4::from_matrix3(&Matrix3::identity());
    assert_eq!(m, Matrix4::identity());
}

#[test]
fn test_matrix4_from_slice() {
    let identity = Matrix4::from_slice(&Matrix4::identity().to_array()).unwrap();
    assert_eq!(identity, Matrix4::identity());

    assert!(Matrix4::from_slice(&[0.0; 15]).is_err());
    assert!(Matrix3::from_slice(&[0.0; 8]).is_err());
    assert!(Matrix2::from_slice(&[0.0; 3]).is_err());
}

// === Equality and display ===

#[test]
fn test_equality_forms_agree() {
    let a = Vector3::new(0.1 + 0.2, 1.0, -0.0);
    let b = Vector3::new(0.1 + 0.2, 1.0, -0.0);

    // Instance form and free two-argument form are the same implementation
    assert!(a == b);
    assert!(PartialEq::eq(&a, &b));
    assert!(b == a);
    assert!(a == a);

    let m = Matrix3::from_euler(&Euler::from_angles(0.3, 0.5, 0.7));
    assert!(m == m);
    assert!(PartialEq::eq(&m, &m));

    // Exact comparison, no tolerance
    let close = Vector3::new(0.1 + 0.2, 1.0, 0.0);
    let expected = Vector3::new(0.3, 1.0, 0.0);
    assert_eq!(close == expected, (0.1f32 + 0.2) == 0.3f32);
}

#[test]
fn test_display_formats() {
    assert_eq!(format!("{}", Vector3::new(1.0, 2.5, -3.0)), "(1, 2.5, -3)");
    assert_eq!(format!("{}", Vector2::new(0.5, 0.25)), "(0.5, 0.25)");

    let rendered = format!("{}", Matrix3::identity());
    assert_eq!(rendered, "[ 1, 0, 0 ]\n[ 0, 1, 0 ]\n[ 0, 0, 1 ]");

    assert_eq!(
        format!("{}", Euler::from_angles(0.0, 0.0, 0.0)),
        "(0, 0, 0, XYZ)"
    );
}

#[test]
fn test_scalar_helpers() {
    assert_eq!(game_math::clamp01(-0.5), 0.0);
    assert_eq!(game_math::clamp01(0.5), 0.5);
    assert_eq!(game_math::clamp01(1.5), 1.0);

    assert_relative_eq!(game_math::to_radians(180.0), PI);
    assert_relative_eq!(game_math::to_degrees(PI), 180.0);
    assert_relative_eq!(game_math::lerp(2.0, 4.0, 0.5), 3.0);
}

#[test]
fn test_nalgebra_interop() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(Vector3::from_nalgebra(&v.to_nalgebra()), v);

    let m = Matrix3::from_euler(&Euler::from_angles(0.3, 0.5, 0.7));
    assert_mat3_approx_eq(&Matrix3::from_nalgebra(&m.to_nalgebra()), &m);

    let m = Matrix4::from_rotation_translation(
        Matrix3::from_rotation_y(0.5),
        Vector3::new(1.0, 2.0, 3.0),
    );
    assert_mat4_approx_eq(&Matrix4::from_nalgebra(&m.to_nalgebra()), &m);

    let q = Quaternion::from_euler(&Euler::from_angles(0.3, 0.5, 0.7));
    assert_eq!(Quaternion::from_nalgebra(&q.to_nalgebra()), q);
}
