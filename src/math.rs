//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a 3x3 matrix embedded in a [`Transform`]. The matrix is specified in
/// column major order, matching the row vector convention of euclid.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

/// Missing components are stored as NaN by conversions; treat them as zero.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Wrap a hue in degrees into `[0..360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative values.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round `value` to the given number of decimal places.
pub fn round_to(value: Component, decimals: i32) -> Component {
    let factor = (10.0 as Component).powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform() {
        const IDENTITY: Transform = transform_3x3(
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        let c = transform(&IDENTITY, Components(0.25, 0.5, 0.75));
        assert_eq!(c, Components(0.25, 0.5, 0.75));
    }

    #[test]
    fn matrix_is_column_major() {
        // | 1 2 0 |   | 1 |   | 5 |
        // | 0 1 0 | x | 2 | = | 2 |
        // | 0 0 1 |   | 3 |   | 3 |
        const M: Transform = transform_3x3(
            1.0, 0.0, 0.0, //
            2.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        assert_eq!(transform(&M, Components(1.0, 2.0, 3.0)), Components(5.0, 2.0, 3.0));
    }

    #[test]
    fn hues_wrap() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(lerp(2.0_f64, 4.0, 0.25), 2.5);
    }
}
