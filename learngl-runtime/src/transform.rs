use glam::{Mat4, Vec3};

/// Where the quad is displaced to after rotating.
pub const QUAD_OFFSET: Vec3 = Vec3::new(0.5, -0.5, 0.0);

/// The model transform of the spinning quad at `elapsed` seconds.
///
/// Equivalent to `translate(I, QUAD_OFFSET)` followed by `rotate(_, elapsed, Z)`,
/// so vertices are rotated about their local origin first and then translated.
pub fn quad_transform(elapsed: f32) -> Mat4 {
    Mat4::from_translation(QUAD_OFFSET) * Mat4::from_axis_angle(Vec3::Z, elapsed)
}

/// Flatten a matrix for upload as a column-major `mat4` uniform.
pub fn column_major(matrix: &Mat4) -> [f32; 16] {
    matrix.to_cols_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn zero_time_is_pure_translation() {
        assert_eq!(quad_transform(0.0), Mat4::from_translation(QUAD_OFFSET));
    }

    #[test]
    fn transform_is_deterministic() {
        assert_eq!(quad_transform(1.25), quad_transform(1.25));
    }

    #[test]
    fn rotation_happens_before_translation() {
        let transform = quad_transform(FRAC_PI_2);
        let point = transform.transform_point3(Vec3::new(0.5, 0.0, 0.0));

        // (0.5, 0) rotates to (0, 0.5), then moves by (0.5, -0.5)
        assert!(point.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6), "{point}");

        let wrong_order =
            Mat4::from_axis_angle(Vec3::Z, FRAC_PI_2) * Mat4::from_translation(QUAD_OFFSET);
        assert!(!transform.abs_diff_eq(wrong_order, 1e-3));
    }

    #[test]
    fn upload_layout_is_column_major() {
        let cols = column_major(&quad_transform(0.0));
        assert_eq!(&cols[12..16], &[0.5, -0.5, 0.0, 1.0]);
        assert_eq!(&cols[0..4], &[1.0, 0.0, 0.0, 0.0]);
    }
}
