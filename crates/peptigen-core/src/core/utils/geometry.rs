use nalgebra::{Rotation3, Unit, Vector3};

pub fn rotation_from_scaled_axis(axis: &Vector3<f64>) -> Rotation3<f64> {
    Rotation3::new(*axis)
}

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle_degrees.to_radians())
}

pub fn rotation_to_align(from: &Vector3<f64>, to: &Vector3<f64>) -> Option<Rotation3<f64>> {
    Rotation3::rotation_between(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn scaled_axis_rotation_angle_is_axis_norm() {
        let axis = Vector3::new(0.5, 0.5, -0.5);
        let rotation = rotation_from_scaled_axis(&axis);
        assert_close(rotation.angle(), axis.norm());
    }

    #[test]
    fn axis_angle_rotation_turns_points_as_expected() {
        let rotation = rotation_from_axis_angle(&Vector3::z(), 90.0);
        let rotated = rotation * Point3::new(1.0, 0.0, 0.0);
        assert_close(rotated.x, 0.0);
        assert_close(rotated.y, 1.0);
        assert_close(rotated.z, 0.0);
    }

    #[test]
    fn rotation_to_align_maps_from_onto_to() {
        let from = Vector3::new(1.0, 0.0, 0.0);
        let to = Vector3::new(0.0, 0.0, 2.0);
        let rotation = rotation_to_align(&from, &to).unwrap();
        let aligned = rotation * from;
        assert_close(aligned.normalize().dot(&to.normalize()), 1.0);
    }
}
