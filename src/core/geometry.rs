use glam::Vec2;
use rand::Rng;

pub fn distance(from: Vec2, to: Vec2) -> f32 {
    (to - from).length()
}

/// Angle in radians of the vector pointing from `from` to `to`.
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let diff = to - from;
    diff.y.atan2(diff.x)
}

pub fn velocity_from_angle(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * speed
}

/// Random point offset from `point` by up to `half_range` on each axis.
pub fn scatter<R: Rng + ?Sized>(point: Vec2, half_range: f32, rng: &mut R) -> Vec2 {
    if half_range <= 0.0 {
        return point;
    }
    point
        + Vec2::new(
            rng.random_range(-half_range..half_range),
            rng.random_range(-half_range..half_range),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn heading_follows_atan2_convention() {
        let origin = Vec2::new(10.0, 10.0);
        assert_abs_diff_eq!(heading(origin, Vec2::new(20.0, 10.0)), 0.0);
        assert_abs_diff_eq!(heading(origin, Vec2::new(10.0, 30.0)), FRAC_PI_2);
        assert_abs_diff_eq!(heading(origin, Vec2::new(0.0, 10.0)), PI);
    }

    #[test]
    fn velocity_has_requested_speed() {
        let velocity = velocity_from_angle(0.7, 3.0);
        assert_abs_diff_eq!(velocity.length(), 3.0, epsilon = 1e-5);
        assert_abs_diff_eq!(distance(Vec2::ZERO, velocity), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn scatter_stays_in_the_square() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = Vec2::new(670.0, 82.5);
        for _ in 0..500 {
            let p = scatter(center, 54.25, &mut rng);
            assert!((p.x - center.x).abs() <= 54.25);
            assert!((p.y - center.y).abs() <= 54.25);
        }
    }

    #[test]
    fn scatter_with_empty_range_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(scatter(p, 0.0, &mut rng), p);
    }
}
