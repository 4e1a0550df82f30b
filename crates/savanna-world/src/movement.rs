//! Directed movement with boundary reflection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use savanna_core::{Bounds, Point};
use std::f64::consts::TAU;

/// Outcome of one directed step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub target: Point,
    /// At least one axis was reflected off a boundary
    pub bounced: bool,
}

/// Reflect a coordinate back into `[0, max]`.
///
/// Below zero the value is negated; above `max` it is mirrored back as
/// `max - (value - max)`. Returns the value and whether it was reflected.
pub fn reflect(value: f64, max: f64) -> (f64, bool) {
    let mut value = value;
    let mut reflected = false;
    if value < 0.0 {
        value = -value;
        reflected = true;
    }
    if value > max {
        value = max - (value - max);
        reflected = true;
    }
    (value, reflected)
}

/// Move `step` units from `from` along `(dx, dy)`, reflecting off the bounds
/// and clamping as a final safety net. A zero direction yields `None`.
pub fn directed_step(from: Point, dx: f64, dy: f64, step: f64, bounds: &Bounds) -> Option<Step> {
    let len = dx.hypot(dy);
    if len == 0.0 {
        return None;
    }

    let scale = step / len;
    let (x, bounced_x) = reflect(from.x + dx * scale, bounds.max_x());
    let (y, bounced_y) = reflect(from.y + dy * scale, bounds.max_y());

    Some(Step {
        target: bounds.clamp(Point::new(x, y)),
        bounced: bounced_x || bounced_y,
    })
}

/// Unit vector for a uniformly random heading in `[0, 2π)`
pub fn random_heading(rng: &mut ChaCha8Rng) -> (f64, f64) {
    let angle = rng.gen_range(0.0..TAU);
    (angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn bounds() -> Bounds {
        Bounds::new(10, 10).unwrap()
    }

    #[test]
    fn test_reflect_below_zero() {
        assert_eq!(reflect(-3.0, 9.0), (3.0, true));
    }

    #[test]
    fn test_reflect_above_max() {
        assert_eq!(reflect(10.5, 9.0), (7.5, true));
    }

    #[test]
    fn test_reflect_inside() {
        assert_eq!(reflect(4.25, 9.0), (4.25, false));
        assert_eq!(reflect(0.0, 9.0), (0.0, false));
        assert_eq!(reflect(9.0, 9.0), (9.0, false));
    }

    #[test]
    fn test_step_reflects_off_lower_bound() {
        let step = directed_step(Point::new(0.0, 5.0), -1.0, 0.0, 3.0, &bounds()).unwrap();
        assert_eq!(step.target, Point::new(3.0, 5.0));
        assert!(step.bounced);
    }

    #[test]
    fn test_step_normalizes_direction() {
        let step = directed_step(Point::new(2.0, 2.0), 30.0, 40.0, 1.0, &bounds()).unwrap();
        assert!((step.target.x - 2.6).abs() < 1e-12);
        assert!((step.target.y - 2.8).abs() < 1e-12);
        assert!(!step.bounced);
    }

    #[test]
    fn test_zero_direction_does_not_move() {
        assert!(directed_step(Point::new(2.0, 2.0), 0.0, 0.0, 1.0, &bounds()).is_none());
    }

    #[test]
    fn test_step_clamps_after_double_reflection() {
        // A step longer than the world reflects past the far side; clamping
        // keeps the result inside.
        let narrow = Bounds::new(2, 2).unwrap();
        let step = directed_step(Point::new(0.5, 0.5), 1.0, 0.0, 5.0, &narrow).unwrap();
        assert!(narrow.contains_point(step.target));
        assert!(step.bounced);
    }

    #[test]
    fn test_random_heading_is_unit() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            let (dx, dy) = random_heading(&mut rng);
            assert!((dx.hypot(dy) - 1.0).abs() < 1e-12);
        }
    }
}
