//! Polar → Cartesian mapping using the stamp convention: 0° is 12 o'clock
//! and angles grow clockwise.

use crate::model::Point;

/// Map a polar description to a point, rounded to two decimals.
///
/// The radius may be zero or negative; the result is still well defined.
pub fn polar_to_point(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let rad = (angle_degrees - 90.0).to_radians();
    Point {
        x: round2(center.x + radius * rad.cos()),
        y: round2(center.y + radius * rad.sin()),
    }
}

/// Round to two fractional digits. Negative zero is folded to zero so that
/// serialized output never contains `-0`.
pub fn round2(value: f64) -> f64 {
    let r = (value * 100.0).round() / 100.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Point = Point::new(150.0, 150.0);

    #[test]
    fn zero_degrees_is_straight_up() {
        assert_eq!(polar_to_point(C, 100.0, 0.0), Point::new(150.0, 50.0));
    }

    #[test]
    fn angles_grow_clockwise() {
        assert_eq!(polar_to_point(C, 100.0, 90.0), Point::new(250.0, 150.0));
        assert_eq!(polar_to_point(C, 100.0, 180.0), Point::new(150.0, 250.0));
        assert_eq!(polar_to_point(C, 100.0, 270.0), Point::new(50.0, 150.0));
    }

    #[test]
    fn periodic_in_360() {
        for a in [0.0, 17.5, 30.0, 123.4, 359.0] {
            assert_eq!(polar_to_point(C, 114.0, a), polar_to_point(C, 114.0, a + 360.0));
        }
    }

    #[test]
    fn zero_and_negative_radius() {
        assert_eq!(polar_to_point(C, 0.0, 42.0), C);
        // A negative radius mirrors through the center
        assert_eq!(polar_to_point(C, -10.0, 0.0), Point::new(150.0, 160.0));
    }

    #[test]
    fn rounding_is_two_decimals_without_negative_zero() {
        assert_eq!(round2(16.666_666), 16.67);
        assert_eq!(round2(-0.001), 0.0);
        assert!(round2(-0.001).is_sign_positive());
        assert_eq!(format!("{}", round2(-0.004)), "0");
    }
}
