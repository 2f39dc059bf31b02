//! Interpolation helpers and the radial ring layout.

use std::f64::consts::TAU;

use crate::schema::object::Vec3;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// A point on a ring, with the azimuth it was placed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPoint {
    pub position: Vec3,
    /// Radians, measured from +X toward +Z.
    pub angle: f64,
}

impl RingPoint {
    pub fn x(&self) -> f64 {
        self.position[0]
    }

    pub fn z(&self) -> f64 {
        self.position[2]
    }
}

/// `count` points evenly spaced on a horizontal circle at height `y`.
///
/// Point `i` sits at angle `i / count * 2π`. A count of zero is treated
/// as one.
pub fn ring_layout(count: usize, radius: f64, y: f64) -> Vec<RingPoint> {
    let n = count.max(1);
    (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * TAU;
            RingPoint {
                position: [angle.cos() * radius, y, angle.sin() * radius],
                angle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn four_point_ring() {
        let ring = ring_layout(4, 10.0, 2.0);
        let expected = [
            (0.0, [10.0, 2.0, 0.0]),
            (FRAC_PI_2, [0.0, 2.0, 10.0]),
            (PI, [-10.0, 2.0, 0.0]),
            (3.0 * FRAC_PI_2, [0.0, 2.0, -10.0]),
        ];
        assert_eq!(ring.len(), 4);
        for (point, (angle, pos)) in ring.iter().zip(expected) {
            assert_close(point.angle, angle);
            for axis in 0..3 {
                assert_close(point.position[axis], pos[axis]);
            }
        }
    }

    #[test]
    fn zero_count_yields_one_point() {
        let ring = ring_layout(0, 5.0, 0.0);
        assert_eq!(ring.len(), 1);
        assert_close(ring[0].x(), 5.0);
        assert_close(ring[0].z(), 0.0);
    }

    #[test]
    fn points_lie_on_radius() {
        for point in ring_layout(12, 16.0, 0.0) {
            assert_close(point.x().hypot(point.z()), 16.0);
            assert_eq!(point.position[1], 0.0);
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert_close(lerp(220.0, 30.0, 0.0), 220.0);
        assert_close(lerp(220.0, 30.0, 1.0), 30.0);
        assert_close(lerp(6.0, 16.0, 0.5), 11.0);
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.2), 0.0);
        assert_eq!(clamp01(1.4), 1.0);
        assert_eq!(clamp01(0.35), 0.35);
    }
}
