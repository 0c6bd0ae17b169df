// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and SVG-style transforms.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Group transform: a translation followed by an optional rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    pub translate: Point,
    pub rotate_deg: Option<f64>,
}

impl Transform {
    pub const fn translate(x: f64, y: f64) -> Self {
        Self { translate: Point::new(x, y), rotate_deg: None }
    }

    pub const fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = Some(deg);
        self
    }

    /// Map a point in group-local coordinates to surface coordinates.
    pub fn apply(&self, p: Point) -> Point {
        let (x, y) = match self.rotate_deg {
            Some(deg) => {
                let (s, c) = deg.to_radians().sin_cos();
                (p.x * c - p.y * s, p.x * s + p.y * c)
            }
            None => (p.x, p.y),
        };
        Point::new(x + self.translate.x, y + self.translate.y)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}, {})", self.translate.x, self.translate.y)?;
        if let Some(deg) = self.rotate_deg {
            write!(f, "rotate({deg})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_group_maps_local_y_to_surface_x() {
        let t = Transform::translate(60.0, 200.0).rotated(-90.0);
        let p = t.apply(Point::new(0.0, -26.0));
        assert!((p.x - 34.0).abs() < 1e-9);
        assert!((p.y - 200.0).abs() < 1e-9);
        assert_eq!(t.to_string(), "translate(60, 200)rotate(-90)");
    }
}
