use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle of `self` as seen from `origin`, normalized to `[PI, 3 * PI)`.
    ///
    /// The view's y axis points down, so the upper half of a circle lies in `[PI, 2 * PI]`.
    pub fn angle_from(self, origin: Point) -> f64 {
        let (dx, dy) = (self.x - origin.x, self.y - origin.y);
        (dy.atan2(dx) - PI).rem_euclid(2.0 * PI) + PI
    }

    /// Point at `radius` from `self` in direction `angle`.
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        self.offset(radius * angle.cos(), radius * angle.sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
