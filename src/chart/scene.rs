//! Declarative output handed to the host for rasterizing.

use crate::color::Color;
use crate::geometry::Point;

/// Pie wedge: from `center` out to `radius`, swept from `start_angle` to `end_angle`
/// (increasing angle, clockwise on screen) and closed back to `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Upper half of a disc, swept from `PI` to `2 * PI` and closed by its diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfDisc {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Wedge(Wedge),
    HalfDisc(HalfDisc),
}

/// A filled and stroked path region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub shape: Shape,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}
