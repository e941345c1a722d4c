use super::ANGLE_EPSILON;
use super::model::{Hole, Slice};
use super::scene::{HalfDisc, Wedge};
use crate::geometry::Point;

impl Wedge {
    pub fn contains(&self, p: Point) -> bool {
        if p.distance_to(self.center) > self.radius {
            return false;
        }
        let angle = p.angle_from(self.center);
        angle >= self.start_angle - ANGLE_EPSILON && angle <= self.end_angle + ANGLE_EPSILON
    }
}

impl HalfDisc {
    pub fn contains(&self, p: Point) -> bool {
        p.y <= self.center.y && p.distance_to(self.center) <= self.radius
    }
}

/// First slice (in order) whose wedge, at its current radius, contains `p`.
pub fn hit_slice(slices: &[Slice], center: Point, p: Point) -> Option<usize> {
    let hit = slices
        .iter()
        .find(|s| s.wedge(center).contains(p))
        .map(|s| s.index);
    log::trace!("hit_slice({:?}) -> {:?}", p, hit);
    hit
}

pub fn hit_hole(hole: Option<&Hole>, p: Point) -> bool {
    hole.is_some_and(|h| h.half_disc().contains(p))
}
