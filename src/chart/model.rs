use super::scene::{HalfDisc, Wedge};
use super::{ANGLE_SPAN, ChartError, START_ANGLE};
use crate::color::Color;
use crate::config::Configuration;
use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// One weighted input to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    value: f64,
    color: Color,
}

impl Item {
    pub fn new(value: f64, color: Color) -> Result<Self, ChartError> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ChartError::InvalidItem { value });
        }
        Ok(Self { value, color })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Deserialize)]
struct RawItem {
    value: f64,
    color: Color,
}

impl TryFrom<RawItem> for Item {
    type Error = ChartError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Self::new(raw.value, raw.color)
    }
}

/// Circle placement derived from the container bounds and configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub center: Point,
    pub radius: f64,
    pub hole_center: Point,
    pub hole_radius: f64,
}

impl Layout {
    pub fn new(bounds: Size, configuration: &Configuration) -> Result<Self, ChartError> {
        let inset = configuration.horizontal_inset();
        let spacing = configuration.spacing();

        let radius = bounds.width / 2.0 - inset + spacing / 2.0;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ChartError::DegenerateBounds {
                width: bounds.width,
                height: bounds.height,
                radius,
            });
        }

        // pushed down so the upper half-circle sits inside the view
        let center = Point::new(
            bounds.width / 2.0,
            bounds.height / 2.0 + bounds.width / 4.0 - inset / 2.0,
        );

        Ok(Self {
            center,
            radius,
            hole_center: center.offset(0.0, -spacing / 2.0),
            hole_radius: radius * configuration.hole_size_multiplier(),
        })
    }

    pub fn expanded_radius(&self, configuration: &Configuration) -> f64 {
        self.radius + configuration.highlight_expansion_size()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Current outer radius, grown while the slice is highlighted.
    pub radius: f64,
    pub color: Color,
}

impl Slice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn wedge(&self, center: Point) -> Wedge {
        Wedge {
            center,
            radius: self.radius,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
        }
    }

    /// Splits the half-circle between `items` proportionally to their values, in order.
    pub fn compute_all(items: &[Item], layout: &Layout) -> Result<Vec<Self>, ChartError> {
        // shares are taken relative to the largest value so the sum cannot overflow
        let largest = items.iter().map(Item::value).fold(0.0, f64::max);
        if !(largest > 0.0) {
            let total = items.iter().map(Item::value).sum();
            return Err(ChartError::DegenerateInput { total });
        }
        let total: f64 = items.iter().map(|item| item.value / largest).sum();

        let mut from = START_ANGLE;
        let slices = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let delta = item.value / largest / total * ANGLE_SPAN;
                let slice = Self {
                    index,
                    start_angle: from,
                    end_angle: from + delta,
                    radius: layout.radius,
                    color: item.color,
                };
                from += delta;
                slice
            })
            .collect();

        Ok(slices)
    }
}

/// The inner cutout, an upper half-disc drawn over the slice centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub center: Point,
    pub radius: f64,
}

impl Hole {
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            center: layout.hole_center,
            radius: layout.hole_radius,
        }
    }

    pub fn half_disc(&self) -> HalfDisc {
        HalfDisc {
            center: self.center,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn items(values: &[f64]) -> Vec<Item> {
        values
            .iter()
            .map(|&v| Item::new(v, Color::new(0.5, 0.5, 0.5, 1.0)).unwrap())
            .collect()
    }

    fn default_layout() -> Layout {
        Layout::new(Size::new(200.0, 100.0), &Configuration::default()).unwrap()
    }

    #[test]
    fn test_layout_geometry() {
        let layout = default_layout();
        assert_eq!(layout.radius, 70.0);
        assert_eq!(layout.center, Point::new(100.0, 84.0));
        assert_eq!(layout.hole_center, Point::new(100.0, 82.0));
        assert_eq!(layout.hole_radius, 35.0);
    }

    #[test]
    fn test_layout_rejects_tiny_bounds() {
        let res = Layout::new(Size::new(40.0, 40.0), &Configuration::default());
        assert!(matches!(res, Err(ChartError::DegenerateBounds { .. })));
    }

    #[test]
    fn test_item_rejects_negative_and_nan() {
        let color = Color::new(0.0, 0.0, 0.0, 1.0);
        assert!(Item::new(-1.0, color).is_err());
        assert!(Item::new(f64::NAN, color).is_err());
        assert!(Item::new(0.0, color).is_ok());
    }

    #[test]
    fn test_slices_follow_input_proportions() {
        let slices = Slice::compute_all(&items(&[60.0, 40.0]), &default_layout()).unwrap();
        assert_eq!(slices.len(), 2);
        assert!((slices[0].start_angle - PI).abs() < EPS);
        assert!((slices[0].end_angle - 1.6 * PI).abs() < EPS);
        assert!((slices[1].start_angle - 1.6 * PI).abs() < EPS);
        assert!((slices[1].end_angle - 2.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_slices_are_contiguous_and_span_half_circle() {
        let values = [3.0, 0.5, 11.0, 0.0, 7.25, 1.0];
        let slices = Slice::compute_all(&items(&values), &default_layout()).unwrap();

        for (i, pair) in slices.windows(2).enumerate() {
            assert_eq!(pair[0].end_angle, pair[1].start_angle, "gap after slice {i}");
            assert_eq!(pair[1].index, i + 1);
        }
        let total_sweep: f64 = slices.iter().map(Slice::sweep).sum();
        assert!((total_sweep - PI).abs() < EPS);
        assert_eq!(slices[3].sweep(), 0.0);
    }

    #[test]
    fn test_zero_total_is_degenerate() {
        let res = Slice::compute_all(&items(&[0.0, 0.0]), &default_layout());
        assert_eq!(res, Err(ChartError::DegenerateInput { total: 0.0 }));

        let res = Slice::compute_all(&[], &default_layout());
        assert!(matches!(res, Err(ChartError::DegenerateInput { .. })));
    }

    #[test]
    fn test_huge_values_still_span_half_circle() {
        let slices =
            Slice::compute_all(&items(&[f64::MAX, f64::MAX, 0.0]), &default_layout()).unwrap();
        let total_sweep: f64 = slices.iter().map(Slice::sweep).sum();
        assert!((total_sweep - PI).abs() < EPS);
        assert!((slices[0].end_angle - 1.5 * PI).abs() < EPS);
        assert_eq!(slices[2].sweep(), 0.0);
    }

    #[test]
    fn test_item_deserialization_validates() {
        let ok: Item = serde_json::from_str(r##"{ "value": 2.5, "color": "#ff0000" }"##).unwrap();
        assert_eq!(ok.value(), 2.5);

        let bad: Result<Item, _> = serde_json::from_str(r##"{ "value": -2, "color": "#ff0000" }"##);
        assert!(bad.is_err());
    }
}
