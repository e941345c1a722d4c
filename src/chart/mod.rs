use std::f64::consts::PI;
use std::time::Duration;
use thiserror::Error;

pub mod animation;
pub mod engine;
pub mod hit;
pub mod model;
pub mod scene;

pub use animation::{AnimationKind, SliceAnimation};
pub use engine::{PointerAction, SemiCircleChart};
pub use model::{Hole, Item, Layout, Slice};
pub use scene::{HalfDisc, Region, Shape, Wedge};

pub const START_ANGLE: f64 = PI; // left end of the upper half-circle
pub const ANGLE_SPAN: f64 = PI;
pub const ANGLE_EPSILON: f64 = 1e-9;
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(70);
pub const IMPACT_INTENSITY: f64 = 0.7;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("item values sum to {total}, nothing to divide the half-circle by")]
    DegenerateInput { total: f64 },
    #[error("item value {value} is not a finite non-negative number")]
    InvalidItem { value: f64 },
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("bounds {width}x{height} leave a non-positive radius ({radius})")]
    DegenerateBounds { width: f64, height: f64, radius: f64 },
}

impl ChartError {
    pub(crate) fn invalid_configuration(
        field: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        Self::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }
}
