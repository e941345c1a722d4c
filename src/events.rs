use crate::geometry::Point;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer lifecycle event in the chart's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel(Point),
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, point: Point) -> Self {
        match phase {
            PointerPhase::Down => Self::Down(point),
            PointerPhase::Move => Self::Move(point),
            PointerPhase::Up => Self::Up(point),
            PointerPhase::Cancel => Self::Cancel(point),
        }
    }

    pub fn phase(&self) -> PointerPhase {
        match self {
            Self::Down(_) => PointerPhase::Down,
            Self::Move(_) => PointerPhase::Move,
            Self::Up(_) => PointerPhase::Up,
            Self::Cancel(_) => PointerPhase::Cancel,
        }
    }

    pub fn point(&self) -> Point {
        match *self {
            Self::Down(p) | Self::Move(p) | Self::Up(p) | Self::Cancel(p) => p,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerEventParseError {
    #[error("unknown pointer phase '{0}'")]
    Phase(String),
    #[error("invalid point '{0}', expected 'x,y'")]
    Point(String),
    #[error("'{0}' needs a point, e.g. '{0}:120,40'")]
    MissingPoint(PointerPhase),
}

/// Parses `phase[:x,y]`, e.g. `down:120,40` or `up`. Release and cancel may omit the point.
impl FromStr for PointerEvent {
    type Err = PointerEventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (phase, point) = match s.split_once(':') {
            Some((phase, point)) => (phase, Some(point)),
            None => (s, None),
        };

        let phase = PointerPhase::from_str(phase.trim())
            .map_err(|_| PointerEventParseError::Phase(phase.to_string()))?;

        let point = match point {
            Some(p) => parse_point(p)?,
            None if matches!(phase, PointerPhase::Up | PointerPhase::Cancel) => Point::default(),
            None => return Err(PointerEventParseError::MissingPoint(phase)),
        };

        Ok(Self::new(phase, point))
    }
}

fn parse_point(s: &str) -> Result<Point, PointerEventParseError> {
    let invalid = || PointerEventParseError::Point(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_event_parsing() {
        let cases = vec![
            ("down:10,20", PointerEvent::Down(Point::new(10.0, 20.0))),
            ("Move: 1.5 , -2", PointerEvent::Move(Point::new(1.5, -2.0))),
            ("UP", PointerEvent::Up(Point::default())),
            ("cancel:3,4", PointerEvent::Cancel(Point::new(3.0, 4.0))),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<PointerEvent>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_pointer_event_parse_errors() {
        assert!(matches!(
            "hover:1,2".parse::<PointerEvent>(),
            Err(PointerEventParseError::Phase(_))
        ));
        assert!(matches!(
            "down:1".parse::<PointerEvent>(),
            Err(PointerEventParseError::Point(_))
        ));
        assert_eq!(
            "move".parse::<PointerEvent>(),
            Err(PointerEventParseError::MissingPoint(PointerPhase::Move))
        );
    }

    #[test]
    fn test_phase_and_point_accessors() {
        let e = PointerEvent::new(PointerPhase::Cancel, Point::new(1.0, 2.0));
        assert_eq!(e.phase(), PointerPhase::Cancel);
        assert_eq!(e.point(), Point::new(1.0, 2.0));
        assert_eq!(e.phase().to_string(), "cancel");
    }
}
