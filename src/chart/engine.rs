use super::animation::{AnimationKind, SliceAnimation};
use super::hit::{hit_hole, hit_slice};
use super::model::{Hole, Item, Layout, Slice};
use super::scene::{Region, Shape};
use super::{ChartError, IMPACT_INTENSITY};
use crate::color::{Color, DEFAULT_BACKGROUND};
use crate::config::Configuration;
use crate::events::PointerEvent;
use crate::feedback::ImpactFeedback;
use crate::geometry::{Point, Size};

type HighlightObserver = Box<dyn FnMut(Option<usize>)>;

/// Semi-circular proportional chart: owns the derived slice geometry and the
/// highlight state driven by pointer events.
pub struct SemiCircleChart {
    configuration: Configuration,
    bounds: Size,
    background_color: Option<Color>,
    hole_color: Option<Color>,
    items: Vec<Item>,
    layout: Option<Layout>,
    slices: Vec<Slice>,
    hole: Option<Hole>,
    highlighted_index: Option<usize>,
    observers: Vec<HighlightObserver>,
    feedback: Option<Box<dyn ImpactFeedback>>,
}

impl SemiCircleChart {
    pub fn new(configuration: Configuration, bounds: Size) -> Self {
        Self {
            configuration,
            bounds,
            background_color: None,
            hole_color: None,
            items: Vec::new(),
            layout: None,
            slices: Vec::new(),
            hole: None,
            highlighted_index: None,
            observers: Vec::new(),
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: impl ImpactFeedback + 'static) -> Self {
        self.feedback = Some(Box::new(feedback));
        self
    }

    pub fn on_highlighted_index_change(&mut self, observer: impl FnMut(Option<usize>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the items and recomputes all geometry.
    ///
    /// On error the chart is left empty.
    pub fn draw(&mut self, items: Vec<Item>) -> Result<(), ChartError> {
        self.items = items;
        self.redraw()
    }

    pub fn set_configuration(&mut self, configuration: Configuration) -> Result<(), ChartError> {
        self.configuration = configuration;
        self.redraw_if_needed()
    }

    pub fn set_bounds(&mut self, bounds: Size) -> Result<(), ChartError> {
        self.bounds = bounds;
        self.redraw_if_needed()
    }

    pub fn set_hole_color(&mut self, color: Option<Color>) -> Result<(), ChartError> {
        self.hole_color = color;
        self.redraw_if_needed()
    }

    pub fn set_background_color(&mut self, color: Option<Color>) -> Result<(), ChartError> {
        self.background_color = color;
        self.redraw_if_needed()
    }

    fn redraw_if_needed(&mut self) -> Result<(), ChartError> {
        if self.items.is_empty() {
            return Ok(());
        }
        self.redraw()
    }

    fn redraw(&mut self) -> Result<(), ChartError> {
        self.slices.clear();
        self.hole = None;
        self.layout = None;
        if self.highlighted_index.is_some() {
            self.set_highlighted_index(None);
        }

        if self.items.is_empty() {
            log::debug!("Nothing to draw");
            return Ok(());
        }

        let result = Layout::new(self.bounds, &self.configuration).and_then(|layout| {
            Slice::compute_all(&self.items, &layout).map(|slices| (layout, slices))
        });

        match result {
            Ok((layout, slices)) => {
                log::debug!(
                    "Drew {} slices, radius {:.1} at ({:.1}, {:.1})",
                    slices.len(),
                    layout.radius,
                    layout.center.x,
                    layout.center.y
                );
                self.hole = Some(Hole::from_layout(&layout));
                self.layout = Some(layout);
                self.slices = slices;
                Ok(())
            }
            Err(e) => {
                log::warn!("Rendering empty chart: {}", e);
                Err(e)
            }
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn hole_color(&self) -> Option<Color> {
        self.hole_color
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn hole(&self) -> Option<&Hole> {
        self.hole.as_ref()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    pub fn hit_slice(&self, p: Point) -> Option<usize> {
        let center = self.layout.as_ref()?.center;
        hit_slice(&self.slices, center, p)
    }

    pub fn hit_hole(&self, p: Point) -> bool {
        hit_hole(self.hole.as_ref(), p)
    }

    /// Slice under `p` unless the hole covers it.
    fn target(&self, p: Point) -> Option<usize> {
        if self.hit_hole(p) {
            return None;
        }
        self.hit_slice(p)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerAction {
        match event {
            PointerEvent::Down(p) => match self.target(p) {
                Some(i) => self.highlight(Some(i)),
                None => PointerAction::default(),
            },
            PointerEvent::Move(p) => {
                let target = self.target(p);
                self.highlight(target)
            }
            PointerEvent::Up(_) | PointerEvent::Cancel(_) => self.highlight(None),
        }
    }

    fn highlight(&mut self, target: Option<usize>) -> PointerAction {
        if target == self.highlighted_index {
            return PointerAction::default();
        }

        let mut animations = Vec::with_capacity(2);
        if let Some(previous) = self.highlighted_index {
            animations.extend(self.resize_slice(previous, AnimationKind::Contract));
        }
        if let Some(next) = target {
            animations.extend(self.resize_slice(next, AnimationKind::Expand));
        }

        self.set_highlighted_index(target);
        PointerAction::new(animations)
    }

    fn resize_slice(&mut self, index: usize, kind: AnimationKind) -> Option<SliceAnimation> {
        let layout = self.layout?;
        let to_radius = match kind {
            AnimationKind::Expand => layout.expanded_radius(&self.configuration),
            AnimationKind::Contract => layout.radius,
        };

        let slice = self.slices.get_mut(index)?;
        let from_radius = slice.radius;
        slice.radius = to_radius;
        Some(SliceAnimation::new(index, kind, from_radius, to_radius))
    }

    fn set_highlighted_index(&mut self, index: Option<usize>) {
        log::debug!("Highlight {:?} -> {:?}", self.highlighted_index, index);
        self.highlighted_index = index;

        for observer in &mut self.observers {
            observer(index);
        }

        if index.is_some()
            && self.configuration.impact_feedback_enabled()
            && let Some(feedback) = self.feedback.as_mut()
        {
            feedback.impact_occurred(IMPACT_INTENSITY);
        }
    }

    /// Regions to paint, back to front: slices in order, then the hole.
    pub fn scene(&self) -> Vec<Region> {
        let Some(layout) = self.layout.as_ref() else {
            return Vec::new();
        };

        let stroke = self.background_color.unwrap_or(DEFAULT_BACKGROUND);
        let stroke_width = self.configuration.spacing();

        let slices = self.slices.iter().map(|s| Region {
            shape: Shape::Wedge(s.wedge(layout.center)),
            fill: s.color,
            stroke,
            stroke_width,
        });

        let hole = self.hole.iter().map(|h| Region {
            shape: Shape::HalfDisc(h.half_disc()),
            fill: self.hole_color.unwrap_or(stroke),
            stroke,
            stroke_width,
        });

        slices.chain(hole).collect()
    }
}

/// What a pointer event changed, for the host to act on.
///
/// Empty when the highlighted index did not change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerAction {
    pub animations: Vec<SliceAnimation>,
}

impl PointerAction {
    pub fn new(animations: Vec<SliceAnimation>) -> Self {
        Self { animations }
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
