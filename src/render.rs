use crate::chart::{HalfDisc, Region, SemiCircleChart, Shape, Wedge};
use crate::color::Color;
use cairo::{Context, Format, ImageSurface};
use std::f64::consts::PI;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

struct RegionRenderer<'a> {
    region: &'a Region,
}

impl<'a> RegionRenderer<'a> {
    fn new(region: &'a Region) -> Self {
        Self { region }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        self.trace(cr);
        set_source(cr, self.region.fill);
        cr.fill_preserve()?;

        if self.region.stroke_width > 0.0 {
            set_source(cr, self.region.stroke);
            cr.set_line_width(self.region.stroke_width);
            cr.stroke()
        } else {
            cr.new_path();
            Ok(())
        }
    }

    fn trace(&self, cr: &Context) {
        cr.new_path();
        match self.region.shape {
            Shape::Wedge(Wedge {
                center,
                radius,
                start_angle,
                end_angle,
            }) => {
                cr.move_to(center.x, center.y);
                cr.arc(center.x, center.y, radius, start_angle, end_angle);
            }
            Shape::HalfDisc(HalfDisc { center, radius }) => {
                cr.arc(center.x, center.y, radius, PI, 2.0 * PI);
            }
        }
        cr.close_path();
    }
}

fn set_source(cr: &Context, color: Color) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Paints `scene` back to front.
pub fn draw(cr: &Context, scene: &[Region]) -> Result<(), cairo::Error> {
    for region in scene {
        RegionRenderer::new(region).draw(cr)?;
    }
    Ok(())
}

/// Rasterizes the chart into a surface the size of its bounds.
pub fn render_surface(chart: &SemiCircleChart) -> Result<ImageSurface, RenderError> {
    let bounds = chart.bounds();
    let surface = ImageSurface::create(
        Format::ARgb32,
        bounds.width.ceil().max(1.0) as i32,
        bounds.height.ceil().max(1.0) as i32,
    )?;

    {
        let cr = Context::new(&surface)?;
        if let Some(background) = chart.background_color() {
            set_source(&cr, background);
            cr.paint()?;
        }
        draw(&cr, &chart.scene())?;
    }

    Ok(surface)
}

pub fn write_png(chart: &SemiCircleChart, path: &Path) -> Result<(), RenderError> {
    let surface = render_surface(chart)?;
    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Item;
    use crate::config::Configuration;
    use crate::events::PointerEvent;
    use crate::geometry::{Point, Size};

    fn pixel(surface: &mut ImageSurface, p: Point) -> u32 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = p.y as usize * stride + p.x as usize * 4;
        u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }

    fn chart() -> SemiCircleChart {
        let mut chart = SemiCircleChart::new(Configuration::default(), Size::new(200.0, 100.0));
        chart
            .draw(vec![
                Item::new(60.0, "#ff0000".parse().unwrap()).unwrap(),
                Item::new(40.0, "#0000ff".parse().unwrap()).unwrap(),
            ])
            .unwrap();
        chart
    }

    #[test]
    fn test_slices_and_hole_are_painted() {
        let chart = chart();
        let layout = *chart.layout().unwrap();
        let mut surface = render_surface(&chart).unwrap();

        let in_red = layout.center.polar(55.0, chart.slices()[0].mid_angle());
        let in_blue = layout.center.polar(55.0, chart.slices()[1].mid_angle());
        let in_hole = layout.hole_center.offset(0.0, -15.0);

        assert_eq!(pixel(&mut surface, in_red), 0xffff0000);
        assert_eq!(pixel(&mut surface, in_blue), 0xff0000ff);
        assert_eq!(pixel(&mut surface, in_hole), 0xffffffff);
    }

    #[test]
    fn test_highlight_is_painted_larger() {
        let mut chart = chart();
        let layout = *chart.layout().unwrap();
        let mid = chart.slices()[0].mid_angle();
        let beyond = layout.center.polar(layout.radius + 8.0, mid);

        let mut surface = render_surface(&chart).unwrap();
        assert_eq!(pixel(&mut surface, beyond), 0);

        chart.handle_pointer(PointerEvent::Down(layout.center.polar(55.0, mid)));
        let mut surface = render_surface(&chart).unwrap();
        assert_eq!(pixel(&mut surface, beyond), 0xffff0000);
    }
}
