use super::model::{DialState, Point};
use super::{INDICATOR_OFFSET, INDICATOR_RADIUS_DIVISOR, LABEL_FONT_SIZE, LABEL_OFFSET};
use crate::gui::theme::SECONDARY_NEUTRAL;
use crate::labels::LabelResolver;
use crate::speed::SpeedLevel;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

/// Drawing primitives the dial issues each frame.
pub trait Surface {
    type Error;

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Srgba<f64>,
    ) -> Result<(), Self::Error>;

    /// Selects the face and size used by later text calls.
    fn set_font(&mut self, size: f64) -> Result<(), Self::Error>;

    /// Draws `text` with its bounding box centered on `at`.
    fn fill_text_centered(
        &mut self,
        text: &str,
        at: Point,
        color: Srgba<f64>,
    ) -> Result<(), Self::Error>;
}

impl Surface for &Context {
    type Error = cairo::Error;

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Srgba<f64>,
    ) -> Result<(), cairo::Error> {
        let (r, g, b, a) = color.into_components();
        self.set_source_rgba(r, g, b, a);
        self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        self.fill()
    }

    fn set_font(&mut self, size: f64) -> Result<(), cairo::Error> {
        self.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        self.set_font_size(size);
        Ok(())
    }

    fn fill_text_centered(
        &mut self,
        text: &str,
        at: Point,
        color: Srgba<f64>,
    ) -> Result<(), cairo::Error> {
        let (r, g, b, a) = color.into_components();
        self.set_source_rgba(r, g, b, a);
        let ext = self.text_extents(text)?;
        self.move_to(
            at.x - (ext.width() / 2.0 + ext.x_bearing()),
            at.y - (ext.height() / 2.0 + ext.y_bearing()),
        );
        self.show_text(text)
    }
}

struct DialRenderer<'a, L> {
    labels: &'a L,
}

impl<'a, L: LabelResolver> DialRenderer<'a, L> {
    fn new(labels: &'a L) -> Self {
        Self { labels }
    }

    fn draw<S: Surface>(&self, surface: &mut S, state: &mut DialState) -> Result<(), S::Error> {
        self.draw_disc(surface, state)?;
        self.draw_indicator(surface, state)?;
        self.draw_labels(surface, state)
    }

    fn draw_disc<S: Surface>(&self, surface: &mut S, state: &DialState) -> Result<(), S::Error> {
        let color = state.palette().fill_color_for(state.speed());
        surface.fill_circle(state.center(), state.radius(), color)
    }

    fn draw_indicator<S: Surface>(
        &self,
        surface: &mut S,
        state: &mut DialState,
    ) -> Result<(), S::Error> {
        let (radius, speed) = (state.radius(), state.speed());
        let at = state.place(speed, radius + INDICATOR_OFFSET);
        surface.fill_circle(at, radius / INDICATOR_RADIUS_DIVISOR, SECONDARY_NEUTRAL)
    }

    // every level gets a label, not only the current one
    fn draw_labels<S: Surface>(
        &self,
        surface: &mut S,
        state: &mut DialState,
    ) -> Result<(), S::Error> {
        let radius = state.radius() + LABEL_OFFSET;
        surface.set_font(LABEL_FONT_SIZE)?;
        for level in SpeedLevel::ALL {
            let at = state.place(level, radius);
            let text = self.labels.label_for(level);
            surface.fill_text_centered(text, at, SECONDARY_NEUTRAL)?;
        }
        Ok(())
    }
}

/// Renders the dial. Performs no heap allocation of its own: positions go
/// through the state's scratch point and label text is borrowed.
pub fn draw<S: Surface>(
    surface: &mut S,
    state: &mut DialState,
    labels: &impl LabelResolver,
) -> Result<(), S::Error> {
    DialRenderer::new(labels).draw(surface, state)
}
