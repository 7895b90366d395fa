use crate::gui::dial::{ANGLE_STEP, RADIUS_FACTOR, START_ANGLE};
use crate::gui::theme::Palette;
use crate::labels::LabelResolver;
use crate::speed::SpeedLevel;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub struct DialGeometry;

impl DialGeometry {
    pub fn angle(ordinal: usize) -> f64 {
        START_ANGLE + (ordinal as f64 * ANGLE_STEP)
    }

    /// Writes the point at `radius` from `center` for `ordinal` into `out`.
    ///
    /// `out` is a caller-owned scratch buffer. Whatever it held before the call
    /// is overwritten and means nothing.
    pub fn position_for(ordinal: usize, radius: f64, center: Point, out: &mut Point) {
        let angle = Self::angle(ordinal);
        out.x = radius * angle.cos() + center.x;
        out.y = radius * angle.sin() + center.y;
    }
}

/// Outcome of the host's own click handling, run before the dial's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDispatch {
    Handled,
    Unhandled,
}

/// What the dial needs from whatever widget hosts it.
pub trait DialHost {
    fn pre_click(&mut self) -> ClickDispatch {
        ClickDispatch::Unhandled
    }

    fn set_description(&mut self, description: &str);

    fn queue_draw(&mut self);
}

pub struct DialState {
    speed: SpeedLevel,
    radius: f64,
    center: Point,
    scratch: Point,
    palette: Palette,
    description: String,
}

impl DialState {
    pub fn new(palette: Palette) -> Self {
        Self {
            speed: SpeedLevel::default(),
            radius: 0.0,
            center: Point::default(),
            scratch: Point::default(),
            palette,
            description: String::new(),
        }
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        let (w, h) = (width as f64, height as f64);
        self.radius = RADIUS_FACTOR * (w.min(h) / 2.0);
        self.center = Point::new(w / 2.0, h / 2.0);
    }

    /// Returns whether the click was consumed, which is always the case.
    pub fn on_click(&mut self, host: &mut impl DialHost, labels: &impl LabelResolver) -> bool {
        if host.pre_click() == ClickDispatch::Handled {
            return true;
        }

        self.speed = self.speed.advance();
        log::debug!("Speed advanced to {}", self.speed);

        self.describe(host, labels);
        host.queue_draw();
        true
    }

    /// Pushes the current label to the host's accessibility description.
    pub fn describe(&mut self, host: &mut impl DialHost, labels: &impl LabelResolver) {
        self.description.clear();
        self.description.push_str(labels.label_for(self.speed));
        host.set_description(&self.description);
    }

    /// Places `level` at `radius` from the center using the scratch point.
    pub(crate) fn place(&mut self, level: SpeedLevel, radius: f64) -> Point {
        DialGeometry::position_for(level.ordinal(), radius, self.center, &mut self.scratch);
        self.scratch
    }
}
