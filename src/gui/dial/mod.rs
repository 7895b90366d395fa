use std::f64::consts::PI;

pub mod model;
pub mod view;

pub use model::{ClickDispatch, DialGeometry, DialHost, DialState, Point};
pub use view::{Surface, draw};

pub const START_ANGLE: f64 = PI * 9.0 / 8.0;
pub const ANGLE_STEP: f64 = PI / 4.0; // one eighth turn between positions
pub const RADIUS_FACTOR: f64 = 0.8; // dial radius relative to half the short side
pub const INDICATOR_OFFSET: f64 = -35.0; // indicator sits inside the disc edge
pub const LABEL_OFFSET: f64 = 30.0; // labels sit outside the disc edge
pub const INDICATOR_RADIUS_DIVISOR: f64 = 12.0;
pub const LABEL_FONT_SIZE: f64 = 20.0;
