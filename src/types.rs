//! Value types shared by every shape: coordinates and paint colors.

use std::borrow::Cow;
use std::fmt;

use glam::DVec2;

/// A 2D point in user units
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Renders as `x,y`, the pair syntax used by `points` attributes.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// A paint value, written verbatim into `fill`/`stroke` attributes.
///
/// Colors are not validated: anything the caller passes ends up in the output.
/// [`Color::NONE`] explicitly disables painting, which is different from leaving
/// the color unset (unset colors produce no attribute at all).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// `none`: paint nothing
    pub const NONE: Color = Color(Cow::Borrowed("none"));

    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Color(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == "none"
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Color {
    fn from(s: &'static str) -> Self {
        Color(Cow::Borrowed(s))
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color(Cow::Owned(s))
    }
}
