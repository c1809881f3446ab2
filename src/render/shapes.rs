//! Shape types
//!
//! Each shape is a plain builder-style value. It knows how to write its own
//! element body; indentation and line endings are handled by [`Object::render`].
//!
//! [`Object::render`]: super::object::Object::render

use std::io::Write;

use crate::errors::Result;
use crate::types::Point;

use super::context::RenderContext;
use super::object::RenderObject;
use super::path_props::{PathProps, PathStyled};
use super::svg::escape_text;

// ============================================================================
// Circle
// ============================================================================

/// A `<circle>` element
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    path_props: PathProps,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            path_props: PathProps::default(),
        }
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Negative radii are accepted and written out as-is.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Point::ORIGIN, 1.0)
    }
}

impl PathStyled for Circle {
    fn path_props(&self) -> &PathProps {
        &self.path_props
    }

    fn path_props_mut(&mut self) -> &mut PathProps {
        &mut self.path_props
    }
}

impl RenderObject for Circle {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        if self.radius < 0.0 {
            crate::log::warn!(radius = self.radius, "rendering circle with negative radius");
        }
        write!(
            ctx.out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        )?;
        self.path_props.render_attrs(ctx.out)?;
        write!(ctx.out, " />")?;
        Ok(())
    }
}

// ============================================================================
// Polyline
// ============================================================================

/// A `<polyline>` element; points render in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    path_props: PathProps,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Append a point in place, for building polylines in a loop.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            path_props: PathProps::default(),
        }
    }
}

impl PathStyled for Polyline {
    fn path_props(&self) -> &PathProps {
        &self.path_props
    }

    fn path_props_mut(&mut self) -> &mut PathProps {
        &mut self.path_props
    }
}

impl RenderObject for Polyline {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        write!(ctx.out, "<polyline points=\"")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(ctx.out, " ")?;
            }
            write!(ctx.out, "{}", point)?;
        }
        write!(ctx.out, "\"")?;
        self.path_props.render_attrs(ctx.out)?;
        write!(ctx.out, " />")?;
        Ok(())
    }
}

// ============================================================================
// Text
// ============================================================================

/// A `<text>` element
///
/// `data` is stored exactly as given and escaped only when rendered.
/// Empty `font_family`/`font_weight` strings mean "omit the attribute".
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: String,
    font_weight: String,
    data: String,
    path_props: PathProps,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            offset: Point::ORIGIN,
            font_size: 1,
            font_family: String::new(),
            font_weight: String::new(),
            data: String::new(),
            path_props: PathProps::default(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor point (`x`/`y`)
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Shift relative to the anchor (`dx`/`dy`)
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.font_weight = font_weight.into();
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl PathStyled for Text {
    fn path_props(&self) -> &PathProps {
        &self.path_props
    }

    fn path_props_mut(&mut self) -> &mut PathProps {
        &mut self.path_props
    }
}

impl RenderObject for Text {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        write!(
            ctx.out,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if !self.font_family.is_empty() {
            write!(ctx.out, " font-family=\"{}\"", self.font_family)?;
        }
        if !self.font_weight.is_empty() {
            write!(ctx.out, " font-weight=\"{}\"", self.font_weight)?;
        }
        self.path_props.render_attrs(ctx.out)?;
        write!(ctx.out, ">{}</text>", escape_text(&self.data))?;
        Ok(())
    }
}
