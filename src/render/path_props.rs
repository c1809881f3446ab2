//! Fill and stroke paint shared by every shape
//!
//! Shapes embed a [`PathProps`] and implement [`PathStyled`] to expose it; the
//! trait's provided setters then return the concrete shape, so they chain with
//! the shape's own builder methods.

use std::io::Write;

use crate::errors::Result;
use crate::types::Color;

/// Optional `fill` and `stroke` colors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathProps {
    fill: Option<Color>,
    stroke: Option<Color>,
}

impl PathProps {
    pub fn fill(&self) -> Option<&Color> {
        self.fill.as_ref()
    }

    pub fn stroke(&self) -> Option<&Color> {
        self.stroke.as_ref()
    }

    pub fn set_fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    pub fn set_stroke(&mut self, color: Color) {
        self.stroke = Some(color);
    }

    /// Emit ` fill="..."` then ` stroke="..."`, skipping whichever is unset.
    pub fn render_attrs(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{}\"", fill)?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{}\"", stroke)?;
        }
        Ok(())
    }
}

/// Builder-style paint setters for any shape that carries [`PathProps`].
pub trait PathStyled: Sized {
    fn path_props(&self) -> &PathProps;

    fn path_props_mut(&mut self) -> &mut PathProps;

    fn with_fill_color(mut self, color: impl Into<Color>) -> Self {
        self.path_props_mut().set_fill(color.into());
        self
    }

    fn with_stroke_color(mut self, color: impl Into<Color>) -> Self {
        self.path_props_mut().set_stroke(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(props: &PathProps) -> String {
        let mut buf = Vec::new();
        props.render_attrs(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn unset_props_render_nothing() {
        assert_eq!(attrs(&PathProps::default()), "");
    }

    #[test]
    fn fill_comes_before_stroke() {
        let mut props = PathProps::default();
        props.set_stroke("black".into());
        props.set_fill("red".into());
        assert_eq!(attrs(&props), r#" fill="red" stroke="black""#);
    }

    #[test]
    fn stroke_alone() {
        let mut props = PathProps::default();
        props.set_stroke(Color::NONE);
        assert_eq!(attrs(&props), r#" stroke="none""#);
    }

    #[test]
    fn last_write_wins() {
        let mut props = PathProps::default();
        props.set_fill("red".into());
        props.set_fill("blue".into());
        assert_eq!(props.fill().map(Color::as_str), Some("blue"));
        assert_eq!(attrs(&props), r#" fill="blue""#);
    }
}
