//! The renderable object set and its fixed render protocol

use std::io::Write;

use enum_dispatch::enum_dispatch;

use crate::errors::Result;

use super::context::RenderContext;
use super::shapes::{Circle, Polyline, Text};

/// Writes the body of one element: opening tag, attributes, content and the
/// closing marker. No indentation, no line ending.
#[enum_dispatch]
pub trait RenderObject {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> Result<()>;
}

/// Any primitive a container can own
#[enum_dispatch(RenderObject)]
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Circle,
    Polyline,
    Text,
}

impl Object {
    /// Write one complete element line: indent, body, newline.
    pub fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        ctx.render_indent()?;
        self.render_object(ctx)?;
        writeln!(ctx.out)?;
        Ok(())
    }

    /// Element tag name, mostly for diagnostics
    pub fn tag(&self) -> &'static str {
        match self {
            Object::Circle(_) => "circle",
            Object::Polyline(_) => "polyline",
            Object::Text(_) => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn render_at(obj: &Object, indent: usize) -> String {
        let mut buf = Vec::new();
        obj.render(&mut RenderContext::with_indent(&mut buf, 2, indent))
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn render_wraps_body_with_indent_and_newline() {
        let obj = Object::from(Circle::default());
        assert_eq!(render_at(&obj, 0), "<circle cx=\"0\" cy=\"0\" r=\"1\" />\n");
        assert_eq!(render_at(&obj, 4), "    <circle cx=\"0\" cy=\"0\" r=\"1\" />\n");
    }

    #[test]
    fn shapes_convert_into_objects() {
        let objects: Vec<Object> = vec![
            Circle::default().into(),
            Polyline::new().add_point(Point::new(1.0, 2.0)).into(),
            Text::new().with_data("hi").into(),
        ];
        let tags: Vec<_> = objects.iter().map(Object::tag).collect();
        assert_eq!(tags, ["circle", "polyline", "text"]);
    }

    #[test]
    fn render_object_is_dispatched_per_variant() {
        let obj = Object::from(Text::new().with_data("a<b"));
        let mut buf = Vec::new();
        obj.render_object(&mut RenderContext::new(&mut buf)).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"<text x="0" y="0" dx="0" dy="0" font-size="1">a&lt;b</text>"#
        );
    }
}
