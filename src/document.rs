//! Containers, drawables and the SVG document
//!
//! - [`ObjectContainer`]: anything that takes ownership of [`Object`]s
//! - [`Drawable`]: a composite figure that knows which objects it is made of
//! - [`Document`]: the container that writes the final SVG

use std::io::Write;

use crate::errors::Result;
use crate::render::{Object, RenderContext};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const SVG_CLOSE: &str = "</svg>";

/// Indentation step for nested elements
pub const INDENT_STEP: usize = 2;

// ============================================================================
// Container protocol
// ============================================================================

/// Something that owns renderable objects.
pub trait ObjectContainer {
    /// Take ownership of `obj`, appending it after everything added so far.
    fn add_object(&mut self, obj: Object);
}

/// `add` for every container, trait objects included.
pub trait ObjectContainerExt: ObjectContainer {
    /// Move any shape into the container.
    fn add(&mut self, obj: impl Into<Object>) {
        self.add_object(obj.into());
    }
}

impl<C: ObjectContainer + ?Sized> ObjectContainerExt for C {}

/// A composite figure that populates a container with primitive objects.
///
/// Drawables never render themselves; they only decide what gets added.
pub trait Drawable {
    fn draw(&self, container: &mut dyn ObjectContainer);
}

/// Draw every figure into `target`, in order.
pub fn draw_picture<I>(drawables: I, target: &mut dyn ObjectContainer)
where
    I: IntoIterator,
    I::Item: AsRef<dyn Drawable>,
{
    for drawable in drawables {
        drawable.as_ref().draw(target);
    }
}

// ============================================================================
// Document
// ============================================================================

/// An SVG document owning its objects in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    /// Write the whole document to `out`.
    ///
    /// Rendering does not touch the document, so calling this repeatedly
    /// produces identical output. Flushing `out` is left to the caller.
    pub fn render(&self, out: &mut dyn Write) -> Result<()> {
        crate::log::debug!(objects = self.objects.len(), "rendering document");

        writeln!(out, "{}", XML_DECLARATION)?;
        writeln!(out, "{}", SVG_OPEN)?;

        let mut root = RenderContext::with_indent(out, INDENT_STEP, 0);
        let mut ctx = root.indented();
        for obj in &self.objects {
            obj.render(&mut ctx)?;
        }

        writeln!(out, "{}", SVG_CLOSE)?;
        Ok(())
    }

    /// Render into a freshly allocated string.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl ObjectContainer for Document {
    fn add_object(&mut self, obj: Object) {
        crate::log::debug!(tag = obj.tag(), index = self.objects.len(), "adding object");
        self.objects.push(obj);
    }
}
