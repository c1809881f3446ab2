//! Rendering context - where output goes and how deep we are

use std::io::Write;

use crate::errors::Result;

/// Output stream plus indentation for one render pass.
///
/// A context never changes its own indentation; nested levels get a fresh
/// context from [`RenderContext::indented`] that reborrows the same stream.
pub struct RenderContext<'a> {
    pub out: &'a mut dyn Write,
    pub indent_step: usize,
    pub indent: usize,
}

impl<'a> RenderContext<'a> {
    /// A root context with no indentation step.
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self::with_indent(out, 0, 0)
    }

    pub fn with_indent(out: &'a mut dyn Write, indent_step: usize, indent: usize) -> Self {
        Self {
            out,
            indent_step,
            indent,
        }
    }

    /// Context for the next nesting level: same stream, `indent + indent_step`.
    pub fn indented(&mut self) -> RenderContext<'_> {
        RenderContext {
            out: &mut *self.out,
            indent_step: self.indent_step,
            indent: self.indent + self.indent_step,
        }
    }

    /// Write `indent` spaces.
    pub fn render_indent(&mut self) -> Result<()> {
        write!(self.out, "{:width$}", "", width = self.indent)?;
        Ok(())
    }
}
