//! A small SVG document model.
//!
//! Build shapes with their builder methods, move them into a [`Document`] and
//! render it to any [`std::io::Write`]:
//!
//! ```
//! use svgdoc::{Circle, Document, ObjectContainerExt, PathStyled, Point};
//!
//! let mut doc = Document::new();
//! doc.add(
//!     Circle::new(Point::new(20.0, 20.0), 10.0)
//!         .with_fill_color("white")
//!         .with_stroke_color("black"),
//! );
//!
//! let svg = doc.to_svg_string()?;
//! assert!(svg.contains(r#"  <circle cx="20" cy="20" r="10" fill="white" stroke="black" />"#));
//! # Ok::<(), svgdoc::RenderError>(())
//! ```

pub mod document;
pub mod errors;
pub mod figures;
pub mod log;
pub mod render;
pub mod types;

pub use document::{Document, Drawable, ObjectContainer, ObjectContainerExt, draw_picture};
pub use errors::{RenderError, Result};
pub use render::{Circle, Object, PathProps, PathStyled, Polyline, RenderContext, RenderObject, Text};
pub use types::{Color, Point};
