//! Element rendering
//!
//! This module is organized into submodules:
//! - `context`: RenderContext carrying the output stream and indentation
//! - `object`: the Object set and its fixed render protocol
//! - `path_props`: fill/stroke paint shared by all shapes
//! - `shapes`: Circle, Polyline, Text
//! - `svg`: text escaping

pub mod context;
pub mod object;
pub mod path_props;
pub mod shapes;
pub mod svg;

// Re-export commonly used items
pub use context::RenderContext;
pub use object::{Object, RenderObject};
pub use path_props::{PathProps, PathStyled};
pub use shapes::{Circle, Polyline, Text};
pub use svg::escape_text;
