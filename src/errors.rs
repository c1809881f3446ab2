//! Error types for document rendering
//!
//! Shapes never validate their inputs, so the only thing that can go wrong while
//! rendering is the output stream itself.

use std::string::FromUtf8Error;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while writing a document
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("failed to write SVG output")]
    #[diagnostic(
        code(svgdoc::render::io),
        help("the output stream rejected a write; check that it is still open")
    )]
    Io(#[from] std::io::Error),

    #[error("rendered SVG is not valid UTF-8")]
    #[diagnostic(code(svgdoc::render::utf8))]
    Utf8(#[from] FromUtf8Error),
}

/// Result alias used throughout the renderer
pub type Result<T, E = RenderError> = std::result::Result<T, E>;
