//! Draws a triangle, a star and a snowman and prints the SVG.
//!
//! Usage: `cargo run --example picture [OUT.svg]`
//! Set `RUST_LOG=debug` (with `--features tracing`) to see what gets rendered.

use std::fs::File;
use std::io::{BufWriter, Write};

use miette::{IntoDiagnostic, WrapErr};
use svgdoc::figures::{Snowman, Star, Triangle};
use svgdoc::{Document, Drawable, Point, draw_picture};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let picture: Vec<Box<dyn Drawable>> = vec![
        Box::new(Triangle::new(
            Point::new(100.0, 20.0),
            Point::new(120.0, 50.0),
            Point::new(80.0, 40.0),
        )),
        Box::new(Star::new(Point::new(50.0, 20.0), 10.0, 4.0, 5)),
        Box::new(Snowman::new(Point::new(30.0, 20.0), 10.0)),
    ];

    let mut doc = Document::new();
    draw_picture(&picture, &mut doc);
    tracing::info!(objects = doc.len(), "picture assembled");

    let mut out: Box<dyn Write> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufWriter::new(
            File::create(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to create {path}"))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    doc.render(&mut out)?;
    out.flush().into_diagnostic()?;
    Ok(())
}
