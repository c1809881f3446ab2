//! Composite figures built from primitive shapes
//!
//! These are ordinary [`Drawable`]s: they add shapes to whatever container
//! they are given and know nothing about rendering.

use std::f64::consts::PI;

use glam::DVec2;

use crate::document::{Drawable, ObjectContainer, ObjectContainerExt};
use crate::render::{Circle, PathStyled, Polyline};
use crate::types::Point;

/// A closed red triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    p1: Point,
    p2: Point,
    p3: Point,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }
}

impl Drawable for Triangle {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        container.add(
            Polyline::new()
                .add_point(self.p1)
                .add_point(self.p2)
                .add_point(self.p3)
                .add_point(self.p1)
                .with_fill_color("red")
                .with_stroke_color("black"),
        );
    }
}

/// A yellow star whose outline alternates between two radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    center: Point,
    outer_rad: f64,
    inner_rad: f64,
    num_rays: u32,
}

impl Star {
    pub fn new(center: Point, outer_rad: f64, inner_rad: f64, num_rays: u32) -> Self {
        Self {
            center,
            outer_rad,
            inner_rad,
            num_rays,
        }
    }

    /// The star outline, starting at the top ray and closing on itself.
    ///
    /// Each ray contributes an outer tip followed by the inner vertex half a
    /// ray further clockwise. A star with no rays has no outline.
    pub fn outline(&self) -> Polyline {
        let mut polyline = Polyline::new();
        if self.num_rays == 0 {
            return polyline;
        }

        let center = DVec2::from(self.center);
        let rays = f64::from(self.num_rays);
        for i in 0..=self.num_rays {
            let angle = 2.0 * PI * f64::from(i) / rays;
            polyline.push_point(polar(center, self.outer_rad, angle));
            polyline.push_point(polar(center, self.inner_rad, angle + PI / rays));
        }
        polyline
    }
}

/// Point at `radius` from `center`; angle 0 points up, angles grow clockwise.
fn polar(center: DVec2, radius: f64, angle: f64) -> Point {
    (center + DVec2::new(angle.sin(), -angle.cos()) * radius).into()
}

impl Drawable for Star {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        container.add(
            self.outline()
                .with_fill_color("yellow")
                .with_stroke_color("black"),
        );
    }
}

/// Three stacked circles: head, body, base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowman {
    head_center: Point,
    radius: f64,
}

impl Snowman {
    pub fn new(head_center: Point, radius: f64) -> Self {
        Self {
            head_center,
            radius,
        }
    }
}

impl Drawable for Snowman {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        let Point { x, y } = self.head_center;
        let r = self.radius;
        // (vertical offset, radius) in head radii, top to bottom
        for (dy, scale) in [(0.0, 1.0), (2.0, 1.5), (4.0, 2.0)] {
            container.add(
                Circle::new(Point::new(x, y + r * dy), r * scale)
                    .with_fill_color("white")
                    .with_stroke_color("black"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::render::Object;

    #[test]
    fn triangle_is_closed() {
        let mut doc = Document::new();
        Triangle::new(
            Point::new(100.0, 20.0),
            Point::new(120.0, 50.0),
            Point::new(80.0, 40.0),
        )
        .draw(&mut doc);

        let Some(Object::Polyline(line)) = doc.objects().next() else {
            panic!("expected a polyline");
        };
        assert_eq!(line.points().len(), 4);
        assert_eq!(line.points().first(), line.points().last());
        assert_eq!(line.path_props().fill().map(|c| c.as_str()), Some("red"));
    }

    #[test]
    fn star_alternates_radii() {
        let star = Star::new(Point::new(50.0, 20.0), 10.0, 4.0, 5);
        let outline = star.outline();
        let points = outline.points();
        assert_eq!(points.len(), 12);
        // Top ray tip sits straight above the center
        assert_eq!(points[0], Point::new(50.0, 10.0));

        let center = DVec2::new(50.0, 20.0);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            let dist = DVec2::from(*p).distance(center);
            assert!((dist - expected).abs() < 1e-9, "point {i} at distance {dist}");
        }
    }

    #[test]
    fn star_without_rays_is_empty() {
        assert!(Star::new(Point::ORIGIN, 1.0, 0.5, 0).outline().points().is_empty());
    }

    #[test]
    fn snowman_stacks_three_circles() {
        let mut doc = Document::new();
        Snowman::new(Point::new(30.0, 20.0), 10.0).draw(&mut doc);

        let circles: Vec<_> = doc
            .objects()
            .map(|obj| match obj {
                Object::Circle(c) => (c.center(), c.radius()),
                other => panic!("unexpected {}", other.tag()),
            })
            .collect();
        assert_eq!(
            circles,
            [
                (Point::new(30.0, 20.0), 10.0),
                (Point::new(30.0, 40.0), 15.0),
                (Point::new(30.0, 60.0), 20.0),
            ]
        );
    }
}
