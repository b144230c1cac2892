//! Filled shape primitives
//!
//! Every fill works the same way: build the shape's bounding box, clip it to
//! the buffer once, then walk the clipped box testing each pixel against the
//! shape's predicate. Pixels that pass are alpha-blended in. Inverted boxes
//! (negative extents, negative radius) produce an empty walk.

use super::{Color, PixelBuffer};
use crate::math::Vec2;

/// Clip a circle-style span `[trunc(lo), trunc(hi) + 1)` to `[0, limit)`
#[inline]
fn clip_radius_span(lo: f32, hi: f32, limit: u32) -> (i32, i32) {
    let start = (lo as i32).max(0);
    let end = (hi as i32).saturating_add(1).min(limit as i32);
    (start, end)
}

/// Clip a rect-style span `[trunc(origin), trunc(origin) + extent)` to `[0, limit)`
#[inline]
fn clip_extent_span(origin: f32, extent: i32, limit: u32) -> (i32, i32) {
    if !origin.is_finite() {
        return (0, 0);
    }
    let first = origin as i32;
    (first.max(0), first.saturating_add(extent).min(limit as i32))
}

/// Opacity of the radial gradient at `dist` from the center
#[inline]
pub fn gradient_alpha(dist: f32, inner_edge: f32, radius: f32, start: f32, end: f32) -> f32 {
    start + ((dist - inner_edge) / (radius - inner_edge)) * (end - start)
}

impl PixelBuffer {
    /// Fill the `length` x `height` rectangle whose top-left corner is `loc`
    pub fn draw_rect(&mut self, loc: Vec2, length: i32, height: i32, c: Color, alpha: f32) {
        let (left, right) = clip_extent_span(loc.x, length, self.width());
        let (top, bottom) = clip_extent_span(loc.y, height, self.height());

        for j in top..bottom {
            for i in left..right {
                self.put_pixel_with_alpha_blend(i, j, c, alpha);
            }
        }
    }

    /// Fill a rectangle, keeping only the pixels inside a bounding circle
    pub fn draw_rect_within_circle(
        &mut self,
        loc: Vec2,
        length: i32,
        height: i32,
        c: Color,
        circle_loc: Vec2,
        circle_radius: f32,
        alpha: f32,
    ) {
        let (left, right) = clip_extent_span(loc.x, length, self.width());
        let (top, bottom) = clip_extent_span(loc.y, height, self.height());
        let radius_sqrd = circle_radius * circle_radius;

        for j in top..bottom {
            for i in left..right {
                if (Vec2::new(i as f32, j as f32) - circle_loc).magnitude_sqrd() < radius_sqrd {
                    self.put_pixel_with_alpha_blend(i, j, c, alpha);
                }
            }
        }
    }

    /// Fill a circle. Pixels exactly `radius` away are outside.
    pub fn draw_circle(&mut self, loc: Vec2, radius: f32, c: Color, alpha: f32) {
        let (left, right) = clip_radius_span(loc.x - radius, loc.x + radius, self.width());
        let (top, bottom) = clip_radius_span(loc.y - radius, loc.y + radius, self.height());
        let radius_sqrd = radius * radius;

        for j in top..bottom {
            let dist_sqrd_y = (j as f32 - loc.y) * (j as f32 - loc.y);
            for i in left..right {
                let dist_sqrd_x = (i as f32 - loc.x) * (i as f32 - loc.x);
                if dist_sqrd_x + dist_sqrd_y < radius_sqrd {
                    self.put_pixel_with_alpha_blend(i, j, c, alpha);
                }
            }
        }
    }

    /// Fill a circle clipped to a second, independent circle.
    ///
    /// The inner test compares squared distances; the outer test compares the
    /// true distance against `outer_radius`.
    pub fn draw_circle_within_circle(
        &mut self,
        loc: Vec2,
        radius: f32,
        c: Color,
        outer_loc: Vec2,
        outer_radius: f32,
        alpha: f32,
    ) {
        let (left, right) = clip_radius_span(loc.x - radius, loc.x + radius, self.width());
        let (top, bottom) = clip_radius_span(loc.y - radius, loc.y + radius, self.height());
        let radius_sqrd = radius * radius;

        for j in top..bottom {
            let dist_sqrd_y = (j as f32 - loc.y) * (j as f32 - loc.y);
            for i in left..right {
                let dist_sqrd_x = (i as f32 - loc.x) * (i as f32 - loc.x);
                if dist_sqrd_x + dist_sqrd_y < radius_sqrd
                    && Vec2::new(i as f32 - outer_loc.x, j as f32 - outer_loc.y).magnitude()
                        < outer_radius
                {
                    self.put_pixel_with_alpha_blend(i, j, c, alpha);
                }
            }
        }
    }

    /// Approximate ellipse fill.
    ///
    /// The boundary radius at each pixel is the width and height radii mixed by
    /// the squared-delta share of each axis. This is not the ellipse equation:
    /// diagonals bulge, and the exact center pixel (0/0) is never drawn.
    pub fn draw_ellipse(
        &mut self,
        loc: Vec2,
        radius_width: f32,
        radius_height: f32,
        c: Color,
        alpha: f32,
    ) {
        let (left, right) =
            clip_radius_span(loc.x - radius_width, loc.x + radius_width, self.width());
        let (top, bottom) =
            clip_radius_span(loc.y - radius_height, loc.y + radius_height, self.height());

        for j in top..bottom {
            let dist_sqrd_y = (j as f32 - loc.y) * (j as f32 - loc.y);
            for i in left..right {
                let dist_sqrd_x = (i as f32 - loc.x) * (i as f32 - loc.x);
                let dist_sqrd_total = dist_sqrd_x + dist_sqrd_y;
                let to_center_sqrd = Vec2::new(i as f32 - loc.x, j as f32 - loc.y).magnitude_sqrd();

                let radius_at_point = (dist_sqrd_x / to_center_sqrd) * radius_width
                    + (dist_sqrd_y / to_center_sqrd) * radius_height;

                if dist_sqrd_total < radius_at_point * radius_at_point {
                    self.put_pixel_with_alpha_blend(i, j, c, alpha);
                }
            }
        }
    }

    /// Fill the ring `inner_edge <= d < radius` with opacity running linearly
    /// from `start_alpha` at `inner_edge` to `end_alpha` at `radius`.
    pub fn draw_circle_gradient(
        &mut self,
        loc: Vec2,
        radius: f32,
        c: Color,
        inner_edge: f32,
        start_alpha: f32,
        end_alpha: f32,
    ) {
        let (left, right) = clip_radius_span(loc.x - radius, loc.x + radius, self.width());
        let (top, bottom) = clip_radius_span(loc.y - radius, loc.y + radius, self.height());
        let radius_sqrd = radius * radius;
        let inner_sqrd = inner_edge * inner_edge;

        for j in top..bottom {
            let dist_sqrd_y = (j as f32 - loc.y) * (j as f32 - loc.y);
            for i in left..right {
                let dist_sqrd_x = (i as f32 - loc.x) * (i as f32 - loc.x);
                let dist_sqrd_total = dist_sqrd_x + dist_sqrd_y;

                if dist_sqrd_total < radius_sqrd && dist_sqrd_total >= inner_sqrd {
                    let alpha = gradient_alpha(
                        dist_sqrd_total.sqrt(),
                        inner_edge,
                        radius,
                        start_alpha,
                        end_alpha,
                    );
                    self.put_pixel_with_alpha_blend(i, j, c, alpha);
                }
            }
        }
    }
}
