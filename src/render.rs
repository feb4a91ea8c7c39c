//! Frame composition onto the host drawing surface
//!
//! The surface itself is an external collaborator; the core only turns a
//! [`ViewModel`] into clear/fill-circle commands. Surface locking and canvas
//! validity are the host's problem.

use glam::Vec2;

use crate::consts::{CONTACT_RADIUS, HIGHLIGHT_RADIUS};
use crate::round::ViewModel;

/// Opaque drawable canvas supplied by the host
pub trait DrawSurface {
    /// Clear the whole surface to the background color
    fn clear(&mut self);
    /// Draw a filled circle (color is 0xRRGGBB)
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32);
}

/// Paint one frame. The winner is two concentric circles (ring under fill);
/// everyone else is a single circle.
pub fn draw_frame<S: DrawSurface>(view: &ViewModel, surface: &mut S) {
    surface.clear();
    for dot in &view.dots {
        if dot.highlighted {
            surface.fill_circle(dot.pos, HIGHLIGHT_RADIUS, dot.ring_color);
        }
        surface.fill_circle(dot.pos, CONTACT_RADIUS, dot.color);
    }
}
