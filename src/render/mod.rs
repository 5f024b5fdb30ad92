//! Rendering seams for the minimap overlay
//!
//! The overlay never touches a graphics API directly. It issues
//! immediate-mode draw calls through [`OverlayDraw`] and resolves
//! per-hostile ring colors through [`ColorLookup`]; both are supplied
//! by the host at construction (no global registry lookups).

pub mod colors;

use glam::Vec2;

use colors::Color;

/// Immediate-mode draw primitives for the map viewport.
///
/// Coordinates are map-viewport points straight from the projector;
/// the implementation is responsible for clipping against the viewport.
pub trait OverlayDraw {
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        outline_width: f32,
        segments: u32,
    );
}

/// Per-hostile color assignment, keyed by the hostile handle.
///
/// Returning `None` makes the overlay fall back to
/// [`colors::FALLBACK_HOSTILE_COLOR`].
pub trait ColorLookup<H: ?Sized> {
    fn color_for(&self, hostile: &H) -> Option<Color>;
}
