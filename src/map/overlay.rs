//! Directional marker and ring drawing for visible hostiles

use crate::core::types::{CameraPose, MapViewport};
use crate::hostile::Hostile;
use crate::map::projection::find_map_point;
use crate::render::colors::{Color, WHITE};
use crate::render::OverlayDraw;

/// World units the forward marker extends along the look direction
pub const FORWARD_MARKER_LEN: f32 = 8.0;
/// World units the flank ticks sit ahead of the hostile
pub const FLANK_TICK_AHEAD: f32 = 4.0;
/// World units the flank ticks sit to either side
pub const FLANK_TICK_SIDE: f32 = 2.0;
/// Line width for all marker segments
pub const MARKER_LINE_WIDTH: f32 = 2.0;
/// Map-space radius of the category ring
pub const RING_RADIUS: f32 = 10.0;
/// Outline width of the category ring
pub const RING_OUTLINE_WIDTH: f32 = 2.0;
/// Segment count of the ring approximation
pub const RING_SEGMENTS: u32 = 8;

/// Draw one hostile's facing arrow and colored ring
///
/// Four world points (the hostile, a forward marker, two flank ticks)
/// are projected through the same observer/viewport, then joined into
/// a forward-pointing arrow in the neutral marker color. The ring is
/// drawn in the caller-resolved per-hostile color. No state survives
/// between calls.
pub fn draw_hostile<H, D>(
    draw: &mut D,
    hostile: &H,
    observer: &CameraPose,
    viewport: &MapViewport,
    ring_color: Color,
) where
    H: Hostile + ?Sized,
    D: OverlayDraw,
{
    let position = hostile.position();
    let look = hostile.look_direction();
    let right = hostile.right();

    let forward = position + look * FORWARD_MARKER_LEN;
    let flank_a = position + look * FLANK_TICK_AHEAD + right * FLANK_TICK_SIDE;
    let flank_b = position + look * FLANK_TICK_AHEAD - right * FLANK_TICK_SIDE;

    let origin = observer.position;
    let yaw = observer.yaw_deg;
    let hostile_point = find_map_point(origin, position, yaw, viewport);
    let forward_point = find_map_point(origin, forward, yaw, viewport);
    let flank_a_point = find_map_point(origin, flank_a, yaw, viewport);
    let flank_b_point = find_map_point(origin, flank_b, yaw, viewport);

    draw.draw_line(hostile_point, forward_point, MARKER_LINE_WIDTH, WHITE);
    draw.draw_line(flank_a_point, forward_point, MARKER_LINE_WIDTH, WHITE);
    draw.draw_line(flank_b_point, forward_point, MARKER_LINE_WIDTH, WHITE);
    draw.draw_circle(
        hostile_point,
        RING_RADIUS,
        ring_color,
        RING_OUTLINE_WIDTH,
        RING_SEGMENTS,
    );
}
