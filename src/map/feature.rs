//! Per-frame minimap orchestration
//!
//! Glues the pipeline together in frame order: camera upkeep, then
//! filtering, then draw calls. All collaborators are injected: the
//! color service and draw sink arrive as arguments, never resolved
//! through a global registry.

use crate::core::config::MinimapSettings;
use crate::core::types::{CameraPose, MapViewport};
use crate::hostile::Hostile;
use crate::map::camera::{CameraBackend, MapCameraRig};
use crate::map::filter::visible_hostiles;
use crate::map::overlay::draw_hostile;
use crate::render::colors::FALLBACK_HOSTILE_COLOR;
use crate::render::{ColorLookup, OverlayDraw};

/// The minimap overlay feature
///
/// Owns the secondary camera rig across frames; everything else is
/// per-frame input. One instance per session.
pub struct Minimap<B: CameraBackend> {
    rig: MapCameraRig<B>,
}

impl<B: CameraBackend> Default for Minimap<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CameraBackend> Minimap<B> {
    pub fn new() -> Self {
        Self {
            rig: MapCameraRig::new(),
        }
    }

    pub fn camera(&self) -> &MapCameraRig<B> {
        &self.rig
    }

    /// Run one overlay frame
    ///
    /// Ensures the secondary camera exists (re-enabling it if the
    /// feature was toggled off), re-poses it over the observer, then
    /// filters, classifies and draws the hostile enumeration. Settings
    /// are read fresh on every call.
    #[allow(clippy::too_many_arguments)]
    pub fn render_frame<'a, H, I, D, C>(
        &mut self,
        backend: &mut B,
        draw: &mut D,
        colors: &C,
        observer: &CameraPose,
        hostiles: I,
        viewport: &MapViewport,
        settings: &MinimapSettings,
    ) where
        H: Hostile + ?Sized + 'a,
        I: IntoIterator<Item = &'a H>,
        I::IntoIter: 'a,
        D: OverlayDraw,
        C: ColorLookup<H>,
    {
        self.rig.ensure_created(backend, viewport);
        self.rig.track_observer(backend, observer, viewport.range);

        for (hostile, _category) in
            visible_hostiles(hostiles, observer.position, viewport.range, *settings)
        {
            let ring_color = colors.color_for(hostile).unwrap_or(FALLBACK_HOSTILE_COLOR);
            draw_hostile(draw, hostile, observer, viewport, ring_color);
        }
    }

    /// Propagate the host feature toggle to the secondary camera
    ///
    /// Disabling keeps the camera alive for a cheap re-enable; nothing
    /// happens if it was never created.
    pub fn set_active(&mut self, backend: &mut B, active: bool) {
        self.rig.set_enabled(backend, active);
    }

    /// Session-end hook: tear the secondary camera down for good
    pub fn on_session_end(&mut self, backend: &mut B) {
        self.rig.teardown(backend);
    }
}
