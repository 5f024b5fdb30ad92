//! Secondary top-down camera lifecycle
//!
//! The overlay renders through a dedicated camera owned by the host
//! engine. [`MapCameraRig`] owns the handle and drives the lifecycle
//! `Uncreated → Created+Enabled ⇄ Created+Disabled → Torn down`;
//! the engine-facing operations live behind [`CameraBackend`]. Every
//! operation is a silent no-op when the camera does not exist, so a
//! mistimed frame never panics.

use crate::core::types::{CameraPose, MapViewport};

/// Engine operations for the dedicated top-down camera
///
/// Implementations are expected to honor the creation contract: the
/// new camera inherits the primary camera's post-processing, runs with
/// HDR disabled, and renders at a depth below the primary so it
/// composites as an overlay.
pub trait CameraBackend {
    type Camera;

    /// Reset ambient weather/atmosphere to a deterministic clear state
    ///
    /// Precondition for correct top-down rendering; called once, right
    /// before the camera is created.
    fn reset_atmosphere(&mut self);

    /// Instantiate the overlay camera covering the given viewport rect
    fn create_camera(&mut self, viewport: &MapViewport) -> Self::Camera;

    fn set_camera_enabled(&mut self, camera: &mut Self::Camera, enabled: bool);

    fn set_camera_pose(&mut self, camera: &mut Self::Camera, pose: &CameraPose);

    fn destroy_camera(&mut self, camera: Self::Camera);

    /// Arm or disarm the session-end disposal subscription
    ///
    /// The host fires the session-end event at most once; the rig arms
    /// this exactly once per camera and disarms it on teardown.
    fn set_dispose_hook(&mut self, armed: bool);
}

/// Owner of the secondary camera across frames
///
/// Exactly one rig owns one camera; there is no sharing between
/// feature instances and no locking.
pub struct MapCameraRig<B: CameraBackend> {
    camera: Option<B::Camera>,
    enabled: bool,
    dispose_armed: bool,
}

impl<B: CameraBackend> Default for MapCameraRig<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CameraBackend> MapCameraRig<B> {
    pub fn new() -> Self {
        Self {
            camera: None,
            enabled: false,
            dispose_armed: false,
        }
    }

    pub fn is_created(&self) -> bool {
        self.camera.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.camera.is_some() && self.enabled
    }

    /// Create the camera on first call; later calls only re-enable it
    ///
    /// Creation resets the atmosphere first and arms the session-end
    /// hook exactly once, guarding against double subscription.
    pub fn ensure_created(&mut self, backend: &mut B, viewport: &MapViewport) {
        if self.camera.is_some() {
            self.set_enabled(backend, true);
            return;
        }

        backend.reset_atmosphere();
        let camera = backend.create_camera(viewport);
        self.camera = Some(camera);
        self.enabled = true;

        if !self.dispose_armed {
            backend.set_dispose_hook(true);
            self.dispose_armed = true;
        }

        tracing::debug!(
            x = viewport.x,
            y = viewport.y,
            width = viewport.width,
            height = viewport.height,
            "map camera created"
        );
    }

    /// Flip the camera's enabled flag; no-op when uncreated or already there
    pub fn set_enabled(&mut self, backend: &mut B, enabled: bool) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        if self.enabled == enabled {
            return;
        }
        backend.set_camera_enabled(camera, enabled);
        self.enabled = enabled;
        tracing::debug!(enabled, "map camera toggled");
    }

    /// Re-pose the camera above the observer, looking straight down
    ///
    /// Runs every frame while enabled. Yaw and roll track the primary
    /// camera so the map rotates with the observer; height covers
    /// `range` world units for a 90° field of view (tan 45° = 1).
    pub fn track_observer(&mut self, backend: &mut B, primary: &CameraPose, range: f32) {
        if !self.enabled {
            return;
        }
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        let height = range * 45.0f32.to_radians().tan();
        let pose = CameraPose {
            position: glam::Vec3::new(primary.position.x, height, primary.position.z),
            yaw_deg: primary.yaw_deg,
            pitch_deg: 90.0,
            roll_deg: primary.roll_deg,
        };
        backend.set_camera_pose(camera, &pose);
    }

    /// Destroy the camera and disarm the session hook; terminal
    ///
    /// Called when the owning session disposes. The camera is disabled
    /// before destruction so a deferred engine callback never touches
    /// an active camera whose world is gone.
    pub fn teardown(&mut self, backend: &mut B) {
        self.set_enabled(backend, false);
        if let Some(camera) = self.camera.take() {
            backend.destroy_camera(camera);
            tracing::debug!("map camera destroyed");
        }
        if self.dispose_armed {
            backend.set_dispose_hook(false);
            self.dispose_armed = false;
        }
    }
}
