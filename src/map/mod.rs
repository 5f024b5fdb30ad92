//! Top-down minimap pipeline
//!
//! Frame order: camera upkeep → visibility filtering → projection →
//! draw calls. This module is READ-ONLY with respect to the world:
//! it never mutates entity state, only the camera it owns.

pub mod camera;
pub mod feature;
pub mod filter;
pub mod overlay;
pub mod projection;

pub use camera::{CameraBackend, MapCameraRig};
pub use feature::Minimap;
pub use filter::visible_hostiles;
pub use projection::{find_map_point, planar_distance};
