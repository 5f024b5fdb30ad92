pub mod config;
pub mod error;
pub mod types;

pub use config::MinimapSettings;
pub use types::{CameraPose, MapViewport};
