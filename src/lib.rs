//! Tacmap - Top-Down Tactical Minimap Overlay

pub mod core;
pub mod hostile;
pub mod map;
pub mod render;
