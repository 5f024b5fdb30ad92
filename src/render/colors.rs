//! Color definitions for hostile categories and overlay markers

use crate::hostile::HostileCategory;

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Darken color by a factor (0.0 = black, 1.0 = unchanged)
    pub fn darken(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }
}

/// Neutral color for the directional arrow markers
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Ring color used when the color service has no entry for a hostile
pub const FALLBACK_HOSTILE_COLOR: Color = Color::new(0.9, 0.1, 0.1, 1.0);

/// Get the default ring color for a hostile category
///
/// The color service normally supplies per-hostile colors; this palette
/// backs services that only distinguish categories.
pub fn category_color(category: HostileCategory) -> Color {
    match category {
        HostileCategory::Scav => Color::new(0.8, 0.5, 0.2, 1.0),       // Brown/orange
        HostileCategory::ScavRaider => Color::new(0.9, 0.7, 0.1, 1.0), // Amber
        HostileCategory::Boss => Color::new(0.9, 0.1, 0.1, 1.0),       // Red
        HostileCategory::Cultist => Color::new(0.6, 0.2, 0.8, 1.0),    // Purple
        HostileCategory::FactionA => Color::new(0.2, 0.6, 0.9, 1.0),   // Blue
        HostileCategory::FactionB => Color::new(0.3, 0.9, 0.5, 1.0),   // Light green
    }
}
