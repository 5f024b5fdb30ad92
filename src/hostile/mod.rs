//! Hostile entity seam and category classification
//!
//! The world simulation owns hostile entities; the overlay sees them
//! only through the [`Hostile`] trait, one enumeration per frame, and
//! holds no handles across frames. Classification is recomputed from
//! the metadata snapshot every frame and never stored.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// AI role assigned by the spawn system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Ordinary assault AI
    Assault,
    /// Long-range marksman AI
    Marksman,
    /// Raider-pattern bot guarding high-value areas
    RaiderBot,
    /// Sect warrior
    SectWarrior,
}

/// Faction side of a hostile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    FactionA,
    FactionB,
    Neutral,
}

/// Classification metadata snapshot for one hostile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostileProfile {
    pub role: Option<Role>,
    pub boss: bool,
    pub side: Side,
}

/// Category a hostile is drawn and toggled as
///
/// Derived per frame from [`HostileProfile`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileCategory {
    Scav,
    ScavRaider,
    Boss,
    Cultist,
    FactionA,
    FactionB,
}

/// Read-only view of a live hostile entity
///
/// All queries reflect the entity's state this frame. `is_valid`
/// reports liveness; a stale handle answers false and is skipped.
pub trait Hostile {
    fn is_valid(&self) -> bool;
    /// World position
    fn position(&self) -> Vec3;
    /// Unit look direction
    fn look_direction(&self) -> Vec3;
    /// Unit lateral right vector (for the flank ticks)
    fn right(&self) -> Vec3;
    /// Classification metadata; `None` when the profile is unavailable
    fn profile(&self) -> Option<&HostileProfile>;
}

/// Classify a hostile into its draw/toggle category
///
/// Precedence, first match wins: missing profile, then role, then boss
/// flag, then side. The ordering is load-bearing: a boss-flagged
/// raider bot is a ScavRaider, not a Boss.
pub fn classify<H: Hostile + ?Sized>(hostile: &H) -> HostileCategory {
    let Some(profile) = hostile.profile() else {
        return HostileCategory::Scav;
    };

    match profile.role {
        Some(Role::RaiderBot) => return HostileCategory::ScavRaider,
        Some(Role::SectWarrior) => return HostileCategory::Cultist,
        _ => {}
    }

    if profile.boss {
        return HostileCategory::Boss;
    }

    match profile.side {
        Side::FactionA => HostileCategory::FactionA,
        Side::FactionB => HostileCategory::FactionB,
        Side::Neutral => HostileCategory::Scav,
    }
}
