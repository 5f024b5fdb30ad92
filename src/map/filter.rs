//! Per-frame visibility filtering of the hostile enumeration

use glam::Vec3;

use crate::core::config::MinimapSettings;
use crate::hostile::{classify, Hostile, HostileCategory};
use crate::map::projection::planar_distance;

/// Filter the hostile enumeration down to the entities to draw
///
/// Lazy: no collection is built, input order is preserved and each
/// survivor is yielded exactly once, paired with the category it was
/// classified as. A hostile survives when it is valid, within `range`
/// (0 or negative disables the cutoff; distance is compared after
/// rounding to whole units), and its category's toggle is on.
pub fn visible_hostiles<'a, H, I>(
    hostiles: I,
    observer: Vec3,
    range: f32,
    settings: MinimapSettings,
) -> impl Iterator<Item = (&'a H, HostileCategory)> + 'a
where
    H: Hostile + ?Sized + 'a,
    I: IntoIterator<Item = &'a H>,
    I::IntoIter: 'a,
{
    hostiles.into_iter().filter_map(move |hostile| {
        if !hostile.is_valid() {
            return None;
        }
        if range > 0.0 && planar_distance(observer, hostile.position()).round() > range {
            return None;
        }
        let category = classify(hostile);
        settings.shows(category).then_some((hostile, category))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hostile::testing::StubHostile;
    use crate::hostile::{HostileProfile, Role, Side};

    fn collect_categories(
        hostiles: &[StubHostile],
        range: f32,
        settings: MinimapSettings,
    ) -> Vec<HostileCategory> {
        visible_hostiles(hostiles, Vec3::ZERO, range, settings)
            .map(|(_, category)| category)
            .collect()
    }

    #[test]
    fn test_invalid_hostiles_are_skipped() {
        let hostiles = vec![
            StubHostile::at(Vec3::new(0.0, 0.0, -10.0)),
            StubHostile::at(Vec3::new(0.0, 0.0, -20.0)).invalid(),
        ];
        let visible = collect_categories(&hostiles, 0.0, MinimapSettings::default());
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_zero_range_disables_cutoff() {
        let hostiles = vec![StubHostile::at(Vec3::new(0.0, 0.0, -5000.0))];
        assert_eq!(collect_categories(&hostiles, 0.0, MinimapSettings::default()).len(), 1);
        assert_eq!(collect_categories(&hostiles, 100.0, MinimapSettings::default()).len(), 0);
    }

    #[test]
    fn test_range_cutoff_uses_rounded_distance() {
        // 100.4 rounds down to 100 and stays in; 100.6 rounds to 101 and drops
        let near = vec![StubHostile::at(Vec3::new(0.0, 0.0, -100.4))];
        let far = vec![StubHostile::at(Vec3::new(0.0, 0.0, -100.6))];
        assert_eq!(collect_categories(&near, 100.0, MinimapSettings::default()).len(), 1);
        assert_eq!(collect_categories(&far, 100.0, MinimapSettings::default()).len(), 0);
    }

    #[test]
    fn test_range_cutoff_ignores_height() {
        let hostiles = vec![StubHostile::at(Vec3::new(0.0, 80.0, -90.0))];
        // 3D distance exceeds 100 but planar distance is 90
        assert_eq!(collect_categories(&hostiles, 100.0, MinimapSettings::default()).len(), 1);
    }

    #[test]
    fn test_toggle_gates_each_category() {
        let boss = HostileProfile {
            role: None,
            boss: true,
            side: Side::Neutral,
        };
        let raider = HostileProfile {
            role: Some(Role::RaiderBot),
            boss: false,
            side: Side::Neutral,
        };
        let hostiles = vec![
            StubHostile::at(Vec3::new(0.0, 0.0, -10.0)),
            StubHostile::at(Vec3::new(0.0, 0.0, -20.0)).with_profile(boss),
            StubHostile::at(Vec3::new(0.0, 0.0, -30.0)).with_profile(raider),
        ];

        let no_bosses = MinimapSettings {
            show_bosses: false,
            ..Default::default()
        };
        let visible = collect_categories(&hostiles, 0.0, no_bosses);
        assert_eq!(visible, vec![HostileCategory::Scav, HostileCategory::ScavRaider]);
    }

    #[test]
    fn test_players_toggle_hides_both_factions() {
        let side_a = HostileProfile {
            role: None,
            boss: false,
            side: Side::FactionA,
        };
        let side_b = HostileProfile {
            role: None,
            boss: false,
            side: Side::FactionB,
        };
        let hostiles = vec![
            StubHostile::at(Vec3::new(0.0, 0.0, -10.0)).with_profile(side_a),
            StubHostile::at(Vec3::new(0.0, 0.0, -20.0)).with_profile(side_b),
        ];
        let no_players = MinimapSettings {
            show_players: false,
            ..Default::default()
        };
        assert!(collect_categories(&hostiles, 0.0, no_players).is_empty());
    }

    #[test]
    fn test_all_toggles_off_yields_nothing() {
        let hostiles: Vec<StubHostile> = (0..32)
            .map(|i| StubHostile::at(Vec3::new(i as f32, 0.0, -10.0)))
            .collect();
        let hidden = MinimapSettings {
            show_players: false,
            show_scavs: false,
            show_scav_raiders: false,
            show_bosses: false,
            show_cultists: false,
        };
        assert!(collect_categories(&hostiles, 0.0, hidden).is_empty());
    }

    #[test]
    fn test_enumeration_order_is_preserved() {
        let hostiles: Vec<StubHostile> = (1..=5)
            .map(|i| StubHostile::at(Vec3::new(0.0, 0.0, -(i as f32) * 10.0)))
            .collect();
        let positions: Vec<f32> =
            visible_hostiles(&hostiles, Vec3::ZERO, 0.0, MinimapSettings::default())
                .map(|(h, _)| h.position().z)
                .collect();
        assert_eq!(positions, vec![-10.0, -20.0, -30.0, -40.0, -50.0]);
    }
}
