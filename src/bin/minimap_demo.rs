//! Minimap overlay demo
//! Runs a few frames against stub engine seams and prints every draw
//! call, so the projection/classification pipeline can be eyeballed
//! without a real renderer.

use ahash::AHashMap;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tacmap::core::types::{CameraPose, MapViewport};
use tacmap::core::MinimapSettings;
use tacmap::hostile::{classify, Hostile, HostileProfile, Role, Side};
use tacmap::map::camera::CameraBackend;
use tacmap::map::Minimap;
use tacmap::render::colors::{category_color, Color};
use tacmap::render::{ColorLookup, OverlayDraw};

/// Hostile entity snapshot for the demo world
struct DemoHostile {
    id: u32,
    position: Vec3,
    look: Vec3,
    right: Vec3,
    profile: Option<HostileProfile>,
}

impl Hostile for DemoHostile {
    fn is_valid(&self) -> bool {
        true
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn look_direction(&self) -> Vec3 {
        self.look
    }

    fn right(&self) -> Vec3 {
        self.right
    }

    fn profile(&self) -> Option<&HostileProfile> {
        self.profile.as_ref()
    }
}

/// Color service backed by a per-hostile map, seeded from the palette
struct DemoColors {
    by_id: AHashMap<u32, Color>,
}

impl ColorLookup<DemoHostile> for DemoColors {
    fn color_for(&self, hostile: &DemoHostile) -> Option<Color> {
        self.by_id.get(&hostile.id).copied()
    }
}

/// Draw sink that prints instead of rasterizing
struct ConsoleDraw {
    lines: u32,
    circles: u32,
}

impl OverlayDraw for ConsoleDraw {
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, _color: Color) {
        self.lines += 1;
        println!(
            "  line   ({:6.1}, {:6.1}) -> ({:6.1}, {:6.1})  w={}",
            from.x, from.y, to.x, to.y, width
        );
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        _outline_width: f32,
        segments: u32,
    ) {
        self.circles += 1;
        println!(
            "  ring   ({:6.1}, {:6.1})  r={}  seg={}  rgb=({:.2}, {:.2}, {:.2})",
            center.x, center.y, radius, segments, color.r, color.g, color.b
        );
    }
}

/// Camera backend that only logs lifecycle transitions
#[derive(Default)]
struct LoggingBackend {
    next_id: u32,
}

impl CameraBackend for LoggingBackend {
    type Camera = u32;

    fn reset_atmosphere(&mut self) {
        tracing::info!("atmosphere reset to clear");
    }

    fn create_camera(&mut self, viewport: &MapViewport) -> u32 {
        self.next_id += 1;
        tracing::info!(
            id = self.next_id,
            width = viewport.width,
            height = viewport.height,
            "overlay camera created"
        );
        self.next_id
    }

    fn set_camera_enabled(&mut self, camera: &mut u32, enabled: bool) {
        tracing::info!(id = *camera, enabled, "overlay camera toggled");
    }

    fn set_camera_pose(&mut self, camera: &mut u32, pose: &CameraPose) {
        tracing::debug!(
            id = *camera,
            height = pose.position.y,
            yaw = pose.yaw_deg,
            "overlay camera re-posed"
        );
    }

    fn destroy_camera(&mut self, camera: u32) {
        tracing::info!(id = camera, "overlay camera destroyed");
    }

    fn set_dispose_hook(&mut self, armed: bool) {
        tracing::info!(armed, "session dispose hook");
    }
}

fn spawn_hostiles(rng: &mut StdRng, count: u32) -> Vec<DemoHostile> {
    let profiles = [
        None,
        Some(HostileProfile {
            role: Some(Role::Assault),
            boss: false,
            side: Side::Neutral,
        }),
        Some(HostileProfile {
            role: Some(Role::RaiderBot),
            boss: false,
            side: Side::Neutral,
        }),
        Some(HostileProfile {
            role: Some(Role::SectWarrior),
            boss: false,
            side: Side::Neutral,
        }),
        Some(HostileProfile {
            role: None,
            boss: true,
            side: Side::Neutral,
        }),
        Some(HostileProfile {
            role: None,
            boss: false,
            side: Side::FactionA,
        }),
        Some(HostileProfile {
            role: None,
            boss: false,
            side: Side::FactionB,
        }),
    ];

    (0..count)
        .map(|id| {
            let heading: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let look = Vec3::new(heading.sin(), 0.0, heading.cos());
            let right = Vec3::new(look.z, 0.0, -look.x);
            DemoHostile {
                id,
                position: Vec3::new(
                    rng.gen_range(-140.0..140.0),
                    rng.gen_range(0.0..10.0),
                    rng.gen_range(-140.0..140.0),
                ),
                look,
                right,
                profile: profiles[rng.gen_range(0..profiles.len())],
            }
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("minimap_demo=debug,tacmap=debug")
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let hostiles = spawn_hostiles(&mut rng, 12);

    let colors = DemoColors {
        by_id: hostiles
            .iter()
            .map(|h| (h.id, category_color(classify(h))))
            .collect(),
    };

    let viewport = MapViewport::new(0.0, 0.0, 200.0, 200.0, 100.0)
        .expect("demo viewport is well-formed");
    let settings = MinimapSettings::default();

    let mut backend = LoggingBackend::default();
    let mut draw = ConsoleDraw { lines: 0, circles: 0 };
    let mut minimap = Minimap::new();

    // Observer walks north while turning slowly
    for frame in 0..3 {
        let observer = CameraPose::new(
            Vec3::new(0.0, 1.7, -(frame as f32) * 5.0),
            frame as f32 * 15.0,
            0.0,
            0.0,
        );
        println!("\n=== frame {frame} (yaw {}°) ===", observer.yaw_deg);
        minimap.render_frame(
            &mut backend,
            &mut draw,
            &colors,
            &observer,
            &hostiles,
            &viewport,
            &settings,
        );
    }

    // Host toggles the feature off and the session ends
    minimap.set_active(&mut backend, false);
    minimap.on_session_end(&mut backend);

    println!(
        "\n{} hostiles, {} lines and {} rings over 3 frames",
        hostiles.len(),
        draw.lines,
        draw.circles
    );
}
