//! Interactive viewer for a classified building.
//!
//! Controls:
//! - Left drag: orbit
//! - Middle drag: pan
//! - Scroll, `=` / `-`: zoom
//! - Arrow keys: orbit in steps
//! - `A`: toggle axes
//!
//! Run with: `cargo run --example viewer -- path/to/model.stl`
//!
//! Textures are read from `assets/textures/{wall,roof,grass}.jpg` when present.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy_facade::prelude::*;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/building.stl".to_string());

    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(BuildingSource::new(path).with_textures(RegionTexturePaths::new(
            "textures/wall.jpg",
            "textures/roof.jpg",
            "textures/grass.jpg",
        )))
        .insert_resource(BuildingConfig::default().with_roof_fraction(0.85))
        .add_plugins(BuildingRegionsPlugin)
        .init_resource::<Orbit>()
        .init_resource::<ShowAxes>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                orbit_input,
                apply_orbit,
                toggle_axes,
                draw_axes.run_if(|show: Res<ShowAxes>| show.0),
                animate_background,
                update_summary_text,
            ),
        )
        .run();
}

#[derive(Resource)]
struct Orbit {
    yaw: f32,
    pitch: f32,
    distance: f32,
    focus: Vec3,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 10.0,
            focus: Vec3::ZERO,
        }
    }
}

#[derive(Resource)]
struct ShowAxes(bool);

impl Default for ShowAxes {
    fn default() -> Self {
        Self(true)
    }
}

#[derive(Component)]
struct SummaryText;

fn setup(mut commands: Commands) {
    commands.spawn((Camera3d::default(), Transform::default()));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        SummaryText,
    ));
}

fn orbit_input(
    mut orbit: ResMut<Orbit>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
) {
    const STEP: f32 = 5.0_f32 * std::f32::consts::PI / 180.0;

    if mouse.pressed(MouseButton::Left) {
        orbit.yaw -= motion.delta.x * 0.005;
        orbit.pitch += motion.delta.y * 0.005;
    } else if mouse.pressed(MouseButton::Middle) {
        let pan = Quat::from_rotation_y(orbit.yaw) * Vec3::new(-motion.delta.x, motion.delta.y, 0.0);
        let scale = orbit.distance * 0.002;
        orbit.focus += pan * scale;
    }

    if keyboard.pressed(KeyCode::ArrowUp) {
        orbit.pitch += STEP;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        orbit.pitch -= STEP;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        orbit.yaw -= STEP;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        orbit.yaw += STEP;
    }

    let mut zoom = scroll.delta.y * 0.1;
    if keyboard.pressed(KeyCode::Equal) {
        zoom += 0.1;
    }
    if keyboard.pressed(KeyCode::Minus) {
        zoom -= 0.1;
    }
    orbit.distance = (orbit.distance * (1.0 - zoom)).clamp(1.0, 200.0);
    orbit.pitch = orbit.pitch.clamp(-1.5, 1.5);
}

fn apply_orbit(orbit: Res<Orbit>, mut camera: Single<&mut Transform, With<Camera3d>>) {
    let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, -orbit.pitch, 0.0);
    camera.translation = orbit.focus + rotation * Vec3::new(0.0, 0.0, orbit.distance);
    camera.look_at(orbit.focus, Vec3::Y);
}

fn toggle_axes(keyboard: Res<ButtonInput<KeyCode>>, mut show: ResMut<ShowAxes>) {
    if keyboard.just_pressed(KeyCode::KeyA) {
        show.0 = !show.0;
    }
}

fn draw_axes(mut gizmos: Gizmos) {
    let length = 15.0;
    gizmos.line(Vec3::NEG_X * length, Vec3::X * length, Color::srgb(1.0, 0.0, 0.0));
    gizmos.line(Vec3::NEG_Y * length, Vec3::Y * length, Color::srgb(0.0, 1.0, 0.0));
    gizmos.line(Vec3::NEG_Z * length, Vec3::Z * length, Color::srgb(0.0, 0.0, 1.0));
}

fn animate_background(time: Res<Time>, mut clear: ResMut<ClearColor>) {
    let t = time.elapsed_secs();
    let wave = (t.sin() + (t * 0.7).sin() * 0.8) * 0.25 + 0.5;
    let a = Vec3::new(0.7, 1.0, 0.2);
    let b = Vec3::new(0.05, 0.75, 0.45);
    let c = a.lerp(b, wave);
    clear.0 = Color::srgb(c.x, c.y, c.z);
}

fn update_summary_text(
    summary: Option<Res<BuildingSummary>>,
    mut text: Single<&mut Text, With<SummaryText>>,
) {
    let Some(summary) = summary else {
        return;
    };
    if !summary.is_changed() {
        return;
    }
    text.0 = format!(
        "{} walls, {} roof, {} ground\nDrag to orbit, A toggles axes",
        summary.wall, summary.roof, summary.ground
    );
}
