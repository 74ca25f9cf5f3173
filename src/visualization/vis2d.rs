use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

const SCALE: f32 = 50.0;
const SUN_RADIUS: f32 = 12.0;
const PLANET_RADIUS: f32 = 4.0;

// Planet/trail colors, cycled when there are more bodies than entries
const PALETTE: [Color; 5] = [
    Color::srgb(0.9, 0.2, 0.2), // red
    Color::srgb(0.2, 0.8, 0.3), // green
    Color::srgb(0.3, 0.4, 0.9), // blue
    Color::srgb(0.2, 0.8, 0.8), // cyan
    Color::srgb(0.8, 0.3, 0.8), // magenta
];

/// Run the Bevy 2D viewer, stepping the physics once per display frame.
///
/// The systems are chained so a frame always renders the state produced by
/// that frame's physics step, never a half-updated one.
pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} bodies, dt = {}",
        scenario.system.bodies.len(),
        scenario.parameters.dt
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (physics_step_system, sync_transforms_system, draw_trails_system).chain(),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // The sun: a large yellow disc pinned to the origin
    let sun = scenario.central.position();
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(SUN_RADIUS))),
        material: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.9, 0.2))),
        transform: Transform::from_xyz(sun.x as f32 * SCALE, sun.y as f32 * SCALE, 0.0),
        ..Default::default()
    });

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let x = body.position().x as f32 * SCALE;
        let y = body.position().y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(PLANET_RADIUS))),
                material: materials.add(ColorMaterial::from(PALETTE[i % PALETTE.len()])),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.position().x as f32) * SCALE;
            transform.translation.y = (b.position().y as f32) * SCALE;
        }
    }
}

fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()].with_alpha(0.6);
        gizmos.linestrip_2d(
            b.trail()
                .iter()
                .map(|p| Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE)),
            color,
        );
    }
}
