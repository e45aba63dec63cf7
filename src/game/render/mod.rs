use std::f32::consts::FRAC_PI_2;

use bevy::{
    color::palettes::css::{DARK_GREEN, DIM_GRAY},
    prelude::*,
    sprite::{ColorMaterial, MeshMaterial2d},
    window::PrimaryWindow,
};

use crate::{
    core::config::SimConfig,
    game::{
        ants::{Ant, AntSize},
        colony::PointerPress,
        physix::Pose,
        targets::{Target, TargetKind},
    },
};

pub mod hud;

const BACKGROUND: Color = Color::srgb(235.0 / 255.0, 235.0 / 255.0, 235.0 / 255.0);

const BIG_ANT_SCALE: f32 = 1.2;
const SMALL_ANT_SCALE: f32 = 0.8;
const SPIDER_SCALE: f32 = 1.0;
const LEAF_SCALE: f32 = 1.4;

// Draw order: ants below spiders below leaves.
const ANT_Z: f32 = 1.0;
const SPIDER_Z: f32 = 2.0;
const LEAF_Z: f32 = 3.0;

pub struct Presentation;

impl Plugin for Presentation {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(Startup, (setup_camera, setup_palette, hud::setup_hud))
            .add_systems(
                Update,
                (
                    pointer_press_system,
                    dress_new_entities,
                    sync_transforms,
                    hud::draw_zones,
                ),
            );
    }
}

/// Meshes and materials shared by every entity of a kind.
#[derive(Debug, Clone, Resource)]
pub struct Palette {
    pub ant_mesh: Handle<Mesh>,
    pub spider_mesh: Handle<Mesh>,
    pub leaf_mesh: Handle<Mesh>,
    pub ant: Handle<ColorMaterial>,
    pub spider: Handle<ColorMaterial>,
    pub leaf: Handle<ColorMaterial>,
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn setup_palette(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(Palette {
        ant_mesh: meshes.add(Triangle2d::new(
            Vec2::new(0.0, 8.0),
            Vec2::new(-5.0, -8.0),
            Vec2::new(5.0, -8.0),
        )),
        spider_mesh: meshes.add(Circle::new(9.0)),
        leaf_mesh: meshes.add(Ellipse::new(6.0, 10.0)),
        ant: materials.add(Color::BLACK),
        spider: materials.add(Color::from(DIM_GRAY)),
        leaf: materials.add(Color::from(DARK_GREEN)),
    });
}

// Gives every newly spawned ant or target a mesh, including click spawns.
fn dress_new_entities(
    mut commands: Commands,
    palette: Res<Palette>,
    new_entities: Query<(Entity, Option<&Ant>, Option<&Target>), Added<Pose>>,
) {
    for (entity, ant, target) in new_entities.iter() {
        let (mesh, material, scale, z) = match (ant, target) {
            (Some(ant), _) => {
                let scale = match ant.size {
                    AntSize::Big => BIG_ANT_SCALE,
                    AntSize::Small => SMALL_ANT_SCALE,
                };
                (palette.ant_mesh.clone(), palette.ant.clone(), scale, ANT_Z)
            }
            (None, Some(target)) => match target.kind {
                TargetKind::Spider => (
                    palette.spider_mesh.clone(),
                    palette.spider.clone(),
                    SPIDER_SCALE,
                    SPIDER_Z,
                ),
                TargetKind::Leaf => (
                    palette.leaf_mesh.clone(),
                    palette.leaf.clone(),
                    LEAF_SCALE,
                    LEAF_Z,
                ),
            },
            (None, None) => continue,
        };
        commands.entity(entity).insert((
            Mesh2d(mesh),
            MeshMaterial2d(material),
            Transform::from_xyz(0.0, 0.0, z).with_scale(Vec3::splat(scale)),
        ));
    }
}

/// Sim space has its origin at the bottom-left corner, the camera looks at
/// the screen center.
pub fn sim_to_world(position: Vec2, config: &SimConfig) -> Vec2 {
    position - Vec2::new(config.screen_width, config.screen_height) / 2.0
}

fn sync_transforms(
    config: Res<SimConfig>,
    mut query: Query<(&Pose, &mut Transform, Has<Ant>)>,
) {
    for (pose, mut transform, is_ant) in query.iter_mut() {
        let world = sim_to_world(pose.position, &config);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
        // The ant mesh points up, headings are measured from +X.
        let turn = if is_ant { -FRAC_PI_2 } else { 0.0 };
        transform.rotation = Quat::from_rotation_z(pose.angle.to_radians() + turn);
    }
}

// Window clicks, flipped into sim space.
fn pointer_press_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut presses: EventWriter<PointerPress>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let position = Vec2::new(cursor.x, window.height() - cursor.y);
    for &button in buttons.get_just_pressed() {
        presses.write(PointerPress { position, button });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zones::Zones;

    #[test]
    fn nest_maps_right_of_center() {
        let config = SimConfig::default();
        let zones = Zones::from_config(&config);
        assert_eq!(sim_to_world(zones.nest.center, &config), Vec2::new(270.0, 0.0));
        assert_eq!(sim_to_world(Vec2::ZERO, &config), Vec2::new(-400.0, -280.0));
    }
}
