use bevy::{
    color::palettes::css::{BLUE, GREEN, RED},
    prelude::*,
    sprite::Anchor,
};

use crate::{
    core::{
        config::SimConfig,
        zones::{Zone, Zones},
    },
    game::render::sim_to_world,
};

const HUD_Z: f32 = 10.0;

const HELP_TEXT: &str = "Left Click For New Spider.\nRight Click For New Leaf";
const RULES_TEXT: &str = "Ants Hunt In Pairs\n\
For Spiders: Big Ants, For Leaves: Small Ants\n\
Deliberate Time Delay Of 1.5 sec In Sensing Target";

pub fn setup_hud(mut commands: Commands, config: Res<SimConfig>, zones: Res<Zones>) {
    let mut text = |content: &str, at: Vec2, size: f32, anchor: Anchor| {
        commands.spawn((
            Text2d::new(content),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(Color::BLACK),
            anchor,
            Transform::from_translation(sim_to_world(at, &config).extend(HUD_Z)),
        ));
    };

    text(HELP_TEXT, Vec2::new(40.0, 75.0), 26.0, Anchor::BottomLeft);
    text(RULES_TEXT, Vec2::new(40.0, 15.0), 18.0, Anchor::BottomLeft);

    for (label, zone) in [
        ("LEAF STORE", zones.store),
        ("ANTS NEST", zones.nest),
        ("SPIDER PRISON", zones.prison),
    ] {
        let at = zone.center - Vec2::new(zone.radius + 10.0, 20.0);
        text(label, at, 16.0, Anchor::BottomRight);
    }
}

pub fn draw_zones(mut gizmos: Gizmos, config: Res<SimConfig>, zones: Res<Zones>) {
    let mut outline = |zone: Zone, color: Color| {
        gizmos.circle_2d(sim_to_world(zone.center, &config), zone.radius, color);
    };
    outline(zones.nest, Color::from(BLUE));
    outline(zones.store, Color::from(GREEN));
    outline(zones.prison, Color::from(RED));
}
