mod anim;
mod battle;
mod content;
mod core;
mod enemies;
mod level;
mod player;
mod score;
mod typing;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Keyrunner".to_string(),
                resolution: (1280u32, 720u32).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 1400.0))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            anim::AnimPlugin,
            typing::TypingPlugin,
            score::ScorePlugin,
            player::PlayerPlugin,
            enemies::EnemiesPlugin,
            battle::BattlePlugin,
            level::LevelPlugin,
        ))
        .run();
}
