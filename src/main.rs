use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use clap::Parser;
use combo_caster::game::resources::GameSettings;
use combo_caster::states::GameState;
use combo_caster::wave::resources::{FIRST_WAVE_SIZE, SPAWN_INTERVAL, WAVE_GROWTH};

/// Elemental spell-combo arena game
#[derive(Parser, Debug)]
#[command(name = "combo-caster")]
#[command(author, version, about = "Type a combo, cast a spell, survive the waves", long_about = None)]
struct Args {
    /// Seed for all gameplay randomness (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Enemies in the first wave
    #[arg(long = "first-wave", default_value_t = FIRST_WAVE_SIZE)]
    first_wave: usize,

    /// Factor applied to the quota after each wave
    #[arg(long = "wave-growth", default_value_t = WAVE_GROWTH)]
    wave_growth: f32,

    /// Seconds between enemy spawns
    #[arg(long = "spawn-interval", default_value_t = SPAWN_INTERVAL)]
    spawn_interval: f32,

    /// Disable sound effects
    #[arg(long)]
    mute: bool,
}

impl Args {
    fn settings(&self) -> GameSettings {
        GameSettings {
            seed: self.seed,
            first_wave_size: self.first_wave.max(1),
            wave_growth: self.wave_growth.max(1.0),
            spawn_interval: self.spawn_interval.max(0.0),
            mute: self.mute,
        }
    }
}

fn main() {
    let args = Args::parse();

    App::new()
        .insert_resource(args.settings())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Combo Caster".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(AudioPlugin)
        .init_state::<GameState>()
        .add_plugins(combo_caster::plugin)
        .run();
}
