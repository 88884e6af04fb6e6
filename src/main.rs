//! Llama Blaster headless runner
//!
//! Runs the simulation without a window: the llama sweeps its aim around
//! and fires whenever allowed. Usage: `llama-blaster [settings.json]`.

use anyhow::Result;

use llama_blaster::Settings;
use llama_blaster::consts::PROJECTILE_MAX_LIFE;
use llama_blaster::sim::{GameState, SimEvent, TickInput, tick};

/// Frame delta for the headless loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Simulated run length (seconds)
const RUN_SECONDS: f32 = 60.0;
/// Aim sweep speed (radians/second)
const SWEEP_SPEED: f32 = 0.8;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Llama Blaster (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mut state = GameState::new(&settings)?;

    let frames = (RUN_SECONDS / FRAME_DT).round() as u32;
    let (mut spawned, mut fired, mut hits, mut kills) = (0u32, 0u32, 0u32, 0u32);
    let mut peak_projectiles = 0;

    for _ in 0..frames {
        let input = TickInput {
            target_angle: Some(state.time * SWEEP_SPEED),
            fire: true,
        };
        tick(&mut state, &input, FRAME_DT);

        for event in state.drain_events() {
            match event {
                SimEvent::EnemySpawned { .. } => spawned += 1,
                SimEvent::ProjectileFired { .. } => fired += 1,
                SimEvent::EnemyHit { .. } => hits += 1,
                SimEvent::EnemyDestroyed { pos } => {
                    kills += 1;
                    log::info!("Enemy destroyed at ({:.2}, {:.2})", pos.x, pos.y);
                }
            }
        }
        peak_projectiles = peak_projectiles.max(state.projectiles.len());
    }

    log::info!(
        "Ran {frames} frames ({:.1}s): {spawned} spawned, {fired} shots, {hits} hits, {kills} kills",
        state.time
    );
    log::info!(
        "End state: {} enemies alive, {} projectiles in flight (peak {peak_projectiles}, max life {PROJECTILE_MAX_LIFE}s)",
        state.enemies.alive_count(),
        state.projectiles.len()
    );
    Ok(())
}
